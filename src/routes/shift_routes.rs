use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::shift_controller::ShiftController;
use crate::dto::shift_dto::{CreateShiftRequest, UpdateShiftRequest};
use crate::dto::{ApiResponse, WriteResponse};
use crate::models::shift::Shift;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, JsonBody};

const MISSING_ID: &str = "ID da escala não fornecido";

pub fn create_shift_router() -> Router<AppState> {
    Router::new()
        .route(
            "/escalas",
            get(list_shifts)
                .post(create_shift)
                .put(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .fallback(method_not_allowed),
        )
        .route("/escalas/:id", put(update_shift).fallback(method_not_allowed))
}

async fn list_shifts(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Shift>>>, AppError> {
    let controller = ShiftController::new(state.pool.clone());
    let shifts = controller.list(state.config.local_today()).await?;
    Ok(Json(ApiResponse::success(shifts)))
}

async fn create_shift(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateShiftRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = ShiftController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_shift(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    JsonBody(request): JsonBody<UpdateShiftRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = ShiftController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
