use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::notice_controller::NoticeController;
use crate::dto::notice_dto::{CreateNoticeRequest, UpdateNoticeRequest};
use crate::dto::{ApiResponse, WriteResponse};
use crate::models::notice::Notice;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, JsonBody};

const MISSING_ID: &str = "ID do aviso não fornecido";

pub fn create_notice_router() -> Router<AppState> {
    Router::new()
        .route(
            "/avisos",
            get(list_notices)
                .post(create_notice)
                .put(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .delete(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .fallback(method_not_allowed),
        )
        .route(
            "/avisos/:id",
            put(update_notice)
                .delete(delete_notice)
                .fallback(method_not_allowed),
        )
}

async fn list_notices(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Notice>>>, AppError> {
    let controller = NoticeController::new(state.pool.clone());
    let notices = controller.list(state.config.local_today()).await?;
    Ok(Json(ApiResponse::success(notices)))
}

async fn create_notice(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateNoticeRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = NoticeController::new(state.pool.clone());
    let response = controller.create(request, state.config.local_now()).await?;
    Ok(Json(response))
}

async fn update_notice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    JsonBody(request): JsonBody<UpdateNoticeRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = NoticeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_notice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = NoticeController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
