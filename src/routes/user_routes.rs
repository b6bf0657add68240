use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::user_controller::UserController;
use crate::dto::ApiResponse;
use crate::models::user::Driver;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new().route(
        "/usuarios/motoristas",
        get(list_drivers).fallback(method_not_allowed),
    )
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Driver>>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let drivers = controller.drivers().await?;
    Ok(Json(ApiResponse::success(drivers)))
}
