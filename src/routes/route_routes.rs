use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::route_controller::RouteController;
use crate::dto::ApiResponse;
use crate::models::route::RouteWithSchedule;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route("/rotas", get(list_routes).fallback(method_not_allowed))
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RouteWithSchedule>>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let routes = controller.list().await?;
    Ok(Json(ApiResponse::success(routes)))
}
