use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::ApiResponse;
use crate::models::dashboard::Dashboard;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard).fallback(method_not_allowed))
}

async fn get_dashboard(State(state): State<AppState>) -> Result<Json<ApiResponse<Dashboard>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let dashboard = controller.summary(state.config.local_today()).await?;
    Ok(Json(ApiResponse::success(dashboard)))
}
