use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::ApiResponse;
use crate::models::vehicle::Vehicle;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/veiculos", get(list_vehicles).fallback(method_not_allowed))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list().await?;
    Ok(Json(ApiResponse::success(vehicles)))
}
