use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::JsonBody;

/// Rota de login
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login).fallback(method_not_allowed))
}

async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;
    Ok(Json(response))
}
