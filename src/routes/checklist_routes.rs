use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::checklist_controller::ChecklistController;
use crate::dto::checklist_dto::UpdateChecklistRequest;
use crate::dto::WriteResponse;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::JsonBody;

pub fn create_checklist_router() -> Router<AppState> {
    Router::new().route("/checklist", post(mark_item).fallback(method_not_allowed))
}

async fn mark_item(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateChecklistRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = ChecklistController::new(state.pool.clone());
    let response = controller.mark(request, state.config.local_now()).await?;
    Ok(Json(response))
}
