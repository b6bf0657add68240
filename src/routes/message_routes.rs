use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::message_controller::MessageController;
use crate::dto::message_dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::dto::{ApiResponse, WriteResponse};
use crate::models::chat_message::ChatMessage;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, JsonBody};

const MISSING_ID: &str = "ID da mensagem não fornecido";

pub fn create_message_router() -> Router<AppState> {
    Router::new()
        .route(
            "/mensagens",
            get(list_messages)
                .post(send_message)
                .put(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .fallback(method_not_allowed),
        )
        .route("/mensagens/:id", put(update_message).fallback(method_not_allowed))
}

async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChatMessage>>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let messages = controller.list().await?;
    Ok(Json(ApiResponse::success(messages)))
}

async fn send_message(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateMessageRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let response = controller.create(request, state.config.local_now()).await?;
    Ok(Json(response))
}

async fn update_message(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    JsonBody(request): JsonBody<UpdateMessageRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
