use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::ticket_controller::TicketController;
use crate::dto::ticket_dto::{CreateTicketRequest, UpdateTicketRequest};
use crate::dto::{ApiResponse, WriteResponse};
use crate::models::ticket::Ticket;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, JsonBody};

const MISSING_ID: &str = "ID do chamado não fornecido";

pub fn create_ticket_router() -> Router<AppState> {
    Router::new()
        .route(
            "/chamados",
            get(list_tickets)
                .post(create_ticket)
                .put(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .delete(|| async { AppError::BadRequest(MISSING_ID.to_string()) })
                .fallback(method_not_allowed),
        )
        .route(
            "/chamados/:id",
            put(update_ticket)
                .delete(delete_ticket)
                .fallback(method_not_allowed),
        )
}

async fn list_tickets(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Ticket>>>, AppError> {
    let controller = TicketController::new(state.pool.clone());
    let tickets = controller.list().await?;
    Ok(Json(ApiResponse::success(tickets)))
}

async fn create_ticket(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTicketRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = TicketController::new(state.pool.clone());
    let response = controller.create(request, state.config.local_now()).await?;
    Ok(Json(response))
}

async fn update_ticket(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    JsonBody(request): JsonBody<UpdateTicketRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = TicketController::new(state.pool.clone());
    let response = controller.update(id, request, state.config.local_now()).await?;
    Ok(Json(response))
}

async fn delete_ticket(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = TicketController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
