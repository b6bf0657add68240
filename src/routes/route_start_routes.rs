use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::route_start_controller::{RouteStartController, NO_ACTIVE_LINE};
use crate::dto::route_start_dto::{CreateRouteStartRequest, PassageEstimateResponse};
use crate::dto::{ApiResponse, WriteResponse};
use crate::models::route_start::{ActiveRouteStart, RouteStart};
use crate::routes::method_not_allowed;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ApiPath, JsonBody};

/// Início de linha e horário de passagem
pub fn create_route_start_router() -> Router<AppState> {
    Router::new()
        .route(
            "/inicio-linha",
            get(latest_start).post(start_line).fallback(method_not_allowed),
        )
        .route(
            "/inicio-linha/ativo",
            get(latest_start_with_schedule).fallback(method_not_allowed),
        )
        .route(
            "/horario-passagem",
            get(|| async { AppError::BadRequest("ID da rota é obrigatório".to_string()) })
                .fallback(method_not_allowed),
        )
        .route(
            "/horario-passagem/:rota_id",
            get(passage_for_route).fallback(method_not_allowed),
        )
        .route(
            "/horario-passagem/:rota_id/:latitude",
            get(passage_for_route_partial).fallback(method_not_allowed),
        )
        .route(
            "/horario-passagem/:rota_id/:latitude/:longitude",
            get(passage_for_stop).fallback(method_not_allowed),
        )
}

async fn latest_start(State(state): State<AppState>) -> Result<Json<ApiResponse<RouteStart>>, AppError> {
    let controller = RouteStartController::new(state.pool.clone());
    let response = match controller.latest().await? {
        Some(start) => ApiResponse::success(start),
        None => ApiResponse::empty("Nenhuma linha ativa"),
    };
    Ok(Json(response))
}

async fn latest_start_with_schedule(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ActiveRouteStart>>, AppError> {
    let controller = RouteStartController::new(state.pool.clone());
    let response = match controller.latest_with_schedule().await? {
        Some(start) => ApiResponse::success(start),
        None => ApiResponse::empty("Nenhuma linha ativa"),
    };
    Ok(Json(response))
}

async fn start_line(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRouteStartRequest>,
) -> Result<Json<WriteResponse>, AppError> {
    let controller = RouteStartController::new(state.pool.clone());
    let response = controller.create(request, state.config.local_now()).await?;
    Ok(Json(response))
}

async fn passage_for_route(
    State(state): State<AppState>,
    ApiPath(rota_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<PassageEstimateResponse>>, AppError> {
    passage_estimate(&state, rota_id, None).await
}

// latitude sem longitude: estimativa sem posição
async fn passage_for_route_partial(
    State(state): State<AppState>,
    ApiPath((rota_id, _latitude)): ApiPath<(i64, String)>,
) -> Result<Json<ApiResponse<PassageEstimateResponse>>, AppError> {
    passage_estimate(&state, rota_id, None).await
}

async fn passage_for_stop(
    State(state): State<AppState>,
    ApiPath((rota_id, latitude, longitude)): ApiPath<(i64, f64, f64)>,
) -> Result<Json<ApiResponse<PassageEstimateResponse>>, AppError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::BadRequest("Coordenadas inválidas".to_string()));
    }
    passage_estimate(&state, rota_id, Some((latitude, longitude))).await
}

async fn passage_estimate(
    state: &AppState,
    rota_id: i64,
    stop: Option<(f64, f64)>,
) -> Result<Json<ApiResponse<PassageEstimateResponse>>, AppError> {
    let controller = RouteStartController::new(state.pool.clone());
    let response = match controller
        .passage_estimate(rota_id, stop, state.config.local_now())
        .await?
    {
        Some(estimate) => ApiResponse::success(estimate),
        None => ApiResponse::empty(NO_ACTIVE_LINE),
    };
    Ok(Json(response))
}
