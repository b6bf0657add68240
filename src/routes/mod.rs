//! Rotas HTTP da API
//!
//! Cada recurso monta o seu `Router`; aqui eles são reunidos sob a base
//! configurada (`API_BASE_PATH`) junto com o health check, o fallback de
//! endpoint desconhecido e as camadas de CORS, compressão e trace.

pub mod auth_routes;
pub mod checklist_routes;
pub mod dashboard_routes;
pub mod message_routes;
pub mod notice_routes;
pub mod route_routes;
pub mod route_start_routes;
pub mod shift_routes;
pub mod ticket_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{
    extract::{OriginalUri, State},
    middleware::from_fn_with_state,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::warn;

use crate::database::connection::ping;
use crate::middleware::{auth_middleware, cors_layer};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Método não suportado em um endpoint conhecido
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn endpoint_not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!(
        "Endpoint não encontrado: {}",
        first_segment(uri.path(), &state.config.api_base_path)
    ))
}

/// Primeiro segmento do caminho depois da base da API
fn first_segment<'a>(path: &'a str, base_path: &str) -> &'a str {
    let relative = path
        .strip_prefix(base_path)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(path);
    relative
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match ping(&state.pool).await {
        Ok(()) => "connected",
        Err(e) => {
            warn!("🗄️ Health check sem banco de dados: {}", e);
            "disconnected"
        }
    };

    Json(json!({
        "status": "ok",
        "service": "transit-backend",
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Todos os recursos da API, com o middleware de autenticação aplicado às rotas conhecidas
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth_routes::create_auth_router())
        .merge(route_routes::create_route_router())
        .merge(notice_routes::create_notice_router())
        .merge(ticket_routes::create_ticket_router())
        .merge(shift_routes::create_shift_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(dashboard_routes::create_dashboard_router())
        .merge(message_routes::create_message_router())
        .merge(user_routes::create_user_router())
        .merge(route_start_routes::create_route_start_router())
        .merge(checklist_routes::create_checklist_router())
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Aplicação completa, pronta para `axum::serve`
pub fn build_router(state: AppState) -> Router {
    let api = create_api_router(state.clone());
    let base_path = state.config.api_base_path.clone();

    let router = Router::new().route("/health", get(health_check));
    let router = if base_path.is_empty() {
        router.merge(api)
    } else {
        router.nest(&base_path, api)
    };

    router
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment_strips_base_path() {
        assert_eq!(first_segment("/api/onibus", "/api"), "onibus");
        assert_eq!(first_segment("/api/onibus/3", "/api"), "onibus");
        assert_eq!(first_segment("/api", "/api"), "");
    }

    #[test]
    fn test_first_segment_outside_base_path() {
        assert_eq!(first_segment("/apix/rotas", "/api"), "apix");
        assert_eq!(first_segment("/rotas/1", ""), "rotas");
    }
}
