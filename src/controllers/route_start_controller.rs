use chrono::NaiveDateTime;
use sqlx::PgPool;
use tracing::{debug, info};
use validator::Validate;

use crate::dto::common_dto::WriteResponse;
use crate::dto::route_start_dto::{CreateRouteStartRequest, PassageEstimateResponse};
use crate::models::route_start::{ActiveRouteStart, RouteStart};
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::route_start_repository::{NewRouteStart, RouteStartRepository};
use crate::services::passage_estimator::{estimate, PassageInput};
use crate::utils::errors::AppError;
use crate::utils::validation::required;

pub const NO_ACTIVE_LINE: &str = "Nenhuma linha ativa para esta rota";

pub struct RouteStartController {
    repository: RouteStartRepository,
    routes: RouteRepository,
}

impl RouteStartController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteStartRepository::new(pool.clone()),
            routes: RouteRepository::new(pool),
        }
    }

    pub async fn latest(&self) -> Result<Option<RouteStart>, AppError> {
        self.repository.latest_active().await
    }

    /// Linha ativa mais recente com o quadro de horários da rota
    pub async fn latest_with_schedule(&self) -> Result<Option<ActiveRouteStart>, AppError> {
        let Some(start) = self.repository.latest_active().await? else {
            return Ok(None);
        };
        let horarios = self.routes.schedule_of(start.rota_id).await?;

        Ok(Some(ActiveRouteStart { start, horarios }))
    }

    pub async fn create(
        &self,
        request: CreateRouteStartRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        request.validate()?;
        let position = request.position()?;

        let new = NewRouteStart {
            motorista_id: required(request.motorista_id, "motorista_id")?,
            escala_id: required(request.escala_id, "escala_id")?,
            rota_id: required(request.rota_id, "rota_id")?,
            veiculo_id: required(request.veiculo_id, "veiculo_id")?,
            position,
            started_at: now,
        };
        let (motorista_id, rota_id) = (new.motorista_id, new.rota_id);
        let id = self.repository.start(new).await?;

        info!("🚌 Linha {} iniciada: motorista {} na rota {}", id, motorista_id, rota_id);
        Ok(WriteResponse::created("Linha iniciada com sucesso!", id))
    }

    /// Estimativa de passagem no ponto do passageiro; `None` sem linha ativa na rota
    pub async fn passage_estimate(
        &self,
        rota_id: i64,
        stop: Option<(f64, f64)>,
        now: NaiveDateTime,
    ) -> Result<Option<PassageEstimateResponse>, AppError> {
        let Some(start) = self.repository.latest_active_for_route(rota_id).await? else {
            return Ok(None);
        };
        let horarios = self.routes.schedule_of(rota_id).await?;

        let result = estimate(&PassageInput {
            started_at: start.horario_inicio,
            now,
            route_duration: start.duracao.as_deref(),
            start_coordinates: start.start_coordinates(),
            stop_coordinates: stop,
            schedule: &horarios,
        });
        debug!(
            "⏱️ Rota {}: passagem estimada {} ({} km)",
            rota_id, result.horario_passagem_estimado, result.distancia_estimada_km
        );

        Ok(Some(PassageEstimateResponse {
            tarifa: start.tarifa,
            rota: start,
            horarios,
            estimate: result,
        }))
    }
}
