use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::route::ScheduleEntry;
use crate::models::route_start::RouteStart;
use crate::services::passage_estimator::PassageEstimate;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_coordinates;

// Request para iniciar uma linha
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateRouteStartRequest {
    #[validate(required, range(min = 1))]
    pub motorista_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub escala_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub rota_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub veiculo_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreateRouteStartRequest {
    /// Posição de partida; latitude e longitude chegam juntas ou não chegam
    pub fn position(&self) -> Result<Option<(f64, f64)>, AppError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => validate_coordinates(lat, lng)
                .map(|_| Some((lat, lng)))
                .map_err(|_| AppError::BadRequest("Coordenadas inválidas".to_string())),
            (None, None) => Ok(None),
            _ => Err(AppError::BadRequest(
                "Latitude e longitude devem ser informadas juntas".to_string(),
            )),
        }
    }
}

/// Payload de `/horario-passagem`
#[derive(Debug, Serialize)]
pub struct PassageEstimateResponse {
    pub rota: RouteStart,
    pub horarios: Vec<ScheduleEntry>,
    #[serde(flatten)]
    pub estimate: PassageEstimate,
    pub tarifa: Option<Decimal>,
}
