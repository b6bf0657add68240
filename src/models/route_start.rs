//! Modelo de início de linha (`inicio_linha`)
//!
//! Registra quando um motorista começa a operar uma rota; é a base da
//! estimativa de horário de passagem.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::route::ScheduleEntry;

pub const STATUS_ACTIVE: &str = "ativa";
pub const STATUS_FINISHED: &str = "finalizada";

/// Início de linha com os dados da rota, do veículo e do motorista
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RouteStart {
    pub id: i64,
    pub motorista_id: i64,
    pub escala_id: i64,
    pub rota_id: i64,
    pub veiculo_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub horario_inicio: NaiveDateTime,
    pub horario_fim: Option<NaiveDateTime>,
    pub status: String,
    pub rota_nome: Option<String>,
    pub duracao: Option<String>,
    pub tarifa: Option<Decimal>,
    pub origem: Option<String>,
    pub destino: Option<String>,
    pub veiculo_numero: Option<String>,
    pub motorista_nome: Option<String>,
}

impl RouteStart {
    pub fn start_coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Início de linha ativo acompanhado do quadro de horários da rota
#[derive(Debug, Clone, Serialize)]
pub struct ActiveRouteStart {
    #[serde(flatten)]
    pub start: RouteStart,
    pub horarios: Vec<ScheduleEntry>,
}
