//! Modelo de escala de motorista (`escalas`)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado da escala
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Pendente,
    Confirmado,
    Cancelado,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Pendente => "pendente",
            ShiftStatus::Confirmado => "confirmado",
            ShiftStatus::Cancelado => "cancelado",
        }
    }
}

/// Escala com motorista, rota e veículo já resolvidos
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Shift {
    pub id: i64,
    pub motorista_id: i64,
    pub veiculo_id: i64,
    pub rota_id: i64,
    pub data: NaiveDate,
    pub horario_inicio: NaiveTime,
    pub horario_fim: NaiveTime,
    pub turno: String,
    pub status: String,
    pub observacoes: Option<String>,
    pub motorista_nome: Option<String>,
    pub rota_nome: Option<String>,
    pub veiculo_numero: Option<String>,
}

/// Intervalo já ocupado por um motorista numa data
#[derive(Debug, Clone, FromRow)]
pub struct ShiftSlot {
    pub id: i64,
    pub horario_inicio: NaiveTime,
    pub horario_fim: NaiveTime,
}
