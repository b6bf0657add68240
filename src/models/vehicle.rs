//! Modelo de veículo (`veiculos`)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado operacional do veículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Disponivel,
    Manutencao,
    ForaServico,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Disponivel => "disponivel",
            VehicleStatus::Manutencao => "manutencao",
            VehicleStatus::ForaServico => "fora_servico",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub numero: String,
    pub placa: String,
    pub modelo: Option<String>,
    pub status: String,
}
