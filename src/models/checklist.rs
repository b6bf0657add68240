//! Modelo de item do checklist de manutenção (`checklist_manutencao`)

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChecklistItem {
    pub id: i64,
    pub veiculo_id: Option<i64>,
    pub item: String,
    pub concluido: bool,
    pub data_verificacao: Option<NaiveDateTime>,
    pub mecanico_id: Option<i64>,
}
