//! Modelo de chamado de manutenção (`chamados`)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado do chamado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Aberto,
    EmAndamento,
    Resolvido,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Aberto => "aberto",
            TicketStatus::EmAndamento => "em_andamento",
            TicketStatus::Resolvido => "resolvido",
        }
    }
}

/// Chamado com os nomes de motorista, mecânico e o número do veículo
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub motorista_id: i64,
    pub veiculo_id: i64,
    pub tipo: String,
    pub descricao: String,
    pub urgencia: String,
    pub status: String,
    pub mecanico_id: Option<i64>,
    pub observacoes: Option<String>,
    pub data_abertura: NaiveDateTime,
    pub data_resolucao: Option<NaiveDateTime>,
    pub motorista_nome: Option<String>,
    pub mecanico_nome: Option<String>,
    pub veiculo_numero: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_frontend_values() {
        let status: TicketStatus = serde_json::from_str("\"em_andamento\"").unwrap();
        assert_eq!(status, TicketStatus::EmAndamento);
        assert_eq!(status.as_str(), "em_andamento");
        assert!(serde_json::from_str::<TicketStatus>("\"fechado\"").is_err());
    }
}
