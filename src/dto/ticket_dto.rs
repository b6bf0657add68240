use serde::Deserialize;
use validator::Validate;

use crate::models::ticket::TicketStatus;
use crate::utils::validation::validate_not_blank;

// Request para abrir um chamado
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(required, range(min = 1))]
    pub motorista_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub veiculo_id: Option<i64>,
    #[validate(required, length(max = 50), custom = "validate_not_blank")]
    pub tipo: Option<String>,
    #[validate(required, custom = "validate_not_blank")]
    pub descricao: Option<String>,
    #[validate(required, length(max = 20), custom = "validate_not_blank")]
    pub urgencia: Option<String>,
}

// Atualização parcial de um chamado
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTicketRequest {
    pub status: Option<TicketStatus>,
    #[validate(range(min = 1))]
    pub mecanico_id: Option<i64>,
    pub observacoes: Option<String>,
}

impl UpdateTicketRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.mecanico_id.is_none() && self.observacoes.is_none()
    }
}
