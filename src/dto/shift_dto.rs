use serde::Deserialize;
use validator::Validate;

use crate::models::shift::ShiftStatus;
use crate::utils::validation::{validate_date, validate_time};

pub const DEFAULT_TURNO: &str = "integral";

// Request para lançar uma escala
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateShiftRequest {
    #[validate(required, range(min = 1))]
    pub motorista_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub veiculo_id: Option<i64>,
    #[validate(required, range(min = 1))]
    pub rota_id: Option<i64>,
    #[validate(required, custom = "validate_date")]
    pub data: Option<String>,
    #[validate(required, custom = "validate_time")]
    pub horario_inicio: Option<String>,
    #[validate(required, custom = "validate_time")]
    pub horario_fim: Option<String>,
    #[validate(length(max = 20))]
    pub turno: Option<String>,
    pub observacoes: Option<String>,
}

impl CreateShiftRequest {
    pub fn turno_or_default(&self) -> &str {
        self.turno
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TURNO)
    }
}

// Atualização parcial de uma escala
#[derive(Debug, Default, Deserialize)]
pub struct UpdateShiftRequest {
    pub status: Option<ShiftStatus>,
    pub observacoes: Option<String>,
}

impl UpdateShiftRequest {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.observacoes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::validation_message;

    #[test]
    fn test_turno_defaults_to_integral() {
        let request = CreateShiftRequest::default();
        assert_eq!(request.turno_or_default(), "integral");

        let request = CreateShiftRequest {
            turno: Some("manha".to_string()),
            ..Default::default()
        };
        assert_eq!(request.turno_or_default(), "manha");
    }

    #[test]
    fn test_malformed_time_is_invalid() {
        let request: CreateShiftRequest = serde_json::from_str(
            r#"{"motorista_id": 3, "veiculo_id": 1, "rota_id": 101, "data": "2024-06-03",
                "horario_inicio": "6h", "horario_fim": "14:00"}"#,
        )
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Campo inválido: horario_inicio");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<UpdateShiftRequest>(r#"{"status": "feito"}"#).is_err());
    }
}
