use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_date_or_blank, validate_not_blank};

// Request para publicar um aviso
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(required, length(max = 200), custom = "validate_not_blank")]
    pub titulo: Option<String>,
    #[validate(required, custom = "validate_not_blank")]
    pub conteudo: Option<String>,
    #[validate(required, length(max = 30), custom = "validate_not_blank")]
    pub tipo: Option<String>,
    #[validate(required, length(max = 20), custom = "validate_not_blank")]
    pub prioridade: Option<String>,
    #[validate(range(min = 1))]
    pub autor_id: Option<i64>,
    #[validate(custom = "validate_date_or_blank")]
    pub data_expiracao: Option<String>,
}

impl CreateNoticeRequest {
    /// Data de expiração vazia vale como ausente
    pub fn expiration(&self) -> Option<&str> {
        self.data_expiracao
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

// Atualização parcial de um aviso
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateNoticeRequest {
    #[validate(length(min = 1, max = 200))]
    pub titulo: Option<String>,
    #[validate(length(min = 1))]
    pub conteudo: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub prioridade: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub tipo: Option<String>,
}

impl UpdateNoticeRequest {
    pub fn is_empty(&self) -> bool {
        self.titulo.is_none()
            && self.conteudo.is_none()
            && self.prioridade.is_none()
            && self.tipo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::validation_message;

    #[test]
    fn test_empty_expiration_is_absent() {
        let request = CreateNoticeRequest {
            data_expiracao: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.expiration(), None);
    }

    #[test]
    fn test_missing_fields() {
        let request: CreateNoticeRequest = serde_json::from_str(r#"{"titulo": "Feriado"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Campo obrigatório: conteudo, prioridade, tipo"
        );
    }
}
