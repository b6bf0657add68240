use serde::Deserialize;
use validator::Validate;

use crate::models::chat_message::MessageKind;
use crate::utils::validation::validate_not_blank;

// Request para enviar mensagem ao chat
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(required, custom = "validate_not_blank")]
    pub mensagem: Option<String>,
    #[validate(range(min = 1))]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub tipo: MessageKind,
}

// Marcar mensagem como respondida
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageRequest {
    pub respondida: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_user() {
        let request: CreateMessageRequest = serde_json::from_str(r#"{"mensagem": "Qual o horário da 101?"}"#).unwrap();
        assert_eq!(request.tipo, MessageKind::User);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_system_message() {
        let request: CreateMessageRequest =
            serde_json::from_str(r#"{"mensagem": "Ônibus atrasado 10 min", "tipo": "system"}"#).unwrap();
        assert_eq!(request.tipo, MessageKind::System);
        assert!(request.usuario_id.is_none());
    }
}
