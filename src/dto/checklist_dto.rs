use serde::Deserialize;
use validator::Validate;

// Marcar um item do checklist de manutenção
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateChecklistRequest {
    #[validate(required, range(min = 1))]
    pub item_id: Option<i64>,
    #[validate(required)]
    pub concluido: Option<bool>,
    #[validate(range(min = 1))]
    pub mecanico_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::validation_message;

    #[test]
    fn test_concluido_false_is_present() {
        let request: UpdateChecklistRequest =
            serde_json::from_str(r#"{"item_id": 4, "concluido": false}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_item() {
        let request: UpdateChecklistRequest = serde_json::from_str(r#"{"concluido": true}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Campo obrigatório: item_id");
    }
}
