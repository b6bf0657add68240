use serde::Serialize;

// Resposta padrão de leitura: {success, data} (message só quando houver)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Leitura bem-sucedida sem resultado (`data: null`)
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

// Resposta padrão de escrita: {success, message, id?}
#[derive(Debug, Serialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl WriteResponse {
    pub fn created(message: impl Into<String>, id: i64) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_read_keeps_null_data() {
        let json = serde_json::to_value(ApiResponse::<i64>::empty("Nenhuma linha ativa")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
        assert_eq!(json["message"], "Nenhuma linha ativa");
    }

    #[test]
    fn test_write_response_omits_missing_id() {
        let json = serde_json::to_value(WriteResponse::done("Chamado atualizado com sucesso")).unwrap();
        assert!(json.get("id").is_none());

        let json = serde_json::to_value(WriteResponse::created("Escala lançada com sucesso!", 7)).unwrap();
        assert_eq!(json["id"], 7);
    }
}
