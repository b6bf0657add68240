//! Extractors da API
//!
//! Corpo JSON e parâmetros de caminho com rejeições convertidas em `AppError`,
//! para que todo erro saia no mesmo formato `{success: false, error}`.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Corpo JSON aceito com qualquer content-type; corpo vazio equivale a `{}`
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao ler o corpo: {}", e.body_text())))?;

        parse_json_body(&bytes).map(JsonBody)
    }
}

/// Decodificar o corpo de uma requisição
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_str("{}")
            .map_err(|e| AppError::BadRequest(format!("JSON inválido: {}", e)));
    }

    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("JSON inválido: {}", e)))
}

/// Parâmetros de caminho (`/chamados/{id}`) com erro 400 padronizado
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|e| AppError::BadRequest(format!("Parâmetro inválido: {}", e.body_text())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        mensagem: Option<String>,
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let payload: Payload = parse_json_body(b"  \n").unwrap();
        assert!(payload.mensagem.is_none());
    }

    #[test]
    fn test_valid_body() {
        let payload: Payload = parse_json_body(r#"{"mensagem": "Olá"}"#.as_bytes()).unwrap();
        assert_eq!(payload.mensagem.as_deref(), Some("Olá"));
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = parse_json_body::<Payload>(b"{mensagem:").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.starts_with("JSON inválido")));
    }
}
