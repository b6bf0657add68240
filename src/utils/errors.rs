//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro da API e sua conversão
//! para respostas HTTP `{success: false, error, code}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use validator::{ValidationErrors, ValidationErrorsKind};

const INTERNAL_MESSAGE: &str = "Erro interno do servidor";

// SQLSTATE do PostgreSQL
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Violações de integridade viram erro do cliente; o resto é erro interno
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    warn!("🔗 Referência inexistente: {}", db.message());
                    return AppError::BadRequest("Registro relacionado não encontrado".to_string());
                }
                Some(UNIQUE_VIOLATION) => {
                    warn!("🔁 Registro duplicado: {}", db.message());
                    return AppError::Conflict("Registro em conflito com outro já existente".to_string());
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

/// Corpo de erro da API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) | AppError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Jwt(_) => "JWT_ERROR",
            AppError::Hash(_) => "HASH_ERROR",
        }
    }

    /// Mensagem exposta ao cliente; detalhes internos ficam só no log
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(errors) => validation_message(errors),
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::BadRequest(msg)
            | AppError::Jwt(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Método não permitido".to_string(),
            AppError::Database(_) | AppError::Internal(_) | AppError::Hash(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {} ({})", self, status.as_u16());
        }

        let body = ErrorResponse {
            success: false,
            error: self.public_message(),
            code: self.code(),
        };

        (status, Json(body)).into_response()
    }
}

/// Converter os erros do validator em uma mensagem única, estável e legível
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors)
                if field_errors.iter().any(|e| e.code == "required") =>
            {
                missing.push(*field)
            }
            _ => invalid.push(*field),
        }
    }
    missing.sort_unstable();
    invalid.sort_unstable();

    if !missing.is_empty() {
        format!("Campo obrigatório: {}", missing.join(", "))
    } else if !invalid.is_empty() {
        format!("Campo inválido: {}", invalid.join(", "))
    } else {
        "Dados inválidos".to_string()
    }
}

/// Função helper para erros de recurso não encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} {} não encontrado", resource, id))
}
