//! Utilidades JWT
//!
//! Geração e verificação dos tokens HS256 emitidos no login.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, models::user::UserRole, utils::errors::AppError};

/// Claims do token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,      // id do usuário
    pub username: String,
    pub tipo: UserRole,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
}

impl JwtClaims {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::Jwt("Token com usuário inválido".to_string()))
    }
}

/// Configuração de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Gerar o token de um usuário autenticado
pub fn generate_token(
    user_id: i64,
    username: &str,
    tipo: UserRole,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = i64::try_from(config.expiration)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .and_then(|validity| now.checked_add_signed(validity))
        .ok_or_else(|| AppError::Internal(format!("Validade de token inválida: {}", config.expiration)))?;

    let claims = JwtClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        tipo,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
        jti: Uuid::new_v4().to_string(),
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Erro ao gerar token: {}", e)))
}

/// Verificar e decodificar um token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AppError::Jwt("Token inválido ou expirado".to_string()))?;

    Ok(token_data.claims)
}

/// Extrair o token do header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization deve começar com 'Bearer '".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Jwt("Token não pode estar vazio".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "segredo-de-teste".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_token_carries_user_and_role() {
        let token = generate_token(42, "joao.motorista", UserRole::Motorista, &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();

        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.username, "joao.motorista");
        assert_eq!(claims.tipo, UserRole::Motorista);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = generate_token(1, "gestor", UserRole::Gestor, &config()).unwrap();
        let other = JwtConfig {
            secret: "outro".to_string(),
            expiration: 3600,
        };
        assert!(matches!(verify_token(&token, &other), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_absurd_expiration_is_an_error() {
        let huge = JwtConfig {
            secret: "segredo-de-teste".to_string(),
            expiration: u64::MAX,
        };
        let err = generate_token(1, "gestor", UserRole::Gestor, &huge).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer   ").is_err());
    }
}
