//! Conferência de credenciais do login
//!
//! Senhas novas são hashes bcrypt (`$2a$`, `$2b$`, `$2y$`); contas antigas
//! ainda podem guardar a senha em texto puro e continuam aceitas.

use bcrypt::verify;
use tracing::warn;

use crate::models::user::User;
use crate::utils::errors::AppError;

pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

pub fn is_bcrypt_hash(stored: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| stored.starts_with(prefix))
}

/// Comparar a senha informada com a armazenada
pub fn password_matches(password: &str, stored: &str) -> Result<bool, AppError> {
    if is_bcrypt_hash(stored) {
        return verify(password, stored).map_err(|e| AppError::Hash(e.to_string()));
    }

    warn!("⚠️ Conta com senha legada em texto puro");
    Ok(password == stored)
}

/// Usuário autenticado, ou 401 uniforme para inexistente, inativo ou senha errada
pub fn authenticate<'a>(user: Option<&'a User>, password: &str) -> Result<&'a User, AppError> {
    let invalid = || AppError::Unauthorized(INVALID_CREDENTIALS.to_string());

    let user = user.filter(|u| u.ativo).ok_or_else(invalid)?;
    if password_matches(password, &user.senha)? {
        Ok(user)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(senha: &str, ativo: bool) -> User {
        User {
            id: 3,
            username: "joao.motorista".to_string(),
            senha: senha.to_string(),
            tipo: "motorista".to_string(),
            nome: "João da Silva".to_string(),
            email: None,
            ativo,
        }
    }

    fn hashed(password: &str) -> String {
        bcrypt::hash(password, 4).unwrap()
    }

    fn assert_invalid(result: Result<&User, AppError>) {
        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("esperado 401, veio {:?}", other.map(|u| u.id)),
        }
    }

    #[test]
    fn test_bcrypt_password() {
        let account = user(&hashed("onibus123"), true);
        assert_eq!(authenticate(Some(&account), "onibus123").unwrap().id, 3);
        assert_invalid(authenticate(Some(&account), "errada"));
    }

    #[test]
    fn test_php_style_2y_hash_is_accepted() {
        let php_hash = hashed("gestor2024").replacen("$2b$", "$2y$", 1);
        let account = user(&php_hash, true);
        assert!(authenticate(Some(&account), "gestor2024").is_ok());
    }

    #[test]
    fn test_legacy_plaintext_password() {
        let account = user("123456", true);
        assert!(authenticate(Some(&account), "123456").is_ok());
        assert_invalid(authenticate(Some(&account), "1234567"));
    }

    #[test]
    fn test_inactive_and_unknown_users_get_the_same_error() {
        let inactive = user("123456", false);
        assert_invalid(authenticate(Some(&inactive), "123456"));
        assert_invalid(authenticate(None, "123456"));
    }

    #[test]
    fn test_is_bcrypt_hash() {
        assert!(is_bcrypt_hash("$2a$10$abcdefghijklmnopqrstuu"));
        assert!(!is_bcrypt_hash("senha"));
    }
}
