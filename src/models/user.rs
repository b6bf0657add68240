//! Modelo de usuário
//!
//! Mapeia a tabela `usuarios`. O hash da senha nunca é serializado.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Perfil de acesso (`usuarios.tipo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Passageiro,
    Motorista,
    Mecanico,
    Gestor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Passageiro => "passageiro",
            UserRole::Motorista => "motorista",
            UserRole::Mecanico => "mecanico",
            UserRole::Gestor => "gestor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passageiro" => Ok(UserRole::Passageiro),
            "motorista" => Ok(UserRole::Motorista),
            "mecanico" => Ok(UserRole::Mecanico),
            "gestor" => Ok(UserRole::Gestor),
            other => Err(format!("tipo de usuário desconhecido: {}", other)),
        }
    }
}

/// Linha completa de `usuarios`
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub senha: String,
    pub tipo: String,
    pub nome: String,
    pub email: Option<String>,
    pub ativo: bool,
}

/// Dados públicos devolvidos no login
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub nome: String,
    pub tipo: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            nome: user.nome.clone(),
            tipo: user.tipo.clone(),
        }
    }
}

/// Motorista ativo para os seletores da gestão
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub username: String,
    pub nome: String,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_value(UserRole::Mecanico).unwrap(), "mecanico");
        assert_eq!("gestor".parse::<UserRole>().unwrap(), UserRole::Gestor);
        assert!("admin".parse::<UserRole>().is_err());
    }
}
