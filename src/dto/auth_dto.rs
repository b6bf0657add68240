use serde::{Deserialize, Serialize};

use crate::models::user::UserSummary;

// Login request; campos opcionais para responder 400 com mensagem própria
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Username e senha presentes, ou `None`
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.trim().is_empty() => {
                Some((username.trim(), password))
            }
            _ => None,
        }
    }
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserSummary,
}

impl LoginResponse {
    pub fn success(token: String, user: UserSummary) -> Self {
        Self {
            success: true,
            token,
            user,
        }
    }
}
