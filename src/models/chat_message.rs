//! Modelo de mensagem do chat (`mensagens_chat`)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Origem da mensagem: passageiro/usuário ou resposta do sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    User,
    System,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::User => "user",
            MessageKind::System => "system",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub usuario_id: Option<i64>,
    pub usuario_nome: Option<String>,
    pub mensagem: String,
    pub tipo: String,
    pub respondida: bool,
    pub data_envio: NaiveDateTime,
}
