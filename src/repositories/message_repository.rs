use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::chat_message::{ChatMessage, MessageKind};
use crate::utils::errors::AppError;

pub const RECENT_LIMIT: i64 = 50;

pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_recent(&self) -> Result<Vec<ChatMessage>, AppError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT m.id, m.usuario_id, u.nome AS usuario_nome, m.mensagem, m.tipo, m.respondida, m.data_envio
            FROM mensagens_chat m
            LEFT JOIN usuarios u ON m.usuario_id = u.id
            ORDER BY m.data_envio DESC, m.id DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn create(
        &self,
        usuario_id: Option<i64>,
        mensagem: &str,
        tipo: MessageKind,
        sent_at: NaiveDateTime,
    ) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO mensagens_chat (usuario_id, mensagem, tipo, data_envio)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(usuario_id)
        .bind(mensagem)
        .bind(tipo.as_str())
        .bind(sent_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn set_answered(&self, id: i64, respondida: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE mensagens_chat SET respondida = $2 WHERE id = $1")
            .bind(id)
            .bind(respondida)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
