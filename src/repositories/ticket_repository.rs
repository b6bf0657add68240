use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::dto::ticket_dto::UpdateTicketRequest;
use crate::models::ticket::{Ticket, TicketStatus};
use crate::utils::errors::AppError;

/// Dados já validados de um novo chamado
#[derive(Debug)]
pub struct NewTicket<'a> {
    pub motorista_id: i64,
    pub veiculo_id: i64,
    pub tipo: &'a str,
    pub descricao: &'a str,
    pub urgencia: &'a str,
    pub data_abertura: NaiveDateTime,
}

pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT c.id, c.motorista_id, c.veiculo_id, c.tipo, c.descricao, c.urgencia, c.status,
                   c.mecanico_id, c.observacoes, c.data_abertura, c.data_resolucao,
                   m.nome AS motorista_nome, k.nome AS mecanico_nome, v.numero AS veiculo_numero
            FROM chamados c
            LEFT JOIN usuarios m ON c.motorista_id = m.id
            LEFT JOIN usuarios k ON c.mecanico_id = k.id
            LEFT JOIN veiculos v ON c.veiculo_id = v.id
            ORDER BY c.data_abertura DESC, c.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn create(&self, ticket: NewTicket<'_>) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO chamados (motorista_id, veiculo_id, tipo, descricao, urgencia, status, data_abertura)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(ticket.motorista_id)
        .bind(ticket.veiculo_id)
        .bind(ticket.tipo)
        .bind(ticket.descricao)
        .bind(ticket.urgencia)
        .bind(TicketStatus::Aberto.as_str())
        .bind(ticket.data_abertura)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Atualização parcial. `data_resolucao` só é gravada na transição para resolvido.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateTicketRequest,
        now: NaiveDateTime,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE chamados SET
                data_resolucao = CASE
                    WHEN $2::text = 'resolvido' AND status <> 'resolvido' THEN $5
                    ELSE data_resolucao
                END,
                status = COALESCE($2, status),
                mecanico_id = COALESCE($3, mecanico_id),
                observacoes = COALESCE($4, observacoes)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.status.map(|s| s.as_str()))
        .bind(changes.mecanico_id)
        .bind(changes.observacoes.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM chamados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
