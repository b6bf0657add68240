use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;

use crate::dto::notice_dto::UpdateNoticeRequest;
use crate::models::notice::Notice;
use crate::utils::errors::AppError;

/// Dados já validados de um novo aviso
#[derive(Debug)]
pub struct NewNotice<'a> {
    pub titulo: &'a str,
    pub conteudo: &'a str,
    pub tipo: &'a str,
    pub prioridade: &'a str,
    pub autor_id: Option<i64>,
    pub data_expiracao: Option<NaiveDate>,
    pub data_publicacao: NaiveDateTime,
}

pub struct NoticeRepository {
    pool: PgPool,
}

impl NoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Avisos ativos e ainda não expirados em `today`
    pub async fn list_current(&self, today: NaiveDate) -> Result<Vec<Notice>, AppError> {
        let notices = sqlx::query_as::<_, Notice>(
            r#"
            SELECT a.id, a.titulo, a.conteudo, a.tipo, a.prioridade, a.autor_id,
                   u.nome AS autor_nome, a.data_publicacao, a.data_expiracao, a.ativo
            FROM avisos a
            LEFT JOIN usuarios u ON a.autor_id = u.id
            WHERE a.ativo = TRUE
              AND (a.data_expiracao IS NULL OR a.data_expiracao >= $1)
            ORDER BY a.data_publicacao DESC, a.id DESC
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(notices)
    }

    pub async fn create(&self, notice: NewNotice<'_>) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO avisos (titulo, conteudo, tipo, prioridade, autor_id, data_expiracao, data_publicacao)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(notice.titulo)
        .bind(notice.conteudo)
        .bind(notice.tipo)
        .bind(notice.prioridade)
        .bind(notice.autor_id)
        .bind(notice.data_expiracao)
        .bind(notice.data_publicacao)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Atualização parcial; retorna `false` quando o aviso não existe
    pub async fn update(&self, id: i64, changes: &UpdateNoticeRequest) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE avisos SET
                titulo = COALESCE($2, titulo),
                conteudo = COALESCE($3, conteudo),
                prioridade = COALESCE($4, prioridade),
                tipo = COALESCE($5, tipo)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.titulo.as_deref())
        .bind(changes.conteudo.as_deref())
        .bind(changes.prioridade.as_deref())
        .bind(changes.tipo.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM avisos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
