use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::checklist::ChecklistItem;
use crate::utils::errors::AppError;

pub struct ChecklistRepository {
    pool: PgPool,
}

impl ChecklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Marcar um item; `None` quando o item não existe
    pub async fn mark(
        &self,
        item_id: i64,
        concluido: bool,
        mecanico_id: Option<i64>,
        checked_at: NaiveDateTime,
    ) -> Result<Option<ChecklistItem>, AppError> {
        let item = sqlx::query_as::<_, ChecklistItem>(
            r#"
            UPDATE checklist_manutencao
            SET concluido = $2, data_verificacao = $3, mecanico_id = $4
            WHERE id = $1
            RETURNING id, veiculo_id, item, concluido, data_verificacao, mecanico_id
            "#,
        )
        .bind(item_id)
        .bind(concluido)
        .bind(checked_at)
        .bind(mecanico_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
