use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::dashboard::FleetStatus;
use crate::utils::errors::AppError;

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fleet_status(&self) -> Result<FleetStatus, AppError> {
        let fleet = sqlx::query_as::<_, FleetStatus>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'disponivel') AS disponiveis,
                COUNT(*) FILTER (WHERE status = 'manutencao') AS em_manutencao,
                COUNT(*) FILTER (WHERE status = 'fora_servico') AS fora_servico
            FROM veiculos
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(fleet)
    }

    /// (motoristas ativos, motoristas com escala confirmada em `today`)
    pub async fn driver_counts(&self, today: NaiveDate) -> Result<(i64, i64), AppError> {
        let counts = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE EXISTS (
                    SELECT 1 FROM escalas e
                    WHERE e.motorista_id = u.id AND e.data = $1 AND e.status = 'confirmado'
                )) AS dirigindo
            FROM usuarios u
            WHERE u.tipo = 'motorista' AND u.ativo = TRUE
            "#,
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }

    pub async fn open_tickets(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chamados WHERE status = 'aberto'")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn pending_messages(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM mensagens_chat WHERE respondida = FALSE",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
