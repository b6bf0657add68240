use sqlx::PgPool;

use crate::models::route::{Route, ScheduleEntry};
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, numero, nome, origem, destino, ativa, tarifa, duracao
            FROM rotas
            WHERE ativa = TRUE
            ORDER BY nome
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// Horários ativos de várias rotas numa única consulta
    pub async fn schedules_for(&self, route_ids: &[i64]) -> Result<Vec<ScheduleEntry>, AppError> {
        if route_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT rota_id, horario, dia_semana
            FROM horarios_rotas
            WHERE rota_id = ANY($1) AND ativo = TRUE
            ORDER BY rota_id, horario
            "#,
        )
        .bind(route_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn schedule_of(&self, route_id: i64) -> Result<Vec<ScheduleEntry>, AppError> {
        self.schedules_for(&[route_id]).await
    }
}
