use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::route_start::{RouteStart, STATUS_ACTIVE, STATUS_FINISHED};
use crate::utils::errors::AppError;

const SELECT_WITH_DETAILS: &str = r#"
    SELECT il.id, il.motorista_id, il.escala_id, il.rota_id, il.veiculo_id,
           il.latitude, il.longitude, il.horario_inicio, il.horario_fim, il.status,
           r.nome AS rota_nome, r.duracao, r.tarifa, r.origem, r.destino,
           v.numero AS veiculo_numero, u.nome AS motorista_nome
    FROM inicio_linha il
    LEFT JOIN rotas r ON il.rota_id = r.id
    LEFT JOIN veiculos v ON il.veiculo_id = v.id
    LEFT JOIN usuarios u ON il.motorista_id = u.id
"#;

/// Dados já validados de um início de linha
#[derive(Debug)]
pub struct NewRouteStart {
    pub motorista_id: i64,
    pub escala_id: i64,
    pub rota_id: i64,
    pub veiculo_id: i64,
    pub position: Option<(f64, f64)>,
    pub started_at: NaiveDateTime,
}

pub struct RouteStartRepository {
    pool: PgPool,
}

impl RouteStartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Início de linha ativo mais recente, de qualquer rota
    pub async fn latest_active(&self) -> Result<Option<RouteStart>, AppError> {
        let sql = format!(
            "{} WHERE il.status = $1 ORDER BY il.horario_inicio DESC, il.id DESC LIMIT 1",
            SELECT_WITH_DETAILS
        );
        let start = sqlx::query_as::<_, RouteStart>(&sql)
            .bind(STATUS_ACTIVE)
            .fetch_optional(&self.pool)
            .await?;

        Ok(start)
    }

    pub async fn latest_active_for_route(&self, rota_id: i64) -> Result<Option<RouteStart>, AppError> {
        let sql = format!(
            "{} WHERE il.rota_id = $1 AND il.status = $2 ORDER BY il.horario_inicio DESC, il.id DESC LIMIT 1",
            SELECT_WITH_DETAILS
        );
        let start = sqlx::query_as::<_, RouteStart>(&sql)
            .bind(rota_id)
            .bind(STATUS_ACTIVE)
            .fetch_optional(&self.pool)
            .await?;

        Ok(start)
    }

    /// Finalizar a linha ativa do motorista e abrir a nova, na mesma transação
    pub async fn start(&self, new: NewRouteStart) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let finished = sqlx::query(
            r#"
            UPDATE inicio_linha SET status = $2, horario_fim = $3
            WHERE motorista_id = $1 AND status = $4
            "#,
        )
        .bind(new.motorista_id)
        .bind(STATUS_FINISHED)
        .bind(new.started_at)
        .bind(STATUS_ACTIVE)
        .execute(&mut *tx)
        .await?;

        if finished.rows_affected() > 0 {
            tracing::info!(
                "🏁 Linha anterior do motorista {} finalizada",
                new.motorista_id
            );
        }

        let (latitude, longitude) = new.position.unzip();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO inicio_linha (motorista_id, escala_id, rota_id, veiculo_id, latitude, longitude, horario_inicio, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(new.motorista_id)
        .bind(new.escala_id)
        .bind(new.rota_id)
        .bind(new.veiculo_id)
        .bind(latitude)
        .bind(longitude)
        .bind(new.started_at)
        .bind(STATUS_ACTIVE)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::{at, seed, shift};

    async fn statuses(pool: &PgPool, motorista_id: i64) -> Vec<(i64, String)> {
        sqlx::query_as("SELECT id, status FROM inicio_linha WHERE motorista_id = $1 ORDER BY id")
            .bind(motorista_id)
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_new_start_finalizes_previous(pool: PgPool) {
        let seed = seed(&pool).await;
        let escala_id = shift(&pool, &seed).await;
        let repository = RouteStartRepository::new(pool.clone());

        let start_at = |h, position| NewRouteStart {
            motorista_id: seed.motorista_id,
            escala_id,
            rota_id: seed.rota_id,
            veiculo_id: seed.veiculo_id,
            position,
            started_at: at(h, 0),
        };

        let first = repository.start(start_at(6, Some((-24.0, -52.0)))).await.unwrap();
        let second = repository.start(start_at(9, None)).await.unwrap();

        assert_eq!(
            statuses(&pool, seed.motorista_id).await,
            vec![
                (first, STATUS_FINISHED.to_string()),
                (second, STATUS_ACTIVE.to_string()),
            ]
        );

        let finished_at: Option<NaiveDateTime> =
            sqlx::query_scalar("SELECT horario_fim FROM inicio_linha WHERE id = $1")
                .bind(first)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(finished_at, Some(at(9, 0)));

        let latest = repository
            .latest_active_for_route(seed.rota_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, second);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_second_active_row_is_a_conflict(pool: PgPool) {
        let seed = seed(&pool).await;
        let escala_id = shift(&pool, &seed).await;

        let insert = || {
            sqlx::query(
                "INSERT INTO inicio_linha (motorista_id, escala_id, rota_id, veiculo_id, status) VALUES ($1, $2, $3, $4, 'ativa')",
            )
            .bind(seed.motorista_id)
            .bind(escala_id)
            .bind(seed.rota_id)
            .bind(seed.veiculo_id)
        };

        insert().execute(&pool).await.unwrap();
        let err = AppError::from(insert().execute(&pool).await.unwrap_err());
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
