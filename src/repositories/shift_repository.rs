use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::shift_dto::UpdateShiftRequest;
use crate::models::shift::{Shift, ShiftSlot, ShiftStatus};
use crate::services::schedule_conflict::{find_conflict, TimeWindow};
use crate::utils::errors::AppError;

pub const CONFLICT_MESSAGE: &str = "Motorista já possui escala neste horário";

/// Dados já validados de uma nova escala
#[derive(Debug)]
pub struct NewShift<'a> {
    pub motorista_id: i64,
    pub veiculo_id: i64,
    pub rota_id: i64,
    pub data: NaiveDate,
    pub window: TimeWindow,
    pub turno: &'a str,
    pub observacoes: Option<&'a str>,
}

pub struct ShiftRepository {
    pool: PgPool,
}

impl ShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Escalas de `today` em diante
    pub async fn list_from(&self, today: NaiveDate) -> Result<Vec<Shift>, AppError> {
        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT e.id, e.motorista_id, e.veiculo_id, e.rota_id, e.data, e.horario_inicio, e.horario_fim,
                   e.turno, e.status, e.observacoes,
                   u.nome AS motorista_nome, r.nome AS rota_nome, v.numero AS veiculo_numero
            FROM escalas e
            LEFT JOIN usuarios u ON e.motorista_id = u.id
            LEFT JOIN rotas r ON e.rota_id = r.id
            LEFT JOIN veiculos v ON e.veiculo_id = v.id
            WHERE e.data >= $1
            ORDER BY e.data, e.horario_inicio
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    async fn occupied_slots(
        tx: &mut Transaction<'_, Postgres>,
        motorista_id: i64,
        data: NaiveDate,
    ) -> Result<Vec<ShiftSlot>, AppError> {
        let slots = sqlx::query_as::<_, ShiftSlot>(
            r#"
            SELECT id, horario_inicio, horario_fim
            FROM escalas
            WHERE motorista_id = $1 AND data = $2
            ORDER BY horario_inicio
            "#,
        )
        .bind(motorista_id)
        .bind(data)
        .fetch_all(&mut **tx)
        .await?;

        Ok(slots)
    }

    /// Inserir a escala se o motorista estiver livre no intervalo; 409 caso contrário
    pub async fn create_if_free(&self, shift: NewShift<'_>) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        // serializa lançamentos concorrentes do mesmo motorista
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(shift.motorista_id)
            .execute(&mut *tx)
            .await?;

        let slots = Self::occupied_slots(&mut tx, shift.motorista_id, shift.data).await?;
        if let Some(existing) = find_conflict(&slots, &shift.window) {
            tracing::info!(
                "⛔ Escala recusada: motorista {} já tem a escala {} em {}",
                shift.motorista_id,
                existing.id,
                shift.data
            );
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO escalas (motorista_id, veiculo_id, rota_id, data, horario_inicio, horario_fim, turno, status, observacoes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(shift.motorista_id)
        .bind(shift.veiculo_id)
        .bind(shift.rota_id)
        .bind(shift.data)
        .bind(shift.window.start)
        .bind(shift.window.end)
        .bind(shift.turno)
        .bind(ShiftStatus::Pendente.as_str())
        .bind(shift.observacoes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn update(&self, id: i64, changes: &UpdateShiftRequest) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE escalas SET
                status = COALESCE($2, status),
                observacoes = COALESCE($3, observacoes)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.status.map(|s| s.as_str()))
        .bind(changes.observacoes.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::{day, seed, Seed};
    use chrono::NaiveTime;

    fn window(start: u32, end: u32) -> TimeWindow {
        TimeWindow::new(
            NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn new_shift(seed: &Seed, window: TimeWindow) -> NewShift<'static> {
        NewShift {
            motorista_id: seed.motorista_id,
            veiculo_id: seed.veiculo_id,
            rota_id: seed.rota_id,
            data: day(),
            window,
            turno: "manha",
            observacoes: None,
        }
    }

    async fn shift_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM escalas")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_touching_interval_is_a_conflict(pool: PgPool) {
        let seed = seed(&pool).await;
        let repository = ShiftRepository::new(pool.clone());

        repository.create_if_free(new_shift(&seed, window(8, 12))).await.unwrap();
        let err = repository
            .create_if_free(new_shift(&seed, window(12, 16)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref msg) if msg == CONFLICT_MESSAGE));
        assert_eq!(shift_count(&pool).await, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_separate_intervals_are_accepted(pool: PgPool) {
        let seed = seed(&pool).await;
        let repository = ShiftRepository::new(pool.clone());

        repository.create_if_free(new_shift(&seed, window(6, 10))).await.unwrap();
        repository.create_if_free(new_shift(&seed, window(13, 18))).await.unwrap();

        assert_eq!(shift_count(&pool).await, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_cancelled_shift_still_blocks_overlap(pool: PgPool) {
        let seed = seed(&pool).await;
        let repository = ShiftRepository::new(pool.clone());

        let id = repository.create_if_free(new_shift(&seed, window(8, 12))).await.unwrap();
        let cancel = UpdateShiftRequest {
            status: Some(ShiftStatus::Cancelado),
            ..Default::default()
        };
        assert!(repository.update(id, &cancel).await.unwrap());

        let err = repository
            .create_if_free(new_shift(&seed, window(9, 10)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
