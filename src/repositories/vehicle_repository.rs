use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, numero, placa, modelo, status FROM veiculos ORDER BY numero",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
