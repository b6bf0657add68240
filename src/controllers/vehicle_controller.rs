use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list().await
    }
}
