use sqlx::PgPool;

use crate::models::user::Driver;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Motoristas ativos, para os seletores de escala
    pub async fn drivers(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list_active_drivers().await
    }
}
