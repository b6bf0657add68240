use sqlx::PgPool;

use crate::models::user::{Driver, User};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, senha, tipo, nome, email, ativo
            FROM usuarios
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_active_drivers(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, username, nome, email
            FROM usuarios
            WHERE tipo = 'motorista' AND ativo = TRUE
            ORDER BY nome
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    /// Primeiro gestor cadastrado, autor das mensagens de sistema sem usuário
    pub async fn first_manager_id(&self) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM usuarios WHERE tipo = 'gestor' ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }
}
