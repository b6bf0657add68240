use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::user::{UserRole, UserSummary};
use crate::repositories::user_repository::UserRepository;
use crate::services::credentials::authenticate;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub const MISSING_CREDENTIALS: &str = "Username e password são obrigatórios";

pub struct AuthController {
    repository: UserRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt: JwtConfig::from(config),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let (username, password) = request
            .credentials()
            .ok_or_else(|| AppError::BadRequest(MISSING_CREDENTIALS.to_string()))?;

        let account = self.repository.find_by_username(username).await?;
        let user = match authenticate(account.as_ref(), password) {
            Ok(user) => user,
            Err(e) => {
                warn!("🔒 Login recusado para '{}'", username);
                return Err(e);
            }
        };

        let role: UserRole = user.tipo.parse().map_err(AppError::Internal)?;
        let token = generate_token(user.id, &user.username, role, &self.jwt)?;

        info!("🔑 Login de '{}' ({})", user.username, role);
        Ok(LoginResponse::success(token, UserSummary::from(user)))
    }
}
