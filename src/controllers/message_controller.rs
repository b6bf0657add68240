use chrono::NaiveDateTime;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::WriteResponse;
use crate::dto::message_dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::models::chat_message::{ChatMessage, MessageKind};
use crate::repositories::message_repository::MessageRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::required;

pub struct MessageController {
    repository: MessageRepository,
    users: UserRepository,
}

impl MessageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MessageRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ChatMessage>, AppError> {
        self.repository.list_recent().await
    }

    pub async fn create(
        &self,
        request: CreateMessageRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        request.validate()?;
        let mensagem = required(request.mensagem.as_deref(), "mensagem")?;

        // mensagem de sistema sem autor fica com o primeiro gestor, se houver
        let usuario_id = match (request.usuario_id, request.tipo) {
            (Some(id), _) => Some(id),
            (None, MessageKind::System) => self.users.first_manager_id().await?,
            (None, MessageKind::User) => None,
        };

        let id = self
            .repository
            .create(usuario_id, mensagem, request.tipo, now)
            .await?;

        info!("💬 Mensagem {} enviada ({})", id, request.tipo.as_str());
        Ok(WriteResponse::created("Mensagem enviada com sucesso", id))
    }

    pub async fn update(&self, id: i64, request: UpdateMessageRequest) -> Result<WriteResponse, AppError> {
        let respondida = request
            .respondida
            .ok_or_else(|| AppError::BadRequest("Nenhum campo para atualizar".to_string()))?;

        if !self.repository.set_answered(id, respondida).await? {
            return Err(AppError::NotFound(format!("Mensagem {} não encontrada", id)));
        }

        info!("💬 Mensagem {} marcada como respondida={}", id, respondida);
        Ok(WriteResponse::done("Mensagem atualizada com sucesso!"))
    }
}
