use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::WriteResponse;
use crate::dto::notice_dto::{CreateNoticeRequest, UpdateNoticeRequest};
use crate::models::notice::Notice;
use crate::repositories::notice_repository::{NewNotice, NoticeRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{parse_date, required};

pub struct NoticeController {
    repository: NoticeRepository,
}

impl NoticeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NoticeRepository::new(pool),
        }
    }

    pub async fn list(&self, today: NaiveDate) -> Result<Vec<Notice>, AppError> {
        self.repository.list_current(today).await
    }

    pub async fn create(
        &self,
        request: CreateNoticeRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        request.validate()?;

        let data_expiracao = request
            .expiration()
            .map(|value| parse_date("data_expiracao", value))
            .transpose()?;

        let id = self
            .repository
            .create(NewNotice {
                titulo: required(request.titulo.as_deref(), "titulo")?,
                conteudo: required(request.conteudo.as_deref(), "conteudo")?,
                tipo: required(request.tipo.as_deref(), "tipo")?,
                prioridade: required(request.prioridade.as_deref(), "prioridade")?,
                autor_id: request.autor_id,
                data_expiracao,
                data_publicacao: now,
            })
            .await?;

        info!("📢 Aviso {} criado", id);
        Ok(WriteResponse::created("Aviso criado com sucesso!", id))
    }

    pub async fn update(&self, id: i64, request: UpdateNoticeRequest) -> Result<WriteResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::BadRequest("Nenhum campo para atualizar".to_string()));
        }
        request.validate()?;

        if !self.repository.update(id, &request).await? {
            return Err(not_found_error("Aviso", id));
        }

        info!("📢 Aviso {} atualizado", id);
        Ok(WriteResponse::done("Aviso atualizado com sucesso!"))
    }

    pub async fn delete(&self, id: i64) -> Result<WriteResponse, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Aviso", id));
        }

        info!("🗑️ Aviso {} removido", id);
        Ok(WriteResponse::done("Aviso deletado com sucesso!"))
    }
}
