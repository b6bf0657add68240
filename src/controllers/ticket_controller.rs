use chrono::NaiveDateTime;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::WriteResponse;
use crate::dto::ticket_dto::{CreateTicketRequest, UpdateTicketRequest};
use crate::models::ticket::Ticket;
use crate::repositories::ticket_repository::{NewTicket, TicketRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::required;

pub struct TicketController {
    repository: TicketRepository,
}

impl TicketController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TicketRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        self.repository.list().await
    }

    pub async fn create(
        &self,
        request: CreateTicketRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        request.validate()?;

        let ticket = NewTicket {
            motorista_id: required(request.motorista_id, "motorista_id")?,
            veiculo_id: required(request.veiculo_id, "veiculo_id")?,
            tipo: required(request.tipo.as_deref(), "tipo")?.trim(),
            descricao: required(request.descricao.as_deref(), "descricao")?.trim(),
            urgencia: required(request.urgencia.as_deref(), "urgencia")?.trim(),
            data_abertura: now,
        };
        let motorista_id = ticket.motorista_id;
        let id = self.repository.create(ticket).await?;

        info!("🔧 Chamado {} aberto pelo motorista {}", id, motorista_id);
        Ok(WriteResponse::created("Chamado criado com sucesso", id))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateTicketRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::BadRequest("Nenhum campo para atualizar".to_string()));
        }
        request.validate()?;

        if !self.repository.update(id, &request, now).await? {
            return Err(not_found_error("Chamado", id));
        }

        match request.status {
            Some(status) => info!("🔧 Chamado {} atualizado ({})", id, status.as_str()),
            None => info!("🔧 Chamado {} atualizado", id),
        }
        Ok(WriteResponse::done("Chamado atualizado com sucesso"))
    }

    pub async fn delete(&self, id: i64) -> Result<WriteResponse, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Chamado", id));
        }

        info!("🗑️ Chamado {} removido", id);
        Ok(WriteResponse::done("Chamado deletado com sucesso"))
    }
}
