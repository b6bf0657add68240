use chrono::NaiveDateTime;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::checklist_dto::UpdateChecklistRequest;
use crate::dto::common_dto::WriteResponse;
use crate::repositories::checklist_repository::ChecklistRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::required;

pub struct ChecklistController {
    repository: ChecklistRepository,
}

impl ChecklistController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ChecklistRepository::new(pool),
        }
    }

    pub async fn mark(
        &self,
        request: UpdateChecklistRequest,
        now: NaiveDateTime,
    ) -> Result<WriteResponse, AppError> {
        request.validate()?;
        let item_id = required(request.item_id, "item_id")?;
        let concluido = required(request.concluido, "concluido")?;

        let item = self
            .repository
            .mark(item_id, concluido, request.mecanico_id, now)
            .await?
            .ok_or_else(|| not_found_error("Item do checklist", item_id))?;

        info!(
            "✅ Checklist item {} ({}) do veículo {:?}: concluido={}",
            item.id, item.item, item.veiculo_id, item.concluido
        );
        Ok(WriteResponse::done("Checklist atualizado com sucesso"))
    }
}
