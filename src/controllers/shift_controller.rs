use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::common_dto::WriteResponse;
use crate::dto::shift_dto::{CreateShiftRequest, UpdateShiftRequest};
use crate::models::shift::Shift;
use crate::repositories::shift_repository::{NewShift, ShiftRepository};
use crate::services::schedule_conflict::TimeWindow;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_date, parse_time, required};

pub struct ShiftController {
    repository: ShiftRepository,
}

impl ShiftController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ShiftRepository::new(pool),
        }
    }

    pub async fn list(&self, today: NaiveDate) -> Result<Vec<Shift>, AppError> {
        self.repository.list_from(today).await
    }

    pub async fn create(&self, request: CreateShiftRequest) -> Result<WriteResponse, AppError> {
        let shift = validated_shift(&request)?;
        let (motorista_id, data) = (shift.motorista_id, shift.data);

        let id = self.repository.create_if_free(shift).await?;

        info!("📅 Escala {} lançada para o motorista {} em {}", id, motorista_id, data);
        Ok(WriteResponse::created("Escala lançada com sucesso!", id))
    }

    pub async fn update(&self, id: i64, request: UpdateShiftRequest) -> Result<WriteResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::BadRequest("Nenhum campo para atualizar".to_string()));
        }

        if !self.repository.update(id, &request).await? {
            return Err(AppError::NotFound(format!("Escala {} não encontrada", id)));
        }

        info!("📅 Escala {} atualizada", id);
        Ok(WriteResponse::done("Escala atualizada com sucesso"))
    }
}

/// Validar o pedido e montar a escala, sem tocar no banco
pub fn validated_shift(request: &CreateShiftRequest) -> Result<NewShift<'_>, AppError> {
    request.validate()?;

    let data = parse_date("data", required(request.data.as_deref(), "data")?)?;
    let start = parse_time(
        "horario_inicio",
        required(request.horario_inicio.as_deref(), "horario_inicio")?,
    )?;
    let end = parse_time("horario_fim", required(request.horario_fim.as_deref(), "horario_fim")?)?;
    let window = TimeWindow::new(start, end).ok_or_else(|| {
        AppError::BadRequest("horario_fim deve ser posterior a horario_inicio".to_string())
    })?;

    Ok(NewShift {
        motorista_id: required(request.motorista_id, "motorista_id")?,
        veiculo_id: required(request.veiculo_id, "veiculo_id")?,
        rota_id: required(request.rota_id, "rota_id")?,
        data,
        window,
        turno: request.turno_or_default(),
        observacoes: request.observacoes.as_deref(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn request(start: &str, end: &str) -> CreateShiftRequest {
        CreateShiftRequest {
            motorista_id: Some(3),
            veiculo_id: Some(1),
            rota_id: Some(101),
            data: Some("2024-06-03".to_string()),
            horario_inicio: Some(start.to_string()),
            horario_fim: Some(end.to_string()),
            turno: None,
            observacoes: None,
        }
    }

    #[test]
    fn test_valid_shift() {
        let request = request("06:00", "14:00:00");
        let shift = validated_shift(&request).unwrap();
        assert_eq!(shift.window.start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(shift.window.end, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(shift.turno, "integral");
    }

    #[test]
    fn test_end_before_start_is_bad_request() {
        let request = request("14:00", "06:00");
        let err = validated_shift(&request).err().unwrap();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_date() {
        let mut request = request("06:00", "14:00");
        request.data = None;
        let err = validated_shift(&request).err().unwrap();
        assert_eq!(err.public_message(), "Campo obrigatório: data");
    }
}
