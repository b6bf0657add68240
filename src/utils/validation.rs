//! Utilidades de validação
//!
//! Funções usadas pelos `#[validate(custom = ...)]` dos DTOs e pela
//! conversão dos campos de data/hora já validados.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

use crate::utils::errors::AppError;

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Validar uma data no formato YYYY-MM-DD
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date_str(value).map(|_| ()).ok_or_else(|| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Data opcional vinda de formulário: texto vazio é aceito como ausente
pub fn validate_date_or_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_date(value)
}

/// Validar um horário HH:MM ou HH:MM:SS
pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    parse_time_str(value).map(|_| ()).ok_or_else(|| {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        error
    })
}

/// Texto em branco conta como campo ausente
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Validar coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        return Err(error);
    }

    Ok(())
}

pub fn parse_date_str(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time_str(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Valor de um campo obrigatório já validado
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Campo obrigatório: {}", field)))
}

/// Converter um campo de data, com erro 400 nomeando o campo
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    parse_date_str(value)
        .ok_or_else(|| AppError::BadRequest(format!("Data inválida em {}: {}", field, value)))
}

/// Converter um campo de horário, com erro 400 nomeando o campo
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    parse_time_str(value)
        .ok_or_else(|| AppError::BadRequest(format!("Horário inválido em {}: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date_or_blank("").is_ok());
        assert!(validate_date_or_blank("31/12/2024").is_err());
    }

    #[test]
    fn test_validate_time_accepts_both_formats() {
        assert!(validate_time("08:00").is_ok());
        assert!(validate_time("08:00:30").is_ok());
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("8h").is_err());
    }

    #[test]
    fn test_parse_time_values() {
        assert_eq!(parse_time_str("05:50"), NaiveTime::from_hms_opt(5, 50, 0));
        assert_eq!(parse_time_str(" 23:10:15 "), NaiveTime::from_hms_opt(23, 10, 15));
    }

    #[test]
    fn test_parse_date_names_field() {
        let err = parse_date("data", "amanhã").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("data")));
    }

    #[test]
    fn test_required_names_missing_field() {
        assert_eq!(required(Some(3), "motorista_id").unwrap(), 3);
        let err = required::<i64>(None, "veiculo_id").unwrap_err();
        assert_eq!(err.public_message(), "Campo obrigatório: veiculo_id");
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Pneu furado").is_ok());
        let err = validate_not_blank("   ").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(-27.03, -50.91).is_ok());
        assert!(validate_coordinates(91.0, -50.0).is_err());
        assert!(validate_coordinates(-27.0, -181.0).is_err());
    }
}
