//! Modelo de rota e quadro de horários
//!
//! Mapeia `rotas` e `horarios_rotas`.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Linha de `rotas`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Route {
    pub id: i64,
    pub numero: String,
    pub nome: String,
    pub origem: String,
    pub destino: String,
    pub ativa: bool,
    pub tarifa: Decimal,
    pub duracao: Option<String>,
}

/// Horário de partida de uma rota
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScheduleEntry {
    #[serde(skip)]
    pub rota_id: i64,
    pub horario: NaiveTime,
    pub dia_semana: Option<String>,
}

/// Rota com os horários ativos, como a listagem pública devolve
#[derive(Debug, Clone, Serialize)]
pub struct RouteWithSchedule {
    #[serde(flatten)]
    pub route: Route,
    pub horarios: Vec<ScheduleEntry>,
}

/// Etiqueta de dia usada em `horarios_rotas.dia_semana`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayTag {
    DiasUteis,
    Sabado,
    Domingo,
}

impl WeekdayTag {
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat => WeekdayTag::Sabado,
            Weekday::Sun => WeekdayTag::Domingo,
            _ => WeekdayTag::DiasUteis,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayTag::DiasUteis => "diasUteis",
            WeekdayTag::Sabado => "sabado",
            WeekdayTag::Domingo => "domingo",
        }
    }

    /// Horários sem etiqueta valem para todos os dias
    pub fn applies_to(&self, entry: &ScheduleEntry) -> bool {
        match entry.dia_semana.as_deref() {
            None | Some("") => true,
            Some(tag) => tag == self.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: Option<&str>) -> ScheduleEntry {
        ScheduleEntry {
            rota_id: 101,
            horario: NaiveTime::from_hms_opt(5, 50, 0).unwrap(),
            dia_semana: tag.map(str::to_string),
        }
    }

    #[test]
    fn test_weekday_tag_for_date() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        assert_eq!(WeekdayTag::for_date(saturday), WeekdayTag::Sabado);
        assert_eq!(WeekdayTag::for_date(sunday), WeekdayTag::Domingo);
        assert_eq!(WeekdayTag::for_date(monday), WeekdayTag::DiasUteis);
    }

    #[test]
    fn test_untagged_entries_apply_every_day() {
        assert!(WeekdayTag::Domingo.applies_to(&entry(None)));
        assert!(WeekdayTag::Sabado.applies_to(&entry(Some("sabado"))));
        assert!(!WeekdayTag::Sabado.applies_to(&entry(Some("diasUteis"))));
    }

    #[test]
    fn test_route_serializes_schedule_inline() {
        let route = RouteWithSchedule {
            route: Route {
                id: 101,
                numero: "101".to_string(),
                nome: "São Miguel - Fraiburgo".to_string(),
                origem: "São Miguel".to_string(),
                destino: "Fraiburgo".to_string(),
                ativa: true,
                tarifa: Decimal::new(450, 2),
                duracao: Some("25 min".to_string()),
            },
            horarios: vec![entry(Some("diasUteis"))],
        };

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["numero"], "101");
        assert_eq!(json["tarifa"], "4.50");
        assert_eq!(json["horarios"][0]["horario"], "05:50:00");
        assert!(json["horarios"][0].get("rota_id").is_none());
    }
}
