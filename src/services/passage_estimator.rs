//! Estimativa de horário de passagem
//!
//! A partir do último início de linha de uma rota calcula o tempo decorrido,
//! o progresso do percurso e um horário aproximado de passagem no ponto do
//! passageiro. É uma estimativa: não há rastreamento de posição real.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::models::route::{ScheduleEntry, WeekdayTag};

/// Duração usada quando a rota não informa uma duração válida
pub const DEFAULT_ROUTE_DURATION_MIN: u32 = 30;
/// Distância assumida até o ponto quando não há coordenadas
pub const DEFAULT_DISTANCE_KM: f64 = 2.0;
/// Velocidade média urbana: 30 km/h
pub const AVERAGE_SPEED_KM_PER_MIN: f64 = 0.5;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

lazy_static! {
    static ref FIRST_NUMBER: Regex = Regex::new(r"(\d+)").expect("valid duration regex");
}

/// Dados de entrada da estimativa
#[derive(Debug, Clone)]
pub struct PassageInput<'a> {
    pub started_at: NaiveDateTime,
    pub now: NaiveDateTime,
    pub route_duration: Option<&'a str>,
    pub start_coordinates: Option<(f64, f64)>,
    pub stop_coordinates: Option<(f64, f64)>,
    pub schedule: &'a [ScheduleEntry],
}

/// Resultado serializado no payload de `/horario-passagem`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassageEstimate {
    pub horario_inicio: String,
    pub horario_passagem_estimado: String,
    pub proximo_horario: Option<NaiveTime>,
    pub tempo_estimado_minutos: i64,
    pub distancia_estimada_km: f64,
    pub ja_passou: bool,
    pub tempo_decorrido_minutos: f64,
    pub progresso_percentual: f64,
}

/// Extrair a duração em minutos de textos como "25 min"
pub fn parse_duration_minutes(raw: Option<&str>) -> u32 {
    raw.and_then(|text| FIRST_NUMBER.captures(text))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_ROUTE_DURATION_MIN)
}

/// Distância em km entre dois pontos (latitude, longitude) pela fórmula de Haversine
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Progresso percentual do percurso, sempre dentro de [0, 100]
pub fn progress_percent(elapsed_minutes: f64, duration_minutes: u32) -> f64 {
    let duration = f64::from(duration_minutes.max(1));
    let progress = elapsed_minutes / duration * 100.0;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Próxima partida depois de `now`; sem partidas restantes hoje, a primeira do dia seguinte
pub fn next_departure(schedule: &[ScheduleEntry], now: NaiveDateTime) -> Option<NaiveTime> {
    let tag = WeekdayTag::for_date(now.date());
    let today: Vec<&ScheduleEntry> = schedule.iter().filter(|e| tag.applies_to(e)).collect();
    let candidates: Vec<&ScheduleEntry> = if today.is_empty() {
        schedule.iter().collect()
    } else {
        today
    };

    let current = minute_of_day(now.time());
    candidates
        .iter()
        .map(|e| e.horario)
        .filter(|t| minute_of_day(*t) > current)
        .min()
        .or_else(|| candidates.iter().map(|e| e.horario).min())
}

/// Calcular a estimativa completa
pub fn estimate(input: &PassageInput<'_>) -> PassageEstimate {
    let elapsed_minutes = (input.now - input.started_at).num_seconds() as f64 / 60.0;
    let duration_minutes = parse_duration_minutes(input.route_duration);
    let progress = progress_percent(elapsed_minutes, duration_minutes);

    let distance_km = match (input.start_coordinates, input.stop_coordinates) {
        (Some(start), Some(stop)) => haversine_km(start, stop),
        _ => DEFAULT_DISTANCE_KM,
    };

    let eta_minutes = (distance_km / AVERAGE_SPEED_KM_PER_MIN).round() as i64;
    let passage_at = input.started_at + Duration::minutes(eta_minutes);
    let already_passed = input.now > passage_at;

    let next_time = if already_passed {
        next_departure(input.schedule, input.now)
    } else {
        None
    };

    PassageEstimate {
        horario_inicio: input.started_at.format("%H:%M").to_string(),
        horario_passagem_estimado: passage_at.format("%H:%M").to_string(),
        proximo_horario: next_time,
        tempo_estimado_minutos: eta_minutes,
        distancia_estimada_km: round_to(distance_km, 2),
        ja_passou: already_passed,
        tempo_decorrido_minutos: round_to(elapsed_minutes, 1),
        progresso_percentual: round_to(progress, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-06-03 é segunda-feira
    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn entry(h: u32, m: u32, tag: Option<&str>) -> ScheduleEntry {
        ScheduleEntry {
            rota_id: 101,
            horario: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            dia_semana: tag.map(str::to_string),
        }
    }

    fn input<'a>(started_at: NaiveDateTime, now: NaiveDateTime, schedule: &'a [ScheduleEntry]) -> PassageInput<'a> {
        PassageInput {
            started_at,
            now,
            route_duration: Some("25 min"),
            start_coordinates: None,
            stop_coordinates: None,
            schedule,
        }
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration_minutes(Some("25 min")), 25);
        assert_eq!(parse_duration_minutes(Some("Aprox. 40 minutos")), 40);
        assert_eq!(parse_duration_minutes(Some("rápida")), DEFAULT_ROUTE_DURATION_MIN);
        assert_eq!(parse_duration_minutes(Some("0 min")), DEFAULT_ROUTE_DURATION_MIN);
        assert_eq!(parse_duration_minutes(None), DEFAULT_ROUTE_DURATION_MIN);
    }

    #[test]
    fn test_progress_is_always_between_0_and_100() {
        for elapsed in [-120.0, -0.5, 0.0, 1.0, 12.5, 25.0, 26.0, 10_000.0, f64::INFINITY, f64::NAN] {
            for duration in [0, 1, 25, 30, 240] {
                let progress = progress_percent(elapsed, duration);
                assert!((0.0..=100.0).contains(&progress), "{} / {} -> {}", elapsed, duration, progress);
            }
        }
        assert_eq!(progress_percent(12.5, 25), 50.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Terminal de Fraiburgo até um ponto ~1,1 km ao norte
        let terminal = (-27.030235, -50.917761);
        let stop = (-27.020235, -50.917761);
        let km = haversine_km(terminal, stop);
        assert!((km - 1.112).abs() < 0.01, "{}", km);
        assert_eq!(haversine_km(terminal, terminal), 0.0);
    }

    #[test]
    fn test_estimate_without_coordinates_uses_default_distance() {
        let schedule = vec![];
        let estimate = estimate(&input(at(8, 0), at(8, 2), &schedule));

        assert_eq!(estimate.distancia_estimada_km, 2.0);
        assert_eq!(estimate.tempo_estimado_minutos, 4);
        assert_eq!(estimate.horario_inicio, "08:00");
        assert_eq!(estimate.horario_passagem_estimado, "08:04");
        assert!(!estimate.ja_passou);
        assert_eq!(estimate.proximo_horario, None);
        assert_eq!(estimate.tempo_decorrido_minutos, 2.0);
        assert_eq!(estimate.progresso_percentual, 8.0);
    }

    #[test]
    fn test_estimate_with_coordinates() {
        let schedule = vec![];
        let mut data = input(at(8, 0), at(8, 1), &schedule);
        data.start_coordinates = Some((-27.030235, -50.917761));
        data.stop_coordinates = Some((-26.980235, -50.917761));

        let estimate = estimate(&data);
        assert!((estimate.distancia_estimada_km - 5.56).abs() < 0.01);
        assert_eq!(estimate.tempo_estimado_minutos, 11);
        assert_eq!(estimate.horario_passagem_estimado, "08:11");
    }

    #[test]
    fn test_passed_bus_points_to_next_departure_today() {
        let schedule = vec![
            entry(7, 20, Some("diasUteis")),
            entry(9, 20, Some("diasUteis")),
            entry(9, 0, Some("sabado")),
            entry(11, 20, None),
        ];
        let estimate = estimate(&input(at(8, 0), at(8, 30), &schedule));

        assert!(estimate.ja_passou);
        assert_eq!(estimate.progresso_percentual, 100.0);
        assert_eq!(estimate.proximo_horario, NaiveTime::from_hms_opt(9, 20, 0));
    }

    #[test]
    fn test_after_last_departure_wraps_to_first() {
        let schedule = vec![entry(5, 50, None), entry(23, 10, None)];
        let estimate = estimate(&input(at(23, 0), at(23, 30), &schedule));

        assert!(estimate.ja_passou);
        assert_eq!(estimate.proximo_horario, NaiveTime::from_hms_opt(5, 50, 0));
    }

    #[test]
    fn test_departure_in_current_minute_is_not_next() {
        let schedule = vec![entry(9, 0, None), entry(9, 30, None)];
        let now = at(9, 0) + Duration::seconds(30);
        assert_eq!(next_departure(&schedule, now), NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_start_in_future_keeps_progress_at_zero() {
        let schedule = vec![];
        let estimate = estimate(&input(at(9, 0), at(8, 50), &schedule));
        assert_eq!(estimate.progresso_percentual, 0.0);
        assert_eq!(estimate.tempo_decorrido_minutos, -10.0);
        assert!(!estimate.ja_passou);
    }
}
