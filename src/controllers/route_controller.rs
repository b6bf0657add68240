use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::route::{RouteWithSchedule, ScheduleEntry};
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::AppError;

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    /// Rotas ativas, cada uma com seus horários ativos
    pub async fn list(&self) -> Result<Vec<RouteWithSchedule>, AppError> {
        let routes = self.repository.list_active().await?;
        let ids: Vec<i64> = routes.iter().map(|r| r.id).collect();
        let mut schedules = group_by_route(self.repository.schedules_for(&ids).await?);

        Ok(routes
            .into_iter()
            .map(|route| RouteWithSchedule {
                horarios: schedules.remove(&route.id).unwrap_or_default(),
                route,
            })
            .collect())
    }
}

fn group_by_route(entries: Vec<ScheduleEntry>) -> HashMap<i64, Vec<ScheduleEntry>> {
    let mut grouped: HashMap<i64, Vec<ScheduleEntry>> = HashMap::new();
    for entry in entries {
        grouped.entry(entry.rota_id).or_default().push(entry);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(rota_id: i64, h: u32) -> ScheduleEntry {
        ScheduleEntry {
            rota_id,
            horario: NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
            dia_semana: None,
        }
    }

    #[test]
    fn test_group_keeps_order_per_route() {
        let grouped = group_by_route(vec![entry(101, 6), entry(102, 7), entry(101, 9)]);
        let hours: Vec<_> = grouped[&101].iter().map(|e| e.horario).collect();
        assert_eq!(
            hours,
            vec![NaiveTime::from_hms_opt(6, 0, 0).unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap()]
        );
        assert_eq!(grouped[&102].len(), 1);
        assert!(!grouped.contains_key(&103));
    }
}
