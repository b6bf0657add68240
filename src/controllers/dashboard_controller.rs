use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::dashboard::{Dashboard, DriverStatus};
use crate::repositories::dashboard_repository::DashboardRepository;
use crate::utils::errors::AppError;

pub struct DashboardController {
    repository: DashboardRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
        }
    }

    pub async fn summary(&self, today: NaiveDate) -> Result<Dashboard, AppError> {
        let (frota, (total, dirigindo), chamados_abertos, mensagens_pendentes) = tokio::try_join!(
            self.repository.fleet_status(),
            self.repository.driver_counts(today),
            self.repository.open_tickets(),
            self.repository.pending_messages(),
        )?;

        Ok(Dashboard {
            frota,
            motoristas: DriverStatus::new(total, dirigindo),
            chamados_abertos,
            mensagens_pendentes,
        })
    }
}
