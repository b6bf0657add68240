//! Indicadores do painel da gestão

use serde::Serialize;
use sqlx::FromRow;

/// Situação da frota
#[derive(Debug, Clone, Default, Serialize, FromRow)]
pub struct FleetStatus {
    pub total: i64,
    pub disponiveis: i64,
    pub em_manutencao: i64,
    pub fora_servico: i64,
}

/// Motoristas ativos, separados entre os que têm escala confirmada hoje e os demais
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriverStatus {
    pub total: i64,
    pub dirigindo: i64,
    pub fora_escala: i64,
}

impl DriverStatus {
    pub fn new(total: i64, dirigindo: i64) -> Self {
        Self {
            total,
            dirigindo,
            fora_escala: (total - dirigindo).max(0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub frota: FleetStatus,
    pub motoristas: DriverStatus,
    pub chamados_abertos: i64,
    pub mensagens_pendentes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_duty_drivers_never_negative() {
        let status = DriverStatus::new(5, 2);
        assert_eq!(status.fora_escala, 3);

        let status = DriverStatus::new(1, 3);
        assert_eq!(status.fora_escala, 0);
    }
}
