//! Verificação de conflito de escalas
//!
//! Um motorista não pode ter duas escalas que se sobreponham na mesma data.
//! As bordas são inclusivas: uma escala que termina às 10:00 conflita com
//! outra que começa às 10:00.

use chrono::NaiveTime;

use crate::models::shift::ShiftSlot;

/// Intervalo de horário de uma escala
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// `None` quando o fim não é posterior ao início
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
    }
}

/// Primeira escala existente que conflita com o intervalo pedido
pub fn find_conflict<'a>(existing: &'a [ShiftSlot], requested: &TimeWindow) -> Option<&'a ShiftSlot> {
    existing.iter().find(|slot| {
        let window = TimeWindow {
            start: slot.horario_inicio,
            end: slot.horario_fim,
        };
        window.overlaps(requested)
    })
}
