//! Serviços de domínio
//!
//! Regras puras, sem acesso a banco: conferência de conflito de escalas,
//! estimativa de horário de passagem e conferência de credenciais.

pub mod credentials;
pub mod passage_estimator;
pub mod schedule_conflict;
