//! Configuração do projeto
//!
//! Este módulo contém a configuração de base de dados e as variáveis de ambiente.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::*;
