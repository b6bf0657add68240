//! Modelos do sistema
//!
//! Este módulo contém os modelos que mapeiam as tabelas PostgreSQL.
//! Os nomes dos campos seguem as colunas, que também são os nomes no JSON.

pub mod chat_message;
pub mod checklist;
pub mod dashboard;
pub mod notice;
pub mod route;
pub mod route_start;
pub mod shift;
pub mod ticket;
pub mod user;
pub mod vehicle;
