//! Backend do transporte coletivo municipal de Santa Terezinha
//!
//! API JSON sobre PostgreSQL para rotas, escalas, chamados de manutenção,
//! avisos, chat interno e estimativa de passagem dos ônibus.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::build_router;
pub use state::AppState;
