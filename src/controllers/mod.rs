//! Controllers: regras de negócio entre as rotas HTTP e os repositórios

pub mod auth_controller;
pub mod checklist_controller;
pub mod dashboard_controller;
pub mod message_controller;
pub mod notice_controller;
pub mod route_controller;
pub mod route_start_controller;
pub mod shift_controller;
pub mod ticket_controller;
pub mod user_controller;
pub mod vehicle_controller;
