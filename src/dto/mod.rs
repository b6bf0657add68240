//! DTOs de entrada e saída da API

pub mod auth_dto;
pub mod checklist_dto;
pub mod common_dto;
pub mod message_dto;
pub mod notice_dto;
pub mod route_start_dto;
pub mod shift_dto;
pub mod ticket_dto;

pub use common_dto::{ApiResponse, WriteResponse};
