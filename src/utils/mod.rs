//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros, validação,
//! JWT e extração de requisições.

pub mod errors;
pub mod extract;
pub mod jwt;
pub mod validation;
