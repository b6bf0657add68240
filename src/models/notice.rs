//! Modelo de aviso (`avisos`)

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;

/// Aviso publicado pela gestão, com o nome do autor
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notice {
    pub id: i64,
    pub titulo: String,
    pub conteudo: String,
    pub tipo: String,
    pub prioridade: String,
    pub autor_id: Option<i64>,
    pub autor_nome: Option<String>,
    pub data_publicacao: NaiveDateTime,
    pub data_expiracao: Option<NaiveDate>,
    pub ativo: bool,
}
