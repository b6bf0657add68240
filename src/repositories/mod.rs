//! Repositórios: acesso ao PostgreSQL via sqlx

pub mod checklist_repository;
pub mod dashboard_repository;
pub mod message_repository;
pub mod notice_repository;
pub mod route_repository;
pub mod route_start_repository;
pub mod shift_repository;
pub mod ticket_repository;
pub mod user_repository;
pub mod vehicle_repository;

/// Cadastro mínimo para os testes que rodam contra o PostgreSQL (`#[sqlx::test]`)
#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};
    use sqlx::PgPool;

    pub struct Seed {
        pub motorista_id: i64,
        pub veiculo_id: i64,
        pub rota_id: i64,
    }

    pub fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    pub fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    pub async fn seed(pool: &PgPool) -> Seed {
        let motorista_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO usuarios (username, senha, tipo, nome) VALUES ('joao', 'x', 'motorista', 'João') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        let veiculo_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO veiculos (numero, placa, modelo) VALUES ('12', 'ABC1D23', 'Marcopolo') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        let rota_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO rotas (numero, nome, origem, destino, duracao) VALUES ('101', 'Centro', 'Rodoviária', 'Hospital', '25 min') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();

        Seed {
            motorista_id,
            veiculo_id,
            rota_id,
        }
    }

    pub async fn shift(pool: &PgPool, seed: &Seed) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO escalas (motorista_id, veiculo_id, rota_id, data, horario_inicio, horario_fim)
            VALUES ($1, $2, $3, $4, '06:00', '14:00')
            RETURNING id
            "#,
        )
        .bind(seed.motorista_id)
        .bind(seed.veiculo_id)
        .bind(seed.rota_id)
        .bind(day())
        .fetch_one(pool)
        .await
        .unwrap()
    }
}
