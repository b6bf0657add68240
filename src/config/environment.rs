//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do servidor a partir do ambiente
//! (com suporte a `.env` via dotenvy, carregado no `main`).

use anyhow::{anyhow, Context, Result};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use std::env;
use std::str::FromStr;

const DEV_JWT_SECRET: &str = "santa_terezinha_dev_secret";
/// Validade máxima aceita para o token: um ano
pub const MAX_JWT_EXPIRATION: u64 = 365 * 24 * 60 * 60;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub api_base_path: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub require_auth: bool,
    pub utc_offset_minutes: i32,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            api_base_path: "/api".to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration: 24 * 60 * 60,
            cors_origins: Vec::new(),
            require_auth: false,
            utc_offset_minutes: -180,
            run_migrations: true,
        }
    }
}

impl EnvironmentConfig {
    /// Ler a configuração do ambiente, usando os valores padrão quando a variável não existe
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment == "production" => {
                return Err(anyhow!("JWT_SECRET must be set in production"));
            }
            _ => defaults.jwt_secret,
        };

        let config = Self {
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            api_base_path: normalize_base_path(
                &env::var("API_BASE_PATH").unwrap_or(defaults.api_base_path),
            ),
            jwt_secret,
            jwt_expiration: parse_var("JWT_EXPIRATION", defaults.jwt_expiration)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or_default(),
            require_auth: parse_var("REQUIRE_AUTH", defaults.require_auth)?,
            utc_offset_minutes: parse_var("UTC_OFFSET_MINUTES", defaults.utc_offset_minutes)?,
            run_migrations: parse_var("RUN_MIGRATIONS", defaults.run_migrations)?,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    /// Verificar se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Conferir valores que passam no parse mas não fazem sentido
    pub fn validate(&self) -> Result<()> {
        if self.jwt_expiration == 0 || self.jwt_expiration > MAX_JWT_EXPIRATION {
            return Err(anyhow!(
                "JWT_EXPIRATION must be between 1 and {} seconds: {}",
                MAX_JWT_EXPIRATION,
                self.jwt_expiration
            ));
        }
        self.timezone()?;
        Ok(())
    }

    /// Obter o endereço do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fuso horário local da operação (America/Sao_Paulo = -180)
    pub fn timezone(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("UTC_OFFSET_MINUTES out of range: {}", self.utc_offset_minutes))
    }

    /// Relógio local usado em todos os carimbos de data/hora gravados pela API
    pub fn local_now(&self) -> NaiveDateTime {
        let offset = self.timezone().unwrap_or_else(|_| Utc.fix());
        Utc::now().with_timezone(&offset).naive_local()
    }

    pub fn local_today(&self) -> NaiveDate {
        self.local_now().date()
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        _ => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Garante o formato `/segmento` sem barra final
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
