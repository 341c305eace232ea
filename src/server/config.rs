use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRY_SECONDS: i64 = 86_400;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Tenant and super admin created on first start when no tenant exists yet.
pub struct BootstrapConfig {
    pub company: String,
    pub admin_email: String,
    pub admin_password: String,
}

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_seconds: i64,

    pub bind_addr: SocketAddr,

    /// Set only when all three bootstrap variables are present.
    pub bootstrap: Option<BootstrapConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiry_seconds = match optional_var("JWT_EXPIRY_SECONDS") {
            Some(value) => value.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "JWT_EXPIRY_SECONDS".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_JWT_EXPIRY_SECONDS,
        };

        let bind_addr = optional_var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let bootstrap = match (
            optional_var("BOOTSTRAP_COMPANY"),
            optional_var("BOOTSTRAP_ADMIN_EMAIL"),
            optional_var("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(company), Some(admin_email), Some(admin_password)) => Some(BootstrapConfig {
                company,
                admin_email,
                admin_password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_expiry_seconds,
            bind_addr,
            bootstrap,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
