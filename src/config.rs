use anyhow::Context;
use serde::Deserialize;

/// The MySQL port is fixed by the deployment; only host and credentials vary.
pub const DB_PORT: u16 = 3306;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_host: std::env::var("DB_HOST").context("DB_HOST is not set")?,
            db_user: std::env::var("DB_USER").context("DB_USER is not set")?,
            db_password: std::env::var("DB_PASSWORD").context("DB_PASSWORD is not set")?,
            db_name: std::env::var("DB_NAME").context("DB_NAME is not set")?,
        })
    }
}
