use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tokio::time::timeout;

use crate::config::{AppConfig, DB_PORT};
use crate::error::ApiError;

/// Storage must answer within this window or the request fails fast
/// instead of hanging on an unreachable server.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    connect_options: MySqlConnectOptions,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let connect_options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(DB_PORT)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);
        Ok(Self {
            config,
            connect_options,
        })
    }

    /// Opens the request-scoped connection. Dropping it releases the socket,
    /// so every handler exit path closes what it opened.
    pub async fn connect(&self) -> Result<MySqlConnection, ApiError> {
        match timeout(
            CONNECT_TIMEOUT,
            MySqlConnection::connect_with(&self.connect_options),
        )
        .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "database connection error");
                Err(ApiError::ConnectionFailed)
            }
            Err(_) => {
                tracing::error!(timeout = ?CONNECT_TIMEOUT, "database connection timed out");
                Err(ApiError::ConnectionFailed)
            }
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State whose storage address is a closed local port, for exercising
    /// the connection-failure surface without a database.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            db_host: "127.0.0.1".into(),
            db_user: "test".into(),
            db_password: "test".into(),
            db_name: "test".into(),
        });
        let connect_options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(1)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);
        Self {
            config,
            connect_options,
        }
    }
}
