/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by `main` first), with defaults suitable for local development.
 *
 * | Variable | Default |
 * |---|---|
 * | `PORT` | `5000` |
 * | `DATABASE_URL` | `sqlite://devconnect.db?mode=rwc` |
 * | `JWT_SECRET` | development fallback, logged as a warning |
 *
 * # Error Handling
 *
 * A database that cannot be opened is logged and does not prevent startup.
 * The pool is then `None` and every store-backed handler answers 500.
 */

use std::net::SocketAddr;
use std::time::Duration;

use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://devconnect.db?mode=rwc";
const DEVELOPMENT_JWT_SECRET: &str = "devconnect-development-secret";

/// Database configuration result
///
/// `None` when the database could not be opened.
pub type DatabaseConfig = Option<SqlitePool>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// sqlx SQLite connection string
    pub database_url: String,
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(port) = std::env::var("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                builder = builder.jwt_secret(DEVELOPMENT_JWT_SECRET.to_string());
            }
        }

        builder.build()
    }

    /// Address to bind, on all interfaces
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: String) -> Self {
        self.database_url = Some(url);
        self
    }

    pub fn jwt_secret(mut self, secret: String) -> Self {
        self.jwt_secret = Some(secret);
        self
    }

    /// Build the configuration
    ///
    /// The signing secret is the only value without a default.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        Ok(ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Open a connection pool and run the embedded migrations
///
/// In-memory URLs get a single long-lived connection, since every SQLite
/// connection to `:memory:` would otherwise see its own empty database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(database_url)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?
    };

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Start a write transaction that takes the database write lock up front
///
/// Every read-modify-write goes through this. A deferred `BEGIN` would only
/// ask for the lock at the first write, after the read, and SQLite fails that
/// upgrade with `SQLITE_BUSY` instead of waiting when another writer holds it.
pub async fn begin_immediate(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Load and initialize the database connection pool
///
/// Errors are logged and turned into `None`; the server keeps running.
pub async fn load_database(database_url: &str) -> DatabaseConfig {
    tracing::info!("Connecting to database...");

    match connect_database(database_url).await {
        Ok(pool) => {
            tracing::info!("Database connected and migrated");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to open database: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            None
        }
    }
}
