pub use crate::utils::database;
use crate::utils::{auth::TokenSettings, config::Config};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: TokenSettings,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl Context {
    fn assemble(config: Config, db_conn: database::DatabaseConnection) -> Self {
        Context {
            app: AppContext {
                host: config.app.host,
                port: config.app.port,
                cors_origins: config.app.cors_origins,
            },
            db_conn,
            auth: TokenSettings {
                secret: config.auth.jwt_secret,
                expires_in: config.auth.jwt_expires_in,
            },
        }
    }

    /// Context over a pool that connects on first use. Migrations are not run.
    pub fn lazy(config: Config) -> Result<Self, ContextError> {
        let db_conn = database::connect_lazy(&config.database)?;
        Ok(Self::assemble(config, db_conn))
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        Ok(Context::assemble(self, db_conn))
    }
}
