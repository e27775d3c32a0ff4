use mongodb::bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::domain::error::DomainError;

/// Lazily connected database handle shared by every request in the process.
///
/// The first caller connects and pings; concurrent first callers wait on the
/// same attempt. A failed attempt is not cached, the next call tries again.
pub struct DatabaseCache {
    uri: Option<String>,
    database_name: String,
    database: OnceCell<Database>,
}

impl DatabaseCache {
    pub fn new(uri: Option<String>, database_name: impl Into<String>) -> Self {
        if uri.is_none() {
            error!("MONGODB_URI is not set; database requests will fail until it is configured");
        }

        Self {
            uri,
            database_name: database_name.into(),
            database: OnceCell::new(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub async fn database(&self) -> Result<&Database, DomainError> {
        self.database.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> Result<Database, DomainError> {
        let uri = self
            .uri
            .as_deref()
            .ok_or_else(|| DomainError::Configuration("MONGODB_URI is not set".into()))?;

        let client = Client::with_uri_str(uri).await.map_err(|e| {
            error!("failed to create MongoDB client: {}", e);
            DomainError::from(e)
        })?;
        let database = client.database(&self.database_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                error!("failed to reach MongoDB: {}", e);
                DomainError::from(e)
            })?;

        info!(database = %self.database_name, "connected to MongoDB");
        Ok(database)
    }
}
