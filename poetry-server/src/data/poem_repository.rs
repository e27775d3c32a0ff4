use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use tracing::{error, info};

use crate::domain::error::DomainError;
use crate::domain::poem::Poem;
use crate::infrastructure::database::DatabaseCache;

pub const POEMS_COLLECTION: &str = "poems";

#[async_trait]
pub trait PoemRepository: Send + Sync {
    /// Stores `poem` and returns it with the identifier assigned by storage.
    async fn create(&self, poem: Poem) -> Result<Poem, DomainError>;
    /// Every poem, newest `createdAt` first.
    async fn list_newest_first(&self) -> Result<Vec<Poem>, DomainError>;
}

#[derive(Clone)]
pub struct MongoPoemRepository {
    cache: Arc<DatabaseCache>,
}

impl MongoPoemRepository {
    pub fn new(cache: Arc<DatabaseCache>) -> Self {
        Self { cache }
    }

    async fn collection(&self) -> Result<Collection<Poem>, DomainError> {
        let database = self.cache.database().await?;
        Ok(database.collection::<Poem>(POEMS_COLLECTION))
    }
}

#[async_trait]
impl PoemRepository for MongoPoemRepository {
    async fn create(&self, poem: Poem) -> Result<Poem, DomainError> {
        let result = self
            .collection()
            .await?
            .insert_one(&poem)
            .await
            .map_err(|e| {
                error!("failed to insert poem: {}", e);
                DomainError::from(e)
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DomainError::Internal(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })?;

        info!(poem_id = %id, "poem stored");
        Ok(Poem {
            id: Some(id),
            ..poem
        })
    }

    async fn list_newest_first(&self) -> Result<Vec<Poem>, DomainError> {
        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| {
                error!("db error while querying poems: {}", e);
                DomainError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            error!("db error while reading poems: {}", e);
            DomainError::from(e)
        })
    }
}
