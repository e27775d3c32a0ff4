use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::data::poem_repository::PoemRepository;
use crate::domain::error::DomainError;
use crate::domain::poem::Poem;

#[derive(Default)]
pub struct InMemoryPoemRepository {
    poems: Mutex<Vec<Poem>>,
}

impl InMemoryPoemRepository {
    pub fn with_poems(poems: Vec<Poem>) -> Self {
        Self {
            poems: Mutex::new(poems),
        }
    }

    pub fn stored(&self) -> Vec<Poem> {
        self.poems.lock().unwrap().clone()
    }
}

#[async_trait]
impl PoemRepository for InMemoryPoemRepository {
    async fn create(&self, poem: Poem) -> Result<Poem, DomainError> {
        let poem = Poem {
            id: Some(ObjectId::new()),
            ..poem
        };
        self.poems.lock().unwrap().push(poem.clone());
        Ok(poem)
    }

    async fn list_newest_first(&self) -> Result<Vec<Poem>, DomainError> {
        let mut poems = self.stored();
        poems.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(poems)
    }
}

/// Fails every call the way an unreachable database would.
pub struct UnavailablePoemRepository;

#[async_trait]
impl PoemRepository for UnavailablePoemRepository {
    async fn create(&self, _poem: Poem) -> Result<Poem, DomainError> {
        Err(DomainError::Database("connection refused".into()))
    }

    async fn list_newest_first(&self) -> Result<Vec<Poem>, DomainError> {
        Err(DomainError::Database("connection refused".into()))
    }
}
