use std::sync::Arc;

use crate::data::poem_repository::PoemRepository;
use crate::domain::error::DomainError;
use crate::domain::poem::{NewPoem, Poem};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PoemService<R: PoemRepository + 'static> {
    repo: Arc<R>,
}

impl<R> PoemService<R>
where
    R: PoemRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_poems(&self) -> Result<Vec<Poem>, DomainError> {
        self.repo.list_newest_first().await
    }

    #[instrument(skip_all)]
    pub async fn create_poem(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        content: Option<&str>,
    ) -> Result<Poem, DomainError> {
        let input = NewPoem::validate(title, author, content)?;
        debug!(title = input.title(), author = input.author(), "poem validated");
        let poem = Poem::new(input);
        self.repo.create(poem).await
    }
}
