mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use std::sync::Arc;

use application::poem_service::PoemService;
use data::poem_repository::MongoPoemRepository;
use infrastructure::config::AppConfig;
use infrastructure::database::DatabaseCache;
use infrastructure::logging::init_logging;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let cache = Arc::new(DatabaseCache::new(
        config.mongodb_uri.clone(),
        config.database_name.clone(),
    ));
    info!(
        database = %cache.database_name(),
        "database connection deferred until first request"
    );

    let poem_repo = Arc::new(MongoPoemRepository::new(cache));
    let poem_service = PoemService::new(poem_repo);

    server::start_rest_server(config, poem_service).await
}
