use crate::application::poem_service::PoemService;
use crate::data::poem_repository::PoemRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePoemRequest, PoemCreatedResponse, PoemResponse};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, warn};

pub async fn list_poems<R: PoemRepository + 'static>(
    service: web::Data<PoemService<R>>,
) -> Result<HttpResponse, DomainError> {
    let poems = service.list_poems().await?;
    let response: Vec<PoemResponse> = poems.into_iter().map(PoemResponse::from).collect();

    info!(count = response.len(), "poems retrieved");

    Ok(HttpResponse::Ok().json(response))
}

pub async fn create_poem<R: PoemRepository + 'static>(
    service: web::Data<PoemService<R>>,
    payload: web::Json<CreatePoemRequest>,
) -> Result<HttpResponse, DomainError> {
    let poem = service
        .create_poem(
            payload.title.as_deref(),
            payload.author.as_deref(),
            payload.content.as_deref(),
        )
        .await?;
    let id = poem
        .id
        .ok_or_else(|| DomainError::Internal("stored poem has no id".into()))?
        .to_hex();

    info!(poem_id = %id, "poem created");

    Ok(HttpResponse::Created().json(PoemCreatedResponse {
        message: "Poem created".into(),
        id,
    }))
}

/// CORS preflight. The CORS headers themselves come from the app-wide
/// default headers.
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, DomainError> {
    info!(method = %req.method(), "method not allowed");
    Err(DomainError::MethodNotAllowed)
}

/// Accepts a JSON body whatever the `Content-Type`, and reports malformed
/// bodies as 400 through [`DomainError`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!(error = %err, "rejected request body");
            DomainError::InvalidBody(err.to_string()).into()
        })
}
