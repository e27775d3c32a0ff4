use crate::application::poem_service::PoemService;
use crate::data::poem_repository::PoemRepository;
use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestTracing;
use actix_web::http::Method;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

pub async fn start_rest_server<R: PoemRepository + 'static>(
    config: AppConfig,
    poem_service: PoemService<R>,
) -> anyhow::Result<()> {
    let bind_address = (config.host.clone(), config.port);
    info!(
        host = %bind_address.0,
        port = bind_address.1,
        allowed_origin = %config.allowed_origin,
        "HTTP server starting"
    );

    let poem_service = web::Data::new(poem_service);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(RequestTracing)
            .wrap(security_headers())
            .wrap(cors_headers(&config))
            .app_data(poem_service.clone())
            .configure(configure::<R>)
    })
    .bind(bind_address)?
    .run()
    .await
    .map_err(anyhow::Error::new)?;

    Ok(())
}

pub fn configure<R: PoemRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health))
            .service(
                web::resource("/poems")
                    .app_data(handlers::poem::json_config())
                    .route(web::get().to(handlers::poem::list_poems::<R>))
                    .route(web::post().to(handlers::poem::create_poem::<R>))
                    .route(web::method(Method::OPTIONS).to(handlers::poem::preflight))
                    .default_service(web::to(handlers::poem::method_not_allowed)),
            ),
    );
}

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Permissions-Policy", "geolocation=()"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
}

/// CORS headers attached to every response, errors included.
pub fn cors_headers(config: &AppConfig) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Credentials", "true"))
        .add(("Access-Control-Allow-Origin", config.allowed_origin.as_str()))
        .add(("Access-Control-Allow-Methods", "GET,POST,OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
