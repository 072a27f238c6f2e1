mod config;
mod models;
mod render;
mod routes;

use actix_files::Files;
use actix_web::http::StatusCode;
use actix_web::middleware::{self, ErrorHandlers};
use actix_web::{web, App, HttpServer};
use config::Settings;
use render::{DisplayContext, TemplateEngine};
use routes::pages::AppState;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting houseprice-web front end...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Ensure asset and template directories exist before serving starts
    let static_dir = settings.assets.dir.clone();
    let template_dir = settings.templates.dir.clone();
    for dir in [
        format!("{}/css", static_dir),
        format!("{}/js", static_dir),
        template_dir.clone(),
    ] {
        std::fs::create_dir_all(&dir)?;
    }

    // Initialize the template engine with the global display values
    let display = DisplayContext::from_settings(&settings);
    let engine = Arc::new(TemplateEngine::new(
        &template_dir,
        &display,
        settings.templates.auto_reload,
    ));

    info!(
        "Template engine initialized (dir: {}, auto_reload: {})",
        template_dir, settings.templates.auto_reload
    );

    // Build application state
    let app_state = AppState { engine };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .wrap(
                ErrorHandlers::new().handler(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    routes::pages::render_server_fault,
                ),
            )
            .configure(routes::configure_routes)
            .service(Files::new("/static", static_dir.clone()))
            .default_service(web::route().to(routes::pages::not_found))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
