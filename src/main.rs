use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use markupcalc::config::Config;
use markupcalc::middleware::{RequestTrace, SessionGate};
use markupcalc::pricing::controllers::configure_pricing_routes;
use markupcalc::sessions::controllers::configure_session_routes;
use markupcalc::sessions::SessionService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "markupcalc=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Markup Calculator Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let sessions = Arc::new(SessionService::new(
        config.security.session_secret.clone(),
        config.security.session_ttl_hours,
    ));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(sessions.clone()))
            .wrap(SessionGate::new(sessions.clone()))
            .wrap(TracingLogger::default())
            .wrap(RequestTrace)
            .wrap(Cors::permissive())
            .configure(configure_pricing_routes)
            .configure(configure_session_routes)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "markupcalc"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Markup Calculator Service",
        "version": "0.1.0",
        "status": "running"
    }))
}
