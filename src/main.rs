use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_service::config::Config;
use report_service::modules::reports::controllers::report_controller;
use report_service::modules::reports::services::ReportService;
use report_service::modules::upstream::services::{
    ClientRegistryClient, DebitCardRegistryClient, MovementLedgerClient, ProductRegistryClient,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_service=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;
    config.validate().context("configuration validation failed")?;

    tracing::info!("Starting bank report service");
    tracing::info!("Environment: {}", config.app.env);

    // One HTTP client shared by all upstream adapters; the timeout turns a
    // hung upstream into a report-level failure
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.request_timeout_secs))
        .build()
        .context("failed to build upstream HTTP client")?;

    let report_service = web::Data::new(ReportService::new(
        Arc::new(ClientRegistryClient::new(
            http.clone(),
            config.upstream.client_service_url.clone(),
        )),
        Arc::new(ProductRegistryClient::new(
            http.clone(),
            config.upstream.product_service_url.clone(),
        )),
        Arc::new(MovementLedgerClient::new(
            http.clone(),
            config.upstream.movement_service_url.clone(),
        )),
        Arc::new(DebitCardRegistryClient::new(
            http,
            config.upstream.debit_card_service_url.clone(),
        )),
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    tracing::info!("Server binding to: {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(report_service.clone())
            .configure(report_controller::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "report-service"
    }))
}
