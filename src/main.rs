use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use motbook::config::AppConfig;
use motbook::handlers;
use motbook::services::directory::fixture::FixtureDirectory;
use motbook::services::notify::log::LogNotifier;
use motbook::services::notify::webhook::WebhookNotifier;
use motbook::services::notify::NotificationSink;
use motbook::services::registry::BookingRegistry;
use motbook::services::reports::ReportBook;
use motbook::services::submit::LocalSubmitter;
use motbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let latency = config.simulated_latency();

    let notifier: Box<dyn NotificationSink> = if config.notify_webhook_url.is_empty() {
        tracing::info!("notifications will be written to the service log");
        Box::new(LogNotifier)
    } else {
        tracing::info!(url = %config.notify_webhook_url, "using webhook notification sink");
        Box::new(WebhookNotifier::new(config.notify_webhook_url.clone()))
    };

    let (inbox_tx, _) = broadcast::channel(256);

    let state = Arc::new(AppState {
        config: config.clone(),
        directory: Box::new(FixtureDirectory::new(latency)),
        notifier,
        submitter: Box::new(LocalSubmitter::new(latency)),
        registry: Mutex::new(BookingRegistry::seeded()),
        reports: Mutex::new(ReportBook::seeded()),
        wizards: Mutex::new(HashMap::new()),
        inbox_tx,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/booking/session",
            post(handlers::booking::create_session),
        )
        .route(
            "/api/booking/session/:id",
            get(handlers::booking::get_session),
        )
        .route(
            "/api/booking/session/:id/vehicle",
            post(handlers::booking::lookup_vehicle),
        )
        .route(
            "/api/booking/session/:id/date",
            post(handlers::booking::select_date),
        )
        .route(
            "/api/booking/session/:id/slot",
            post(handlers::booking::select_slot),
        )
        .route(
            "/api/booking/session/:id/step",
            post(handlers::booking::jump_to_step),
        )
        .route(
            "/api/booking/session/:id/details",
            post(handlers::booking::update_details),
        )
        .route(
            "/api/booking/session/:id/submit",
            post(handlers::booking::submit),
        )
        .route("/api/booking/slots", get(handlers::booking::day_slots))
        .route("/api/my-bookings", post(handlers::booking::find_bookings))
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route(
            "/api/dashboard/bookings",
            get(handlers::dashboard::get_bookings),
        )
        .route(
            "/api/dashboard/bookings/:id",
            delete(handlers::dashboard::delete_booking),
        )
        .route(
            "/api/dashboard/reports",
            get(handlers::reports::get_reports),
        )
        .route(
            "/api/dashboard/reports/:id",
            delete(handlers::reports::delete_report),
        )
        .route("/api/inbox/threads", get(handlers::inbox::get_threads))
        .route("/api/inbox/thread/:id", get(handlers::inbox::get_thread))
        .route(
            "/api/inbox/thread/:id/read",
            post(handlers::inbox::mark_read),
        )
        .route("/api/inbox/reply", post(handlers::inbox::send_reply))
        .route("/api/inbox/events", get(handlers::inbox::events_stream))
        .route(
            "/calendar/:booking_id",
            get(handlers::calendar::download_ics),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
