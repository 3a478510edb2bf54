//! Taskdesk HTTP server.
//!
//! Wires the in-memory repository, the default clock, the task service, and
//! the `/tasks` router, then serves until interrupted.
//!
//! Configuration is environment-driven:
//!
//! - `TASKDESK_ADDR`: socket address to bind (default `127.0.0.1:8080`)
//! - `TASKDESK_PUBLIC_URL`: base URL used in resource location strings
//!   (default `http://localhost`)
//! - `RUST_LOG`: tracing filter (default `info`)

use mockable::DefaultClock;
use std::env;
use std::sync::Arc;
use taskdesk::api::{self, AppState};
use taskdesk::task::adapters::memory::InMemoryTaskRepository;
use taskdesk::task::services::TaskService;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_PUBLIC_URL: &str = "http://localhost";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = env::var("TASKDESK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let public_url = env::var("TASKDESK_PUBLIC_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_URL.to_owned());

    let service = Arc::new(TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ));
    let app = api::router(AppState::new(service, public_url));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "taskdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
