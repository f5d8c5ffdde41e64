// src/main.rs
use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use courierhub::application::Session;
use courierhub::events::{CourierBooked, CourierStatusUpdated, EventBus};
use courierhub::services::CourierService;
use courierhub::store::{CourierStore, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(name = "courierhub")]
#[command(about = "Interactive courier booking and tracking desk", long_about = None)]
struct Cli {
    /// Maximum number of couriers the session accepts
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Render the final report as JSON instead of the label layout
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the prompt protocol on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.capacity >= 1, "capacity must be at least 1");

    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    event_bus.subscribe::<CourierBooked, _>(|event| {
        tracing::debug!(
            courier_id = event.courier_id,
            charges = event.charges,
            "event: courier booked"
        );
    });
    event_bus.subscribe::<CourierStatusUpdated, _>(|event| {
        tracing::debug!(
            courier_id = event.courier_id,
            from = %event.from,
            to = %event.to,
            "event: status updated"
        );
    });

    // 2. SERVICE
    let store = CourierStore::with_capacity(cli.capacity);
    let service = Arc::new(CourierService::new(store, event_bus));

    // 3. SESSION
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(service, stdin.lock(), stdout.lock(), cli.json);
    session.run()?;

    Ok(())
}
