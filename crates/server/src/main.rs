use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use livetrack_transit::Simulator;
use livetrack_transit::provider::loader::load_provider;
use tracing::{Level, info};
use tracing_subscriber::filter::{FilterFn, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;
mod response;
mod routes;

use config::Args;
use routes::{AppState, create_router, local_now};

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = FilterFn::new(|meta| {
        meta.module_path()
            .unwrap_or_default()
            .starts_with("livetrack")
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .with(LevelFilter::from_level(level))
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let provider = load_provider(&args.train_data, &args.bus_data)
        .wrap_err("failed to load timetables")?;
    info!(
        trains = provider.train_count(),
        buses = provider.bus_count(),
        "timetables ready"
    );

    let state = Arc::new(AppState {
        simulator: Simulator::new(provider),
        clock: local_now,
    });

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", args.bind))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
