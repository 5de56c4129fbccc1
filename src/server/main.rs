//! HTTP server answering whether an address lies inside the MKAD, and how
//! far from it when it does not.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mkad::api::{router, AppState};
use mkad::config::{Config, YANDEX_API_KEY_ENV};
use mkad::geocoder::{build_http_client, GeocodeFallbackChain, NominatimGeocoder, YandexGeocoder};
use mkad::ring::{BoundaryCurve, RingService, StrategyKind};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "MKAD distance server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Distance strategy (overrides config)
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// CSV ring dataset with index,latitude,longitude columns (overrides config)
    #[arg(long)]
    boundary_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    }
    .with_yandex_key(std::env::var(YANDEX_API_KEY_ENV).ok());

    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(strategy) = args.strategy {
        config.ring.strategy = strategy;
    }
    if let Some(file) = args.boundary_file {
        config.ring.file = Some(file);
    }

    info!("MKAD Distance Server");

    let curve = match &config.ring.file {
        Some(path) => BoundaryCurve::from_csv_path(path),
        None => BoundaryCurve::mkad(),
    }
    .context("Refusing to start with an invalid ring dataset")?;

    info!(
        "Loaded ring with {} vertices, distance strategy: {}",
        curve.len(),
        config.ring.strategy
    );

    let client = build_http_client(&config.geocoder).context("Failed to create HTTP client")?;

    if config.geocoder.yandex.api_key.is_none() {
        warn!(
            "{} is not set; every lookup will fall back to Nominatim",
            YANDEX_API_KEY_ENV
        );
    }
    let primary = YandexGeocoder::new(&config.geocoder.yandex, client.clone())?;
    let fallback = NominatimGeocoder::new(&config.geocoder.nominatim, client)?;

    let state = Arc::new(AppState {
        geocoder: GeocodeFallbackChain::new(Box::new(primary), Box::new(fallback)),
        ring: RingService::new(Arc::new(curve), config.ring.strategy),
    });

    let app = router(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
