mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use radar_common::ConfigError;
use radar_config::RadarConfig;

fn load_config(path: Option<&str>) -> Result<RadarConfig, ConfigError> {
    match path {
        Some(path) => radar_config::load_config_from(std::path::Path::new(path)),
        None => radar_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    // Loaded before logging so the config can pick the level.
    let loaded = load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .as_deref()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.as_directive()))
        .unwrap_or("radar=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "radar=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Radar Scope v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        RadarConfig::default()
    });
    args.apply_overrides(&mut config);
    tracing::info!(
        "Config loaded ({} deg/s, pulse {})",
        config.radar.rotation_speed,
        if config.radar.pulse_enabled { "on" } else { "off" },
    );

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::RadarApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
