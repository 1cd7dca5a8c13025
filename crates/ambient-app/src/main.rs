mod app_state;
mod cli;
mod lifecycle;

use ambient_common::{AmbientError, ConfigError};
use ambient_config::schema::AmbientConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const FALLBACK_DIRECTIVE: &str = "ambient=info";

/// Load the config named on the command line, or the default one.
fn load_config(args: &cli::Args) -> Result<AmbientConfig, ConfigError> {
    match &args.config {
        Some(path) => ambient_config::load_config_from(path),
        None => ambient_config::load_config(),
    }
}

/// Build the log filter: `RUST_LOG` plus the CLI override, else the
/// configured level.
fn env_filter(cli_directive: Option<&str>, config: &AmbientConfig) -> EnvFilter {
    let directive = cli_directive.unwrap_or_else(|| config.logging.level.directive());
    EnvFilter::from_default_env().add_directive(directive.parse().unwrap_or_else(|_| {
        FALLBACK_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    }))
}

fn main() {
    let args = cli::parse();

    // Load config before logging starts so its level can seed the filter.
    let loaded = load_config(&args);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if args.backdrop {
        config.window.backdrop = true;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), &config))
        .init();

    tracing::info!("Ambient v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Create the event loop and hand it the app until the window closes.
fn run(config: AmbientConfig) -> ambient_common::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| AmbientError::Window(e.to_string()))?;
    let mut app = app_state::AmbientApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| AmbientError::Window(e.to_string()))
}
