mod app_state;
mod cli;

use nebula_common::ConfigError;
use nebula_config::NebulaConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "nebula=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = nebula_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Nebula crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn load_config(args: &cli::Args) -> Result<NebulaConfig, ConfigError> {
    match &args.config {
        Some(path) => nebula_config::load_config_from(path),
        None => nebula_config::load_config(),
    }
}

/// `--log-level` wins; otherwise the configured level for the nebula crates.
fn log_directive(args: &cli::Args, config: &NebulaConfig) -> String {
    args.log_level
        .clone()
        .unwrap_or_else(|| format!("nebula={}", config.logging.level.as_directive()))
}

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{directive}', using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging depends on the configured level, so the config is read first
    // and a load failure is reported once the subscriber exists.
    let loaded = load_config(&args);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&log_directive(&args, &config));

    tracing::info!("Nebula v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = nebula_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let keybinds = nebula_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", keybinds.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::NebulaApp::new(config, keybinds, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
