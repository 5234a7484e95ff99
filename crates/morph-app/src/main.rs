mod app_state;
mod cli;
mod dump;

use std::process::ExitCode;

use morph_config::MorphConfig;
use morph_renderer::ParameterSet;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log directive {directive:?} ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load the config named on the command line, or the platform default.
/// Any failure falls back to built-in defaults.
fn load_config(args: &cli::Args) -> (MorphConfig, Option<String>) {
    let result = match args.config {
        Some(ref path) => morph_config::load_config_from(path),
        None => morph_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (MorphConfig::default(), Some(e.to_string())),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its log level can seed the filter.
    let (config, config_error) = load_config(&args);
    let directive = args
        .log_directive()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);

    tracing::info!("morph v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    match config_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => tracing::info!("Config loaded"),
    }
    // Loaded before the subscriber existed, so report range problems here.
    if let Err(e) = morph_config::validation::validate(&config) {
        tracing::warn!("Config values out of range will be clamped: {e}");
    }

    let params = match ParameterSet::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Cannot build scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.dump_params {
        let report = dump::dump_params(&config, params, args.frames);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize parameters: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let event_loop = match EventLoop::new() {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::MorphApp::new(config, args.config.clone(), params);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    if let Some(e) = app.take_fatal() {
        let e = morph_common::MorphError::from(e);
        tracing::error!("Exiting: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use morph_renderer::LightId;

    #[test]
    fn out_of_range_config_is_kept_and_clamped_downstream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("morph.toml");
        std::fs::write(
            &path,
            "[surface]\ndisplacement_strength = 1.5\nsubdivision_width = 8\nsubdivision_height = 8\n\n[lights.a]\ncolor = \"#00ff00\"\n",
        )
        .unwrap();
        let args = cli::Args::parse_from(["morph", "--config", path.to_str().unwrap()]);

        let (config, error) = load_config(&args);
        assert!(error.is_none());
        assert_eq!(config.lights.a.color, "#00ff00");

        let params = ParameterSet::from_config(&config).unwrap();
        assert_eq!(params.surface().displacement_strength(), 1.0);
        assert_eq!(params.light(LightId::A).color().to_hex(), "#00ff00");
    }
}
