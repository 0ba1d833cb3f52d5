mod cli;
mod host;

use std::process::ExitCode;

use icosa_common::ConfigError;
use icosa_config::IcosaConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "icosa=info";

fn load_config(args: &cli::Args) -> Result<IcosaConfig, ConfigError> {
    match args.config {
        Some(ref path) => icosa_config::load_config_from(path),
        None => icosa_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Load before logging so the config can pick the level; report after.
    let loaded = load_config(&args);

    let log_directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => format!("icosa={}", config.logging.level.as_directive()),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&log_directive);

    tracing::info!("icosa v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        IcosaConfig::default()
    });

    if args.dump_config {
        println!("{}", icosa_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let opts = host::RunOptions::from_args(&args);
    tracing::info!(
        width = opts.width,
        height = opts.height,
        frames = opts.frames,
        "Entering render loop"
    );

    match host::run(&opts, &config) {
        Ok(summary) => {
            tracing::info!(
                snapshots = summary.snapshots.len(),
                "Shutdown complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Render failed: {e}");
            ExitCode::FAILURE
        }
    }
}
