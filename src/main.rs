//! FAIRWAY — personal golf round tracker
//!
//! Entry point. Loads configuration, initialises structured logging,
//! reads the logged rounds and prints the scorecard report.

use anyhow::{Context, Result};
use tracing::info;

use fairway::config::{self, OutputFormat};
use fairway::report::Scorecard;
use fairway::stats::StatsCalculator;
use fairway::storage::JsonRoundStore;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path =
        std::env::var(config::CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let cfg = config::AppConfig::load(&config_path)?;

    init_logging();

    let rounds_file = cfg.rounds_file();
    info!(
        player = %cfg.tracker.player_name,
        rounds_file = %rounds_file,
        format = ?cfg.report.format,
        "FAIRWAY starting up"
    );

    let scorecard = Scorecard::new(
        Box::new(JsonRoundStore::new(rounds_file)),
        cfg.tracker.player_name.clone(),
        StatsCalculator::new(cfg.stats_config()),
    );
    let report = scorecard.build()?;

    match cfg.report.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fairway=info"));

    let json_logging = std::env::var("FAIRWAY_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
