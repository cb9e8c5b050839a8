//! Runs a group analysis over a session document and prints the report.
//!
//! Usage: `pairwise-consensus <session.json>`

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use pairwise_consensus::config::{AppConfig, ConfigError, LoggingConfig};
use pairwise_consensus::domain::analysis::{AnalysisError, GroupAnalysis, SessionInput};

#[derive(Debug, Error)]
enum RunError {
    #[error("usage: pairwise-consensus <session.json>")]
    Usage,

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Analysis failed ({code}): {0}", code = .0.code())]
    Analysis(#[from] AnalysisError),
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            init_logging(&LoggingConfig::default());
            error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<(), RunError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(RunError::Usage)?;

    info!(path = %path.display(), "Loading session");
    let contents = std::fs::read_to_string(&path).map_err(|source| RunError::Read {
        path: path.clone(),
        source,
    })?;
    let session: SessionInput = serde_json::from_str(&contents)?;

    let report = GroupAnalysis::new(config.analysis.settings()).run(&session)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_writer(io::stderr).with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
