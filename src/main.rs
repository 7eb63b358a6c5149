//! Assessment scoring binary entry point.
//!
//! Loads the configured questionnaire page, restores any saved answers from
//! `SQLite`, recomputes the scores and prints a localized report to stdout.
//! All logs go to stderr.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use cog_assess::config::Config;
use cog_assess::data::{load_assessment, load_translator};
use cog_assess::report;
use cog_assess::scoring::score;
use cog_assess::session::AnswerState;
use cog_assess::storage::{PageStore, SqliteStorage};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for the report text)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("cog-assess starting...");

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, page={}, lang={}",
        config.database_path,
        config.page_id,
        config.lang
    );

    if let Err(e) = run(&config).await {
        tracing::error!("Run error: {e}");
        std::process::exit(1);
    }

    tracing::info!("cog-assess done");
}

async fn run(config: &Config) -> Result<(), cog_assess::error::AppError> {
    let translator = load_translator(&config.data_dir, config.lang).await?;
    let assessment = load_assessment(&config.data_dir, config.lang, &config.page_id).await?;

    let storage = SqliteStorage::new(&config.database_path).await?;

    let state = match storage.load(&config.page_id).await? {
        Some(payload) => {
            tracing::info!(
                page_id = %config.page_id,
                updated_at = %payload.updated_at,
                "Restored saved answers"
            );
            AnswerState::hydrate(payload)
        }
        None => {
            tracing::info!(page_id = %config.page_id, "No saved answers, starting fresh");
            AnswerState::new()
        }
    };

    let result = score(&assessment, &state, &config.tuning);
    print!("{}", report::render(&assessment, &result, &translator));

    // Refresh the persisted payload with the recomputed scores.
    let payload = state.serialize_with_scores(Some(result));
    storage.save(&config.page_id, &payload).await?;

    Ok(())
}
