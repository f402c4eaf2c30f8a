//! opscore - prints the dashboard summary or one assessment's results as JSON.
//!
//! Usage:
//!   opscore                 dashboard summary
//!   opscore results <id>    results for a stored assessment

use std::error::Error;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use opscore::adapters::{
    FileAssessmentRepository, InMemoryAssessmentRepository, InMemoryQuestionReader, YamlQuestionReader,
};
use opscore::application::{
    GetDashboardSummaryHandler, GetDashboardSummaryQuery, GetResultsHandler, GetResultsQuery, LoadState,
    LoadTracker, ResultsOutcome,
};
use opscore::config::{AppConfig, LoggingConfig, StorageBackend};
use opscore::domain::foundation::AssessmentId;
use opscore::ports::{AssessmentRepository, QuestionReader};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging)?;

    let repository: Arc<dyn AssessmentRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryAssessmentRepository::new()),
        StorageBackend::File => Arc::new(FileAssessmentRepository::new(&config.storage.data_dir)),
    };
    let questions: Arc<dyn QuestionReader> = match &config.catalog.path {
        Some(path) => Arc::new(YamlQuestionReader::new(path)),
        None => Arc::new(InMemoryQuestionReader::with_default_catalog()),
    };
    info!(
        backend = ?config.storage.backend,
        catalog = ?config.catalog.path,
        "opscore starting"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.as_slice() {
        [] => {
            let handler = GetDashboardSummaryHandler::new(repository, questions);
            let summary = load(handler.handle(GetDashboardSummaryQuery {
                trend_window: config.dashboard.trend_window,
            }))
            .await?;
            serde_json::to_string_pretty(&summary)?
        }
        [command, id] if command == "results" => {
            let assessment_id: AssessmentId = id.parse()?;
            let handler = GetResultsHandler::new(repository, questions);
            match load(handler.handle(GetResultsQuery { assessment_id })).await? {
                ResultsOutcome::Ready(results) => serde_json::to_string_pretty(&results)?,
                ResultsOutcome::NoData { assessment_id } => {
                    warn!(%assessment_id, "no assessment found; start a new one");
                    return Ok(());
                }
            }
        }
        _ => return Err("usage: opscore [results <id>]".into()),
    };

    println!("{}", output);
    Ok(())
}

/// Runs one store-backed read through a `LoadTracker`.
async fn load<T, E, F>(request: F) -> Result<T, BoxError>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    let mut tracker = LoadTracker::new();
    let ticket = tracker.begin();
    tracker.resolve(ticket, request.await);

    match tracker.into_state() {
        LoadState::Success(value) => Ok(value),
        LoadState::Error(message) => Err(message.into()),
        LoadState::Loading => Err("load was superseded".into()),
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_installs_default_subscriber() {
        assert!(init_tracing(&LoggingConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn load_returns_successful_value() {
        let value = load(async { Ok::<_, String>(7u32) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn load_surfaces_error_message() {
        let err = load(async { Err::<u32, _>("store unavailable") }).await.unwrap_err();
        assert_eq!(err.to_string(), "store unavailable");
    }
}
