//! Integration tests for the questionnaire lifecycle.
//!
//! These tests drive the public API end to end:
//! 1. Start an assessment and walk the catalog answering each question
//! 2. Submit the session and check the computed results
//! 3. Query results and the dashboard summary from the same store
//!
//! Uses in-memory adapters to test the flow without external dependencies.

use std::sync::Arc;

use opscore::adapters::{InMemoryAssessmentRepository, InMemoryQuestionReader};
use opscore::application::{
    CompleteAssessmentHandler, GetDashboardSummaryHandler, GetDashboardSummaryQuery, GetResultsHandler,
    GetResultsQuery, ResultsOutcome, StartAssessmentCommand, StartAssessmentHandler,
};
use opscore::domain::analysis::{PerformanceTier, ScoreInconsistency};
use opscore::domain::assessment::{AssessmentError, AssessmentPatch, NewAssessment, Response, ResponseSet, ResponseValue};
use opscore::domain::catalog::{Category, Question, QuestionCatalog};
use opscore::domain::foundation::{AssessmentId, QuestionId, Timestamp};
use opscore::ports::{AssessmentRepository, QuestionReader};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    repository: Arc<InMemoryAssessmentRepository>,
    start: StartAssessmentHandler,
    complete: CompleteAssessmentHandler,
    results: GetResultsHandler,
    dashboard: GetDashboardSummaryHandler,
}

impl App {
    fn new(questions: InMemoryQuestionReader) -> Self {
        let repository = Arc::new(InMemoryAssessmentRepository::new());
        let store: Arc<dyn AssessmentRepository> = repository.clone();
        let questions: Arc<dyn QuestionReader> = Arc::new(questions);
        Self {
            repository,
            start: StartAssessmentHandler::new(store.clone(), questions.clone()),
            complete: CompleteAssessmentHandler::new(store.clone(), questions.clone()),
            results: GetResultsHandler::new(store.clone(), questions.clone()),
            dashboard: GetDashboardSummaryHandler::new(store, questions),
        }
    }
}

/// Process Efficiency and Team Performance, two questions each.
fn two_by_two() -> QuestionCatalog {
    let q = |id: u32, category: Category| {
        Question::new(QuestionId::new(id), category, format!("Question {}", id), id).unwrap()
    };
    QuestionCatalog::new(vec![
        q(1, Category::ProcessEfficiency),
        q(2, Category::ProcessEfficiency),
        q(3, Category::TeamPerformance),
        q(4, Category::TeamPerformance),
    ])
    .unwrap()
}

fn uniform_answers(catalog: &QuestionCatalog, value: i32, at: Timestamp) -> ResponseSet {
    catalog
        .questions()
        .iter()
        .map(|q| Response::new(q.id(), ResponseValue::try_new(value).unwrap(), at))
        .collect::<Vec<_>>()
        .into()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn default_catalog_walkthrough_produces_results_and_dashboard() {
    let app = App::new(InMemoryQuestionReader::with_default_catalog());

    let mut session = app.start.handle(StartAssessmentCommand::default()).await.unwrap().session;
    assert_eq!(session.progress().total, 15);
    assert!(session.navigator().is_at_start());

    loop {
        session.submit_answer(4).unwrap();
        if !session.advance().unwrap() {
            break;
        }
    }
    assert!(session.navigator().is_at_end());
    assert!(session.can_submit());

    let completed = session.submit(&app.complete).await.unwrap();
    assert_eq!(completed.results.overall_percentage.value(), 80);
    assert_eq!(completed.results.performance_tier, PerformanceTier::VeryGood);
    assert!(completed.results.recommendations.is_empty());
    assert_eq!(completed.results.category_scores.len(), 3);

    let outcome = app
        .results
        .handle(GetResultsQuery {
            assessment_id: session.assessment_id(),
        })
        .await
        .unwrap();
    assert_eq!(outcome.results().map(|r| r.overall_percentage.value()), Some(80));

    let summary = app.dashboard.handle(GetDashboardSummaryQuery::default()).await.unwrap();
    assert_eq!(summary.total_assessments, 1);
    assert_eq!(summary.trend.len(), 1);
    assert!(!summary.show_trend);
    assert_eq!(summary.latest.map(|l| l.percentage.value()), Some(80));
}

#[tokio::test]
async fn two_by_two_scenario_scores_and_recommends() {
    let app = App::new(InMemoryQuestionReader::new(two_by_two()));
    let mut session = app.start.handle(StartAssessmentCommand::default()).await.unwrap().session;

    for value in [2, 3, 5, 5] {
        session.submit_answer(value).unwrap();
        session.advance().unwrap();
    }

    let results = session.submit(&app.complete).await.unwrap().results;

    let process = results.category_score(&Category::ProcessEfficiency).unwrap();
    assert_eq!((process.score, process.max_score), (5, 10));
    assert_eq!(process.percentage.value(), 50);
    let team = results.category_score(&Category::TeamPerformance).unwrap();
    assert_eq!(team.percentage.value(), 100);

    assert_eq!((results.overall_score, results.overall_max_score), (15, 20));
    assert_eq!(results.overall_percentage.value(), 75);
    assert_eq!(results.performance_tier, PerformanceTier::Good);
    assert_eq!(results.recommendations.len(), 1);
    assert_eq!(results.recommendations[0].category, Category::ProcessEfficiency);
}

#[tokio::test]
async fn unanswered_session_cannot_submit() {
    let app = App::new(InMemoryQuestionReader::new(two_by_two()));
    let mut session = app.start.handle(StartAssessmentCommand::default()).await.unwrap().session;

    assert!(!session.navigator().is_complete());
    let err = session.submit(&app.complete).await.unwrap_err();
    assert_eq!(err, AssessmentError::Incomplete { answered: 0, total: 4 });

    let outcome = app
        .results
        .handle(GetResultsQuery {
            assessment_id: session.assessment_id(),
        })
        .await
        .unwrap();
    let results = outcome.results().unwrap();
    assert_eq!(results.overall_percentage.value(), 0);
    assert_eq!(
        results.inconsistency,
        Some(ScoreInconsistency::Incomplete {
            answered: 0,
            expected: 4
        })
    );
}

#[tokio::test]
async fn trend_is_chronological_over_completed_assessments() {
    let catalog = two_by_two();
    let app = App::new(InMemoryQuestionReader::new(catalog.clone()));
    let base = Timestamp::from_unix_secs(1_700_000_000);

    // Stored newest first to make sure ordering comes from completion time.
    for (day, value) in [(3, 4), (1, 2), (2, 3)] {
        let at = base.add_days(day);
        let created = app.repository.create(NewAssessment::start(at)).await.unwrap();
        app.repository
            .update(created.id(), AssessmentPatch::completion(uniform_answers(&catalog, value, at), at))
            .await
            .unwrap();
    }
    // One in progress, which the dashboard ignores.
    app.repository.create(NewAssessment::start(base)).await.unwrap();

    let summary = app
        .dashboard
        .handle(GetDashboardSummaryQuery { trend_window: 5 })
        .await
        .unwrap();

    let trend: Vec<u8> = summary.trend.iter().map(|p| p.percentage.value()).collect();
    assert_eq!(trend, vec![40, 60, 80]);
    assert!(summary.show_trend);
    assert_eq!(summary.total_assessments, 3);
    assert_eq!(summary.latest.map(|l| l.id), Some(AssessmentId::new(1)));
    let recent: Vec<u8> = summary.recent.iter().map(|s| s.percentage.value()).collect();
    assert_eq!(recent, vec![80, 60, 40]);
}

#[tokio::test]
async fn missing_assessment_reports_no_data() {
    let app = App::new(InMemoryQuestionReader::with_default_catalog());
    let outcome = app
        .results
        .handle(GetResultsQuery {
            assessment_id: AssessmentId::new(42),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, ResultsOutcome::NoData { .. }));
}
