use std::sync::Arc;

use serde_json::json;

use xvis::credentials::Credentials;
use xvis::generator::Task;
use xvis::generator::mock::{MockGenerator, MockReply};
use xvis::service::AnalysisService;
use xvis::session::Session;
use xvis::simulate::Simulator;

fn build_service(replies: Vec<MockReply>) -> (AnalysisService, Arc<MockGenerator>) {
    let generator = Arc::new(MockGenerator::new(replies));
    let service = AnalysisService::new(
        generator.clone(),
        Simulator::seeded(9).without_delays(),
        "test-model",
    );
    (service, generator)
}

fn credentials() -> Credentials {
    Credentials::new("key", "secret", "token")
}

#[tokio::test]
async fn connect_scans_the_account() {
    let (service, generator) = build_service(vec![]);
    let mut session = Session::new();

    session
        .connect(&service, credentials(), "  @ferris ")
        .await
        .unwrap();

    assert!(session.is_connected());
    assert_eq!(session.handle(), Some("ferris"));
    let metrics = session.metrics().unwrap();
    assert_eq!(metrics.current_period.len(), 29);
    assert_eq!(metrics.total_followers, 12_450);
    assert_eq!(session.analysis().unwrap().flags.len(), 2);
    assert!(session.selected().is_none());
    assert_eq!(generator.requests()[0].task, Task::AnalyzeAccount);
}

#[tokio::test]
async fn invalid_credentials_leave_session_untouched() {
    let (service, generator) = build_service(vec![]);
    let mut session = Session::new();

    let err = session
        .connect(&service, Credentials::new("key", " ", "token"), "ferris")
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("failed to scan account"), "{message}");
    assert!(message.contains("API secret is required"), "{message}");
    assert!(!session.is_connected());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn blank_handle_is_rejected() {
    let (service, _) = build_service(vec![]);
    let mut session = Session::new();
    assert!(session.connect(&service, credentials(), " @ ").await.is_err());
    assert!(!session.is_connected());
}

#[tokio::test]
async fn selecting_the_same_flag_reuses_its_fix() {
    let (service, generator) = build_service(vec![
        MockReply::Error("scan".to_string()),
        MockReply::json(json!({
            "title": "Post on a schedule",
            "steps": ["Pick two daily slots", "Queue a week of posts"]
        })),
        MockReply::json(json!({
            "title": "Add media",
            "steps": ["Attach an image to every other post"]
        })),
    ]);
    let mut session = Session::new();
    session.connect(&service, credentials(), "ferris").await.unwrap();

    let first = session.select_flag(&service, 0).await.unwrap();
    assert_eq!(first.flag.title, "Inconsistent Posting");
    assert_eq!(first.fix.title, "Post on a schedule");
    assert_eq!(generator.calls(), 2);

    session.select_flag(&service, 0).await.unwrap();
    assert_eq!(generator.calls(), 2);

    let second = session.select_flag(&service, 1).await.unwrap();
    assert_eq!(second.flag.title, "Media Usage Low");
    assert_eq!(second.fix.title, "Add media");
    assert_eq!(generator.calls(), 3);
}

#[tokio::test]
async fn out_of_range_flag_is_an_error() {
    let (service, generator) = build_service(vec![]);
    let mut session = Session::new();
    session.connect(&service, credentials(), "ferris").await.unwrap();

    let err = session.select_flag(&service, 5).await.unwrap_err();
    assert_eq!(err.to_string(), "no flag #6 (2 flags)");
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn rescan_replaces_results_and_clears_selection() {
    let (service, generator) = build_service(vec![]);
    let mut session = Session::new();
    session.connect(&service, credentials(), "ferris").await.unwrap();
    let before = session.metrics().unwrap().clone();
    session.select_flag(&service, 0).await.unwrap();

    session.rescan(&service).await.unwrap();

    assert!(session.selected().is_none());
    assert_ne!(session.metrics().unwrap(), &before);
    assert_eq!(generator.requests().last().unwrap().task, Task::AnalyzeAccount);
}

#[tokio::test]
async fn actions_need_a_connection() {
    let (service, _) = build_service(vec![]);
    let mut session = Session::new();
    assert!(session.rescan(&service).await.is_err());
    assert!(session.select_flag(&service, 0).await.is_err());
}

#[tokio::test]
async fn disconnect_drops_everything() {
    let (service, _) = build_service(vec![]);
    let mut session = Session::new();
    session.connect(&service, credentials(), "ferris").await.unwrap();
    session.select_flag(&service, 0).await.unwrap();

    session.disconnect();

    assert!(!session.is_connected());
    assert!(session.handle().is_none());
    assert!(session.metrics().is_none());
    assert!(session.analysis().is_none());
    assert!(session.selected().is_none());

    // Disconnecting twice is harmless.
    session.disconnect();
}
