// tests/executor_backend.rs

use std::error::Error;

use apibuilder_release::driver::{ReleasePlan, drive, release_plan};
use apibuilder_release::executor::{Executor, LocalCollaborator};
use apibuilder_release::types::StepOutcome;
use apibuilder_release_test_utils::recording::RecordingBackend;
use apibuilder_release_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn builtin_plan_reaches_backend_in_order() -> TestResult {
    init_tracing();

    let backend = RecordingBackend::new();
    let collaborator = LocalCollaborator::new(backend.clone());

    let report = with_timeout(drive(&collaborator, &release_plan())).await?;

    assert!(report.succeeded());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        backend.executed(),
        vec![
            ("apibuilder-commons".to_string(), "dev tag".to_string()),
            ("apibuilder-commons".to_string(), "sbt +publish".to_string()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn failed_tag_skips_publish() -> TestResult {
    init_tracing();

    let backend = RecordingBackend::new().with_outcome("dev tag", StepOutcome::Failed(128));
    let collaborator = LocalCollaborator::new(backend.clone());

    let report = with_timeout(drive(&collaborator, &release_plan())).await?;

    assert_eq!(backend.executed_steps(), vec!["dev tag".to_string()]);
    assert!(!report.succeeded());
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.exit_code(), 128);

    Ok(())
}

#[tokio::test]
async fn failed_publish_reports_both_steps() -> TestResult {
    let backend = RecordingBackend::new().with_outcome("sbt +publish", StepOutcome::Failed(1));
    let report = Executor::create("apibuilder-commons", backend.clone())
        .add("dev tag")
        .add("sbt +publish")
        .run()
        .await?;

    let outcomes: Vec<_> = report.steps.iter().map(|s| s.outcome).collect();
    assert_eq!(outcomes, vec![StepOutcome::Success, StepOutcome::Failed(1)]);
    assert_eq!(report.failed_step().map(|s| s.step.as_str()), Some("sbt +publish"));

    Ok(())
}

#[tokio::test]
async fn custom_plan_uses_its_project() -> TestResult {
    let backend = RecordingBackend::new();
    let plan = ReleasePlan {
        project: "apibuilder-validation".into(),
        steps: vec!["dev tag".into()],
    };

    drive(&LocalCollaborator::new(backend.clone()), &plan).await?;

    assert_eq!(
        backend.executed(),
        vec![("apibuilder-validation".to_string(), "dev tag".to_string())]
    );

    Ok(())
}
