mod common;

use common::{commit, repository, FakeGitHub};
use github_dashboard::dashboard::{Dashboard, COMMIT_LIMIT, REPOSITORY_LIMIT};
use github_dashboard::error::DashboardError;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn test_dashboard_aggregates_both_lists() {
    let fake = Arc::new(FakeGitHub::new(
        vec![commit("c2", "octocat/a", 12), commit("c1", "octocat/b", 11)],
        vec![repository("a", 12), repository("b", 10)],
    ));
    let dashboard = Dashboard::new(fake.clone());

    let data = dashboard
        .get_dashboard_data("octocat")
        .await
        .expect("Failed to load dashboard");

    assert_eq!(data.username, "octocat");
    assert_eq!(data.commits.len(), 2);
    assert_eq!(data.commits[0].sha, "c2");
    assert_eq!(data.repositories.len(), 2);
    assert_eq!(data.repositories[0].name, "a");
    assert_eq!(fake.total_calls(), 2);
}

#[tokio::test]
async fn test_dashboard_uses_fixed_limits() {
    let fake = Arc::new(FakeGitHub::new(vec![], vec![]));
    let dashboard = Dashboard::new(fake.clone());

    dashboard.get_dashboard_data("octocat").await.unwrap();

    let limits = fake.limits.lock().unwrap().clone();
    assert_eq!(
        limits,
        vec![("commits", COMMIT_LIMIT), ("repositories", REPOSITORY_LIMIT)]
    );
    assert_eq!(COMMIT_LIMIT, 10);
    assert_eq!(REPOSITORY_LIMIT, 10);
}

#[tokio::test]
async fn test_commit_failure_skips_repositories() {
    let fake = Arc::new(FakeGitHub::failing_commits(502));
    let dashboard = Dashboard::new(fake.clone());

    let err = dashboard.get_dashboard_data("octocat").await.unwrap_err();

    assert!(matches!(err, DashboardError::ApiStatus(502)));
    assert_eq!(fake.commit_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fake.repository_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_repository_failure_discards_commits() {
    let fake = Arc::new(FakeGitHub::failing_repositories(
        vec![commit("c1", "octocat/a", 9)],
        401,
    ));
    let dashboard = Dashboard::new(fake.clone());

    let result = dashboard.get_dashboard_data("octocat").await;

    tokio_test::assert_err!(&result);
    assert_eq!(result.unwrap_err().status_code(), Some(401));
    assert_eq!(fake.total_calls(), 2);
}
