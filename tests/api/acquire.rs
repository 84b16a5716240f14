use std::sync::Arc;

use tokio::sync::RwLock;

use crate::helpers::{
    get_random_subject, mint_token, ApiScript, FailingTokenStore, TestApp,
};
use dashboard_session::domain::{ExpulsionReason, NoticeKind, SessionOutcome};

#[tokio::test]
async fn should_adopt_a_token_handed_over_in_the_url() {
    let subject = get_random_subject();
    let token = mint_token(&subject, 3_600);
    let app = TestApp::new(ApiScript::accepting(&token)).await;
    app.seed_token("stale-token").await;
    app.open_page(&format!(
        "http://dashboard.test/views?token={token}&tab=reports#summary"
    ))
    .await;

    let outcome = app.guard.resolve_session().await;

    assert_eq!(
        SessionOutcome::Authenticated {
            subject_id: Some(subject)
        },
        outcome
    );
    // The handed-over token replaced the stale one in the store.
    assert_eq!(Some(token), app.stored_token().await);

    // The address bar lost the token but kept everything else.
    let navigator = app.navigator.read().await;
    assert_eq!(1, navigator.rewrites.len());
    assert_eq!(
        "http://dashboard.test/views?tab=reports#summary",
        navigator.rewrites[0].as_str()
    );
    assert_eq!(
        "http://dashboard.test/views?tab=reports#summary",
        navigator.current.as_str()
    );
}

#[tokio::test]
async fn should_strip_every_token_pair_from_the_visible_url() {
    let subject = get_random_subject();
    let token = mint_token(&subject, 3_600);
    let app = TestApp::new(ApiScript::accepting(&token)).await;
    app.open_page(&format!(
        "http://dashboard.test/views?token={token}&tab=reports&token=duplicate#summary"
    ))
    .await;

    let outcome = app.guard.resolve_session().await;

    assert!(matches!(outcome, SessionOutcome::Authenticated { .. }));
    assert_eq!(
        "http://dashboard.test/views?tab=reports#summary",
        app.current_url().await.as_str()
    );
}

#[tokio::test]
async fn should_purge_an_expired_token_handed_over_in_the_url() {
    let subject = get_random_subject();
    let token = mint_token(&subject, -10);
    // The API would accept it; the expiry check must fire first.
    let app = TestApp::new(ApiScript::accepting(&token)).await;
    app.open_page(&format!("http://dashboard.test/views?token={token}")).await;

    let outcome = app.guard.resolve_session().await;

    assert_eq!(
        SessionOutcome::Unauthenticated {
            reason: ExpulsionReason::ExpiredToken
        },
        outcome
    );
    // Persisted on arrival, purged by the expiry check.
    assert_eq!(None, app.stored_token().await);
    assert_eq!(0, app.profile_call_count());
    assert_eq!(0, app.verify_call_count());

    let navigator = app.navigator.read().await;
    assert_eq!(1, navigator.rewrites.len());
    assert_eq!("http://dashboard.test/views", navigator.rewrites[0].as_str());
    assert_eq!(
        "http://frontend.test/#/?from=dashboard&auth=failed",
        navigator.assigned[0].as_str()
    );
}

#[tokio::test]
async fn should_degrade_to_no_token_when_the_store_cannot_be_read() {
    let app = TestApp::with_store(
        ApiScript::rejecting(),
        Arc::new(RwLock::new(FailingTokenStore)),
    )
    .await;

    let outcome = app.guard.resolve_session().await;

    assert_eq!(
        SessionOutcome::Unauthenticated {
            reason: ExpulsionReason::MissingToken
        },
        outcome
    );
    assert_eq!(0, app.profile_call_count());
    assert_eq!(0, app.verify_call_count());
    assert!(app.notices().await.iter().any(|n| n.kind == NoticeKind::Error));
}

#[tokio::test]
async fn should_authenticate_with_the_url_token_even_if_persisting_fails() {
    let subject = get_random_subject();
    let token = mint_token(&subject, 3_600);
    let app = TestApp::with_store(
        ApiScript::accepting(&token),
        Arc::new(RwLock::new(FailingTokenStore)),
    )
    .await;
    app.open_page(&format!("http://dashboard.test/?token={token}")).await;

    let outcome = app.guard.resolve_session().await;

    // The store write failed, the in-memory token still authenticates.
    assert_eq!(
        SessionOutcome::Authenticated {
            subject_id: Some(subject)
        },
        outcome
    );
    assert_eq!(1, app.profile_call_count());
    assert_eq!("http://dashboard.test/", app.current_url().await.as_str());
}
