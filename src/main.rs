use dashboard_session::app_state::AppState;
use dashboard_session::domain::SessionOutcome;
use dashboard_session::services::{
    ConsoleNavigator, ConsoleNotifier, FileTokenStore, SessionGuard,
};
use dashboard_session::utils::consts::DEFAULT_PAGE_URL;
use dashboard_session::utils::Config;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

// Smoke-checks a deployment from a terminal: resolves one session against
// the configured API, exactly the way the dashboard would on page load.
// Pass a page URL as the first argument to exercise the ?token= handoff.
#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(RwLock::new(
        Config::default().expect("Failed to load config"),
    ));
    let page_url = match std::env::args().nth(1) {
        Some(raw) => Url::parse(&raw).expect("Failed to parse the page URL argument"),
        None => Url::parse(DEFAULT_PAGE_URL).expect("Failed to parse the default page URL"),
    };

    let store_path = config.read().await.store_path().to_path_buf();
    let token_store = Arc::new(RwLock::new(FileTokenStore::new(store_path)));
    let navigator = Arc::new(RwLock::new(ConsoleNavigator::new(page_url)));
    let notifier = Arc::new(RwLock::new(ConsoleNotifier::default()));

    let app_state = AppState::new(token_store, navigator, notifier, config);
    let guard = SessionGuard::new(app_state);

    match guard.resolve_session().await {
        SessionOutcome::Authenticated { subject_id } => match subject_id {
            Some(subject_id) => println!("session valid for subject {subject_id}"),
            None => println!("session valid, subject unknown"),
        },
        SessionOutcome::Unauthenticated { reason } => println!("session invalid: {reason:?}"),
    }
}
