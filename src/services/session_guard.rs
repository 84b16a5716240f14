use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::app_state::{AppState, SessionHandle};
use crate::domain::{ExpulsionReason, Notice, SessionOutcome, SessionState};
use crate::services::ApiClient;
use crate::utils::auth::decode_unverified;
use crate::utils::urls::{auth_failed_url, logout_url, take_token_param};

#[derive(Clone)]
/// Gatekeeper for the dashboard session.
///
/// One resolution pass covers the whole lifecycle:
/// 1. Acquire a token: a `token` query parameter on the visible URL wins,
///    is persisted and then stripped from the address bar; otherwise the
///    persisted store is consulted.
/// 2. Local fast path: claims are read without signature verification, and
///    a token that is already past its own expiry is purged without a
///    network round trip.
/// 3. Remote validation: profile probe first, verify probe as the single
///    fallback, strictly one after the other. The backend is the authority;
///    the local decode never admits anyone on its own.
/// 4. Identity comes from the `sub` claim. Losing it degrades the session
///    to an anonymous-but-authenticated one, it never revokes it.
/// 5. Any unauthenticated conclusion expels the user to the frontend login
///    surface, keeping the notice on screen long enough to be read.
///
/// Store failures never abort a pass: a failed read degrades to "no token",
/// a failed write keeps the in-memory token for the rest of the pass, both
/// leave a log line.
///
/// The guard is the single writer of its `SessionHandle`; the rendering
/// surface only reads it. `resolve_session` may be called again on the same
/// guard (fresh page load, or a new token arriving on a loaded page); every
/// pass restarts from the loading state.
pub struct SessionGuard {
    state: AppState,
    api: ApiClient,
    session: SessionHandle,
}

impl SessionGuard {
    pub fn new(state: AppState) -> Self {
        let api = ApiClient::new(state.config.clone());
        Self {
            state,
            api,
            session: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Read side of the session for the rendering surface.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Run one full resolution pass and return how it concluded. All side
    /// effects (store writes, URL rewrite, notices, redirects) have already
    /// happened by the time this returns.
    pub async fn resolve_session(&self) -> SessionOutcome {
        {
            let mut session = self.session.write().await;
            *session = SessionState::checking();
        }

        let token = match self.acquire_token().await {
            Some(token) => token,
            None => return self.expel(ExpulsionReason::MissingToken).await,
        };

        // Local fast path: a readable token that is already expired never
        // reaches the network.
        let claims = match decode_unverified(&token) {
            Ok(claims) => {
                if claims.is_expired() {
                    info!("token is past its expiry, skipping remote validation");
                    self.purge_token().await;
                    return self.expel(ExpulsionReason::ExpiredToken).await;
                }
                Some(claims)
            }
            Err(err) => {
                warn!("token claims are unreadable, deferring to the API: {err}");
                None
            }
        };

        if !self.validate_remotely(&token).await {
            self.purge_token().await;
            return self.expel(ExpulsionReason::RejectedToken).await;
        }

        let subject_id = claims.and_then(|claims| claims.sub);
        if subject_id.is_none() {
            warn!("session is valid but carries no readable subject");
            self.notify(Notice::warning(
                "Signed in, but your user identity could not be read.",
            ))
            .await;
        }

        {
            let mut session = self.session.write().await;
            *session = SessionState::authenticated(subject_id.clone());
        }

        SessionOutcome::Authenticated { subject_id }
    }

    /// Explicit logout. Purges the stored token, then leaves through a
    /// history-replacing navigation so Back cannot land on the
    /// authenticated view again. If the visible URL still has not changed
    /// after the fallback delay, a plain navigation is issued instead.
    pub async fn logout(&self) {
        info!("logging out");
        self.purge_token().await;

        {
            let mut session = self.session.write().await;
            *session = SessionState::unauthenticated();
        }

        let (frontend_base, fallback_delay) = {
            let config = self.state.config.read().await;
            (config.frontend_base().clone(), config.logout_fallback_delay())
        };

        let target = logout_url(&frontend_base, Utc::now());

        self.notify(Notice::info("You have been logged out.")).await;

        {
            let mut navigator = self.state.navigator.write().await;
            navigator.replace(&target);
        }

        tokio::time::sleep(fallback_delay).await;

        let still_here = {
            let navigator = self.state.navigator.read().await;
            navigator.current_url() != target
        };
        if still_here {
            warn!("history-replacing navigation did not take, assigning directly");
            let mut navigator = self.state.navigator.write().await;
            navigator.assign(&target);
        }
    }

    // A token on the URL wins over the persisted one and is persisted in
    // its place; the address bar is rewritten so the token is not left on
    // screen or in history.
    async fn acquire_token(&self) -> Option<String> {
        let current = {
            let navigator = self.state.navigator.read().await;
            navigator.current_url()
        };

        if let Some((token, cleaned)) = take_token_param(&current) {
            debug!("token handed over via URL");
            let saved = {
                let mut store = self.state.token_store.write().await;
                store.save_token(token.clone()).await
            };
            if let Err(err) = saved {
                warn!("could not persist the handed-over token: {err}");
            }
            {
                let mut navigator = self.state.navigator.write().await;
                navigator.replace_url(&cleaned);
            }
            return Some(token);
        }

        let stored = {
            let store = self.state.token_store.read().await;
            store.load_token().await
        };
        match stored {
            Ok(token) => token,
            Err(err) => {
                warn!("could not read the persisted token: {err}");
                None
            }
        }
    }

    // Profile probe first; on any failure exactly one fallback through the
    // verify endpoint. Never concurrent, never retried further.
    async fn validate_remotely(&self, token: &str) -> bool {
        match self.api.fetch_profile(token).await {
            Ok(profile) => {
                match profile.email {
                    Some(email) => debug!("profile probe confirmed the session for {email}"),
                    None => debug!("profile probe confirmed the session"),
                }
                true
            }
            Err(err) => {
                info!("profile probe failed, trying the verify endpoint: {err}");
                match self.api.verify_token(token).await {
                    Ok(()) => true,
                    Err(err) => {
                        warn!("verify probe failed as well: {err}");
                        false
                    }
                }
            }
        }
    }

    // Terminal failure path: state first so the surface never shows an
    // ambiguous session, then the notice, then the redirect. Expired and
    // rejected tokens keep the notice on screen for the configured delay;
    // a visitor with no token at all is redirected immediately.
    async fn expel(&self, reason: ExpulsionReason) -> SessionOutcome {
        {
            let mut session = self.session.write().await;
            *session = SessionState::unauthenticated();
        }

        let (frontend_base, notice_delay) = {
            let config = self.state.config.read().await;
            (config.frontend_base().clone(), config.notice_delay())
        };

        let (message, delay) = match reason {
            ExpulsionReason::MissingToken => ("Please log in to access the dashboard.", None),
            ExpulsionReason::ExpiredToken => (
                "Your session has expired. Please log in again.",
                Some(notice_delay),
            ),
            ExpulsionReason::RejectedToken => (
                "Your session could not be verified. Please log in again.",
                Some(notice_delay),
            ),
        };

        self.notify(Notice::error(message)).await;

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let target = auth_failed_url(&frontend_base);
        info!("session concluded unauthenticated ({reason:?}), leaving for the login surface");
        {
            let mut navigator = self.state.navigator.write().await;
            navigator.assign(&target);
        }

        SessionOutcome::Unauthenticated { reason }
    }

    async fn purge_token(&self) {
        let cleared = {
            let mut store = self.state.token_store.write().await;
            store.clear_token().await
        };
        if let Err(err) = cleared {
            warn!("could not clear the persisted token: {err}");
        }
    }

    async fn notify(&self, notice: Notice) {
        let mut notifier = self.state.notifier.write().await;
        notifier.notify(notice);
    }
}
