use log::debug;

use crate::app_state::ConfigType;
use crate::domain::UserProfile;
use crate::errors::ApiError;

/// Thin client for the two validation probes the session layer performs.
///
/// One `reqwest::Client` is shared across calls; the endpoint URLs and the
/// per-request timeout come from the live config on every call, so an
/// embedder can retune them without rebuilding the client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    cfg: ConfigType,
}

impl ApiClient {
    pub fn new(cfg: ConfigType) -> Self {
        Self {
            http: reqwest::Client::new(),
            cfg,
        }
    }

    /// Primary probe, `GET /api/user/profile`. A 2xx answer is the validity
    /// signal; the body is decoded leniently and an unreadable one still
    /// counts as success.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let (endpoint, timeout) = {
            let config = self.cfg.read().await;
            (config.profile_endpoint().clone(), config.request_timeout())
        };

        let response = self
            .http
            .get(endpoint)
            .bearer_auth(token)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        debug!("profile probe answered {status}");
        if !status.is_success() {
            return Err(ApiError::Rejected(status));
        }

        Ok(response.json::<UserProfile>().await.unwrap_or_default())
    }

    /// Fallback probe, `GET /api/auth/verify`. Status only.
    pub async fn verify_token(&self, token: &str) -> Result<(), ApiError> {
        let (endpoint, timeout) = {
            let config = self.cfg.read().await;
            (config.verify_endpoint().clone(), config.request_timeout())
        };

        let response = self
            .http
            .get(endpoint)
            .bearer_auth(token)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        debug!("verify probe answered {status}");
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected(status))
        }
    }
}
