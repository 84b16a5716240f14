use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

use super::consts::{
    env::{
        API_BASE_URL_ENV_VAR, FRONTEND_BASE_URL_ENV_VAR, LOGOUT_FALLBACK_DELAY_MS_ENV_VAR,
        REDIRECT_NOTICE_DELAY_MS_ENV_VAR, REQUEST_TIMEOUT_SECONDS_ENV_VAR,
        SESSION_STORE_PATH_ENV_VAR,
    },
    DEFAULT_API_BASE_URL, DEFAULT_FRONTEND_BASE_URL, DEFAULT_LOGOUT_FALLBACK_DELAY_MS,
    DEFAULT_REDIRECT_NOTICE_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    DEFAULT_SESSION_STORE_PATH, PROFILE_ENDPOINT, VERIFY_ENDPOINT,
};

#[derive(Clone)]
pub struct Config {
    api_base: Url,
    frontend_base: Url,
    // Derived from api_base once, so request paths cannot fail at call sites.
    profile_endpoint: Url,
    verify_endpoint: Url,
    request_timeout: Duration,
    notice_delay: Duration,
    logout_fallback_delay: Duration,
    store_path: PathBuf,
}

impl Config {
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }
    pub fn frontend_base(&self) -> &Url {
        &self.frontend_base
    }
    pub fn profile_endpoint(&self) -> &Url {
        &self.profile_endpoint
    }
    pub fn verify_endpoint(&self) -> &Url {
        &self.verify_endpoint
    }
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
    pub fn notice_delay(&self) -> Duration {
        self.notice_delay
    }
    pub fn logout_fallback_delay(&self) -> Duration {
        self.logout_fallback_delay
    }
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Build from the environment. Every value has a local-development
    /// default, so a missing variable is never an error; a present but
    /// unparseable one is.
    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let api_base = url_var(API_BASE_URL_ENV_VAR, DEFAULT_API_BASE_URL)?;
        let frontend_base = url_var(FRONTEND_BASE_URL_ENV_VAR, DEFAULT_FRONTEND_BASE_URL)?;

        let request_timeout = Duration::from_secs(u64_var(
            REQUEST_TIMEOUT_SECONDS_ENV_VAR,
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?);
        let notice_delay = Duration::from_millis(u64_var(
            REDIRECT_NOTICE_DELAY_MS_ENV_VAR,
            DEFAULT_REDIRECT_NOTICE_DELAY_MS,
        )?);
        let logout_fallback_delay = Duration::from_millis(u64_var(
            LOGOUT_FALLBACK_DELAY_MS_ENV_VAR,
            DEFAULT_LOGOUT_FALLBACK_DELAY_MS,
        )?);

        let store_path = opt_var(SESSION_STORE_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_STORE_PATH));

        Self::build(
            api_base,
            frontend_base,
            request_timeout,
            notice_delay,
            logout_fallback_delay,
            store_path,
        )
    }

    /// Programmatic construction for embedders and tests; delays and
    /// timeout start at the documented defaults. Fails when the API base
    /// cannot carry the endpoint paths (a cannot-be-a-base URL).
    pub fn for_base_urls(api_base: Url, frontend_base: Url) -> Result<Self, ConfigError> {
        Self::build(
            api_base,
            frontend_base,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            Duration::from_millis(DEFAULT_REDIRECT_NOTICE_DELAY_MS),
            Duration::from_millis(DEFAULT_LOGOUT_FALLBACK_DELAY_MS),
            PathBuf::from(DEFAULT_SESSION_STORE_PATH),
        )
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_notice_delay(mut self, delay: Duration) -> Self {
        self.notice_delay = delay;
        self
    }

    pub fn with_logout_fallback_delay(mut self, delay: Duration) -> Self {
        self.logout_fallback_delay = delay;
        self
    }

    fn build(
        api_base: Url,
        frontend_base: Url,
        request_timeout: Duration,
        notice_delay: Duration,
        logout_fallback_delay: Duration,
        store_path: PathBuf,
    ) -> Result<Self, ConfigError> {
        let profile_endpoint = api_base
            .join(PROFILE_ENDPOINT)
            .map_err(|_| ConfigError::Invalid(API_BASE_URL_ENV_VAR))?;
        let verify_endpoint = api_base
            .join(VERIFY_ENDPOINT)
            .map_err(|_| ConfigError::Invalid(API_BASE_URL_ENV_VAR))?;

        Ok(Self {
            api_base,
            frontend_base,
            profile_endpoint,
            verify_endpoint,
            request_timeout,
            notice_delay,
            logout_fallback_delay,
            store_path,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value in env var {0}")]
    Invalid(&'static str),
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn url_var(key: &'static str, default: &str) -> Result<Url, ConfigError> {
    match opt_var(key) {
        Some(raw) => Url::parse(&raw).map_err(|_| ConfigError::Invalid(key)),
        None => Ok(Url::parse(default).expect("default URL is well-formed")),
    }
}

fn u64_var(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match opt_var(key) {
        Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
