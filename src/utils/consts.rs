// Well-known names shared across the session layer.

pub mod env {
    pub const API_BASE_URL_ENV_VAR: &str = "API_BASE_URL";
    pub const FRONTEND_BASE_URL_ENV_VAR: &str = "FRONTEND_BASE_URL";
    pub const REQUEST_TIMEOUT_SECONDS_ENV_VAR: &str = "REQUEST_TIMEOUT_SECONDS";
    pub const REDIRECT_NOTICE_DELAY_MS_ENV_VAR: &str = "REDIRECT_NOTICE_DELAY_MS";
    pub const LOGOUT_FALLBACK_DELAY_MS_ENV_VAR: &str = "LOGOUT_FALLBACK_DELAY_MS";
    pub const SESSION_STORE_PATH_ENV_VAR: &str = "SESSION_STORE_PATH";
}

// Key the raw token is persisted under, and the query parameter it arrives
// in when the login surface hands a visitor over.
pub const TOKEN_STORAGE_KEY: &str = "dashboard_token";
pub const TOKEN_QUERY_PARAM: &str = "token";

// Validation endpoints on the remote API.
pub const PROFILE_ENDPOINT: &str = "/api/user/profile";
pub const VERIFY_ENDPOINT: &str = "/api/auth/verify";

// `from=` tag the external frontend uses to attribute incoming redirects.
pub const REDIRECT_SOURCE: &str = "dashboard";

// Local-development defaults; every one can be overridden through the env
// vars above (see utils::config).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PAGE_URL: &str = "http://localhost:5173/dashboard";
pub const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_REDIRECT_NOTICE_DELAY_MS: u64 = 1_500;
pub const DEFAULT_LOGOUT_FALLBACK_DELAY_MS: u64 = 400;
pub const DEFAULT_SESSION_STORE_PATH: &str = ".dashboard_session.json";
