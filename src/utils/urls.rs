use chrono::{DateTime, Utc};
use url::Url;

use super::consts::{REDIRECT_SOURCE, TOKEN_QUERY_PARAM};

/// Pull the handoff token out of a page URL.
///
/// Returns the token together with the URL the address bar should show
/// afterwards: same path, same remaining query params, same fragment, no
/// `token` param. `None` when the URL carries no usable token.
pub fn take_token_param(url: &Url) -> Option<(String, Url)> {
    let (_, value) = url
        .query_pairs()
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)?;
    if value.is_empty() {
        return None;
    }
    let token = value.into_owned();

    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != TOKEN_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut cleaned = url.clone();
    if remaining.is_empty() {
        cleaned.set_query(None);
    } else {
        cleaned
            .query_pairs_mut()
            .clear()
            .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Some((token, cleaned))
}

/// Where an expelled session lands: the frontend's root route, tagged so
/// the landing page can explain what happened.
pub fn auth_failed_url(frontend_base: &Url) -> Url {
    let mut target = frontend_base.clone();
    target.set_fragment(Some(&format!("/?from={REDIRECT_SOURCE}&auth=failed")));
    target
}

/// Where an explicit logout lands. The `t` param makes every logout URL
/// unique so stale cached copies of the landing page are never served.
pub fn logout_url(frontend_base: &Url, at: DateTime<Utc>) -> Url {
    let mut target = frontend_base.clone();
    target.set_fragment(Some(&format!(
        "/?logout=true&from={REDIRECT_SOURCE}&t={}",
        at.timestamp_millis()
    )));
    target
}
