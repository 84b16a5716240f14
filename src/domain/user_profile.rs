use serde::Deserialize;

/// Subset of the profile payload the session layer reads. Every field is
/// optional: a 2xx from the profile endpoint is the validity signal, the
/// body is informational only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}
