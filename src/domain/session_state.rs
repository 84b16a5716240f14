/// What the rendering surface sees of the session at any moment.
///
/// Exactly one of three shapes is ever visible: still checking, signed in
/// (possibly without a readable subject), or signed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub subject_id: Option<String>,
}

impl SessionState {
    pub fn checking() -> Self {
        Self {
            is_loading: true,
            is_authenticated: false,
            subject_id: None,
        }
    }

    pub fn authenticated(subject_id: Option<String>) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            subject_id,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            is_loading: false,
            is_authenticated: false,
            subject_id: None,
        }
    }
}

impl Default for SessionState {
    // A fresh page starts out checking, never flashing "signed out".
    fn default() -> Self {
        Self::checking()
    }
}
