use url::Url;

/// The slice of the hosting surface's navigation the session layer drives.
/// In a browser this is the location bar and history; the console
/// implementation and the test doubles stand in for it elsewhere.
pub trait Navigator: Send + Sync {
    /// The URL currently shown to the user.
    fn current_url(&self) -> Url;

    /// Rewrite the visible URL in place, without navigating. Used to take
    /// the handoff token off the screen and out of history.
    fn replace_url(&mut self, url: &Url);

    /// Navigate, keeping the current entry in history.
    fn assign(&mut self, url: &Url);

    /// Navigate, replacing the current history entry so Back cannot return
    /// here.
    fn replace(&mut self, url: &Url);
}
