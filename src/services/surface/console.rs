use log::{error, info, warn};
use url::Url;

use crate::domain::{Navigator, Notice, NoticeKind, Notifier};

/// Stands in for the browser when the session layer runs in a terminal.
/// Navigation becomes log lines and the "visible URL" is just a field.
pub struct ConsoleNavigator {
    current: Url,
}

impl ConsoleNavigator {
    pub fn new(current: Url) -> Self {
        Self { current }
    }
}

impl Navigator for ConsoleNavigator {
    fn current_url(&self) -> Url {
        self.current.clone()
    }

    fn replace_url(&mut self, url: &Url) {
        info!("address bar rewritten to {url}");
        self.current = url.clone();
    }

    fn assign(&mut self, url: &Url) {
        info!("navigating to {url}");
        self.current = url.clone();
    }

    fn replace(&mut self, url: &Url) {
        info!("navigating to {url}, replacing the current history entry");
        self.current = url.clone();
    }
}

/// Notices become log lines at the matching level.
#[derive(Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Info => info!("{}", notice.message),
            NoticeKind::Warning => warn!("{}", notice.message),
            NoticeKind::Error => error!("{}", notice.message),
        }
    }
}
