use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Navigator, Notifier, SessionState, TokenStore};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type TokenStoreType = Arc<RwLock<dyn TokenStore>>;
pub type NavigatorType = Arc<RwLock<dyn Navigator>>;
pub type NotifierType = Arc<RwLock<dyn Notifier>>;
pub type ConfigType = Arc<RwLock<Config>>;
pub type SessionHandle = Arc<RwLock<SessionState>>;

/// Everything the session guard collaborates with, bundled so the binary
/// and the tests wire it up the same way.
#[derive(Clone)]
pub struct AppState {
    pub token_store: TokenStoreType,
    pub navigator: NavigatorType,
    pub notifier: NotifierType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        token_store: TokenStoreType,
        navigator: NavigatorType,
        notifier: NotifierType,
        config: ConfigType,
    ) -> Self {
        Self {
            token_store,
            navigator,
            notifier,
            config,
        }
    }
}
