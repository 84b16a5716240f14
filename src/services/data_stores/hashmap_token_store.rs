use std::collections::HashMap;

use crate::domain::data_stores::{TokenStore, TokenStoreError};
use crate::utils::TOKEN_STORAGE_KEY;

/// In-memory stand-in for the browser's local storage. Backs tests and
/// embedders that do not want anything on disk.
#[derive(Default)]
pub struct HashmapTokenStore {
    entries: HashMap<String, String>,
}

impl HashmapTokenStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl TokenStore for HashmapTokenStore {
    async fn load_token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.entries.get(TOKEN_STORAGE_KEY).cloned())
    }

    async fn save_token(&mut self, token: String) -> Result<(), TokenStoreError> {
        self.entries.insert(TOKEN_STORAGE_KEY.to_owned(), token);
        Ok(())
    }

    async fn clear_token(&mut self) -> Result<(), TokenStoreError> {
        self.entries.remove(TOKEN_STORAGE_KEY);
        Ok(())
    }
}
