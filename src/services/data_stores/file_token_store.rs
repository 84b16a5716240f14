use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::data_stores::{TokenStore, TokenStoreError};
use crate::utils::TOKEN_STORAGE_KEY;

// Small helper to shorten store error mapping
fn read_err<E: ToString>(e: E) -> TokenStoreError {
    TokenStoreError::ReadFailed(e.to_string())
}

fn write_err<E: ToString>(e: E) -> TokenStoreError {
    TokenStoreError::WriteFailed(e.to_string())
}

/// Single-file JSON store used when the session layer runs outside a
/// browser. Keeps the same key-value shape as the in-memory store so the
/// two are interchangeable behind the trait.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // A missing file is just an empty store; a file we cannot read or
    // parse is an error the caller decides about.
    async fn read_entries(&self) -> Result<HashMap<String, String>, TokenStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(read_err),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(read_err(e)),
        }
    }

    async fn write_entries(
        &self,
        entries: &HashMap<String, String>,
    ) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(entries).map_err(write_err)?;
        tokio::fs::write(&self.path, bytes).await.map_err(write_err)
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn load_token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_entries().await?.get(TOKEN_STORAGE_KEY).cloned())
    }

    async fn save_token(&mut self, token: String) -> Result<(), TokenStoreError> {
        // A corrupt file is overwritten rather than kept.
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.insert(TOKEN_STORAGE_KEY.to_owned(), token);
        self.write_entries(&entries).await
    }

    async fn clear_token(&mut self) -> Result<(), TokenStoreError> {
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.remove(TOKEN_STORAGE_KEY);
        self.write_entries(&entries).await
    }
}
