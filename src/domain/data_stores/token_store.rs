use super::TokenStoreError;

/// The persisted side of the session: one token under one well-known key.
/// The session guard is the only writer.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    async fn load_token(&self) -> Result<Option<String>, TokenStoreError>;
    async fn save_token(&mut self, token: String) -> Result<(), TokenStoreError>;
    async fn clear_token(&mut self) -> Result<(), TokenStoreError>;
}
