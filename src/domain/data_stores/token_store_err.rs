use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenStoreError {
    #[error("could not read the persisted session: {0}")]
    ReadFailed(String),

    #[error("could not write the persisted session: {0}")]
    WriteFailed(String),
}
