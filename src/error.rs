/// Errors returned by tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Zero-length keys have no first byte to label an edge with, so they are refused rather
    /// than stored at the root.
    #[error("cannot insert an empty key")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, TreeError>;
