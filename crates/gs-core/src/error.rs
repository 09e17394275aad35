/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while reading or loading static content.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The tier is not a known rarity, or the catalog has no pool for it.
    #[error("unknown tier: {0}")]
    UnknownTier(String),

    /// The resource name is not a known resource kind.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// A catalog tier was declared without any items.
    #[error("tier '{0}' has no items")]
    EmptyTier(String),

    /// Two quest definitions share the same id.
    #[error("duplicate quest id: \"{0}\"")]
    DuplicateQuest(String),

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}
