//! Error type shared by the binders and the browser adapter.

/// Error returned by binding operations and scorers.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A well-known element id was absent from the page or had the wrong element type.
    #[error("missing element: #{0}")]
    MissingElement(String),
    /// A scorer produced a value outside the closed range `0..=4`.
    #[error("invalid strength score: {0}")]
    InvalidScore(u8),
    /// The scorer itself failed to produce a result.
    #[error("scorer failed: {0}")]
    Scorer(String),
    /// The UI layer refused to register an event listener.
    #[error("failed to register listener: {0}")]
    Listener(String),
    /// Binder options could not be parsed.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}
