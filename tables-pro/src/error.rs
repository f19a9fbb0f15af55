//! Error types for page setup.

/// Errors raised while loading or initializing a page.
///
/// Event handling itself never fails: a missing optional element means the
/// feature is absent, and fetch failures belong to the [`Remote`](crate::Remote).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A control the feature cannot run without is not in the document.
    #[error("required control missing: #{0}")]
    MissingControl(String),

    /// The embedded breakpoint data is not valid JSON of the expected shape.
    #[error("invalid breakpoint data: {0}")]
    Breakpoints(#[from] serde_json::Error),

    /// The page location could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An element a handler was pointed at no longer exists.
    #[error("unknown element: #{0}")]
    UnknownElement(String),
}
