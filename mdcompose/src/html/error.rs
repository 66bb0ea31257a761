//! Error types for Markdown to HTML conversion.

/// Result type for HTML conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors an [`HtmlConverter`](super::HtmlConverter) can report.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
  #[error("Failed to format HTML output: {0}")]
  Format(#[from] std::fmt::Error),
  #[error("Markdown engine panicked: {0}")]
  Panicked(String),
  #[error("Conversion rejected input: {0}")]
  Rejected(String),
}
