//! Markdown to HTML conversion, used to embed rendered Markdown inside literal
//! HTML table cells.
//!
//! The rendering model only depends on the [`HtmlConverter`] trait. The
//! default implementation is [`ComrakConverter`]; tests and callers with their
//! own engine can pass any `Fn(&str) -> String` instead.
//!
//! ```
//! use mdcompose::{HtmlConverter, HtmlOptions, ComrakConverter};
//!
//! let converter = ComrakConverter::new(HtmlOptions::default());
//! let html = converter.to_html("**bold**").unwrap_or_default();
//! assert!(html.contains("<strong>bold</strong>"));
//! ```
mod engine;
mod error;

use std::sync::{Arc, LazyLock};

pub use self::{
  engine::{ComrakConverter, HtmlOptions},
  error::{ConvertError, ConvertResult},
};

/// Converts a Markdown fragment to HTML.
pub trait HtmlConverter {
  /// Convert `markdown` into an HTML fragment.
  ///
  /// # Errors
  ///
  /// Returns an error if the underlying engine cannot produce output for the
  /// given input.
  fn to_html(&self, markdown: &str) -> ConvertResult<String>;
}

impl<F> HtmlConverter for F
where
  F: Fn(&str) -> String,
{
  fn to_html(&self, markdown: &str) -> ConvertResult<String> {
    Ok(self(markdown))
  }
}

/// A converter that can be shared between containers.
pub type SharedConverter = Arc<dyn HtmlConverter + Send + Sync>;

static DEFAULT_CONVERTER: LazyLock<Arc<ComrakConverter>> =
  LazyLock::new(|| Arc::new(ComrakConverter::default()));

/// The process-wide default converter: [`ComrakConverter`] with default
/// [`HtmlOptions`].
#[must_use]
pub fn default_converter() -> SharedConverter {
  Arc::clone(&DEFAULT_CONVERTER) as SharedConverter
}

/// HTML shown in place of a cell whose conversion failed: the original
/// Markdown, escaped, inside `<pre>`.
pub(crate) fn escaped_fallback(markdown: &str) -> String {
  format!("<pre>{}</pre>\n", html_escape::encode_text(markdown))
}
