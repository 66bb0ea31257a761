//! `comrak`-backed [`HtmlConverter`].
use std::sync::LazyLock;

use comrak::{Arena, options::Options, parse_document};
use log::{error, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ConvertError, ConvertResult, HtmlConverter};

/// Options for the comrak conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct HtmlOptions {
  /// Enable GitHub Flavored Markdown: tables, strikethrough, autolinks, task
  /// lists and footnotes.
  pub gfm: bool,

  /// Generate `id` anchors for headings.
  pub heading_ids: bool,

  /// Open absolute `http(s)` links in a new browsing context
  /// (`target="_blank"`).
  pub external_links_new_tab: bool,

  /// Pass raw HTML in the input through instead of stripping it.
  pub unsafe_html: bool,

  /// Render soft line breaks as `<br />`.
  pub hard_breaks: bool,
}

impl Default for HtmlOptions {
  fn default() -> Self {
    Self {
      gfm:                    true,
      heading_ids:            true,
      external_links_new_tab: true,
      unsafe_html:            true,
      hard_breaks:            false,
    }
  }
}

/// Converts Markdown to HTML with `comrak`.
///
/// Panics raised by the engine are caught and reported as
/// [`ConvertError::Panicked`] so one bad cell cannot take the whole document
/// down.
#[derive(Debug, Clone, Default)]
pub struct ComrakConverter {
  options: HtmlOptions,
}

impl ComrakConverter {
  /// Create a converter with the given options.
  #[must_use]
  pub const fn new(options: HtmlOptions) -> Self {
    Self { options }
  }

  /// Access converter options.
  #[must_use]
  pub const fn options(&self) -> &HtmlOptions {
    &self.options
  }

  /// Build comrak options from [`HtmlOptions`].
  fn comrak_options(&self) -> Options<'static> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.autolink = true;
      options.extension.tasklist = true;
      options.extension.footnotes = true;
    }
    options.extension.header_ids =
      self.options.heading_ids.then(String::new);
    options.render.r#unsafe = self.options.unsafe_html;
    options.render.hardbreaks = self.options.hard_breaks;
    options
  }

  fn convert(&self, markdown: &str) -> ConvertResult<String> {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut html = String::new();
    comrak::format_html(root, &options, &mut html)?;

    if self.options.external_links_new_tab {
      html = open_external_links_in_new_tab(&html);
    }

    Ok(html)
  }
}

impl HtmlConverter for ComrakConverter {
  fn to_html(&self, markdown: &str) -> ConvertResult<String> {
    if markdown.is_empty() {
      return Ok(String::new());
    }

    trace!("Converting {} bytes of Markdown to HTML", markdown.len());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      self.convert(markdown)
    }));

    match result {
      Ok(converted) => converted,
      Err(e) => {
        let message = e
          .downcast_ref::<String>()
          .cloned()
          .or_else(|| e.downcast_ref::<&str>().map(|s| (*s).to_string()))
          .unwrap_or_else(|| "unknown panic payload".to_string());
        error!("Panic during Markdown to HTML conversion: {message}");
        Err(ConvertError::Panicked(message))
      },
    }
  }
}

/// Add `target="_blank"` to anchors pointing at absolute `http(s)` URLs.
fn open_external_links_in_new_tab(html: &str) -> String {
  static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="(https?://[^"]*)""#).unwrap_or_else(|e| {
      error!("Failed to compile EXTERNAL_LINK_RE regex: {e}");
      never_matching_regex()
    })
  });

  EXTERNAL_LINK_RE
    .replace_all(html, r#"<a href="$1" target="_blank""#)
    .into_owned()
}

#[allow(
  clippy::expect_used,
  reason = "This pattern is guaranteed to be valid"
)]
fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  fn convert(markdown: &str) -> String {
    ComrakConverter::default()
      .to_html(markdown)
      .expect("conversion should succeed")
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(convert(""), "");
  }

  #[test]
  fn test_pipe_table_becomes_html_table() {
    let html = convert("| Field | Value |\n| ----- | ----- |\n| Name | Test |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<th>Field</th>"));
    assert!(html.contains("<td>Name</td>"));
    assert!(!html.contains("| Field |"));
  }

  #[test]
  fn test_tables_disabled_without_gfm() {
    let converter = ComrakConverter::new(HtmlOptions {
      gfm: false,
      ..HtmlOptions::default()
    });
    let html = converter
      .to_html("| a | b |\n| - | - |\n| 1 | 2 |\n")
      .expect("conversion should succeed");
    assert!(!html.contains("<table>"));
  }

  #[test]
  fn test_strikethrough() {
    assert!(convert("~~gone~~").contains("<del>gone</del>"));
  }

  #[test]
  fn test_heading_ids() {
    let html = convert("# Hello World\n");
    assert!(html.contains("id=\"hello-world\""));

    let plain = ComrakConverter::new(HtmlOptions {
      heading_ids: false,
      ..HtmlOptions::default()
    })
    .to_html("# Hello World\n")
    .expect("conversion should succeed");
    assert!(plain.contains("<h1>Hello World</h1>"));
  }

  #[test]
  fn test_external_links_open_in_new_tab() {
    let html = convert("[site](https://example.com) and [local](page.html)");
    assert!(
      html.contains(r#"<a href="https://example.com" target="_blank">site</a>"#)
    );
    assert!(html.contains(r#"<a href="page.html">local</a>"#));
  }

  #[test]
  fn test_external_links_untouched_when_disabled() {
    let converter = ComrakConverter::new(HtmlOptions {
      external_links_new_tab: false,
      ..HtmlOptions::default()
    });
    let html = converter
      .to_html("[site](https://example.com)")
      .expect("conversion should succeed");
    assert!(!html.contains("target="));
  }

  #[test]
  fn test_raw_html_passthrough() {
    assert!(convert("<table>\n<tr><td>x</td></tr>\n</table>\n").contains(
      "<tr><td>x</td></tr>"
    ));
  }

  #[test]
  fn test_options_deserialize_with_defaults() {
    let options: HtmlOptions =
      toml::from_str("hard_breaks = true").expect("valid toml");
    assert!(options.hard_breaks);
    assert!(options.gfm);
    assert_eq!(
      HtmlOptions {
        hard_breaks: false,
        ..options
      },
      HtmlOptions::default()
    );
  }
}
