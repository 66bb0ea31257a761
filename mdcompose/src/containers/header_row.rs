use std::{convert::Infallible, fmt, sync::Arc};

use log::{error, warn};

use super::child_api;
use crate::{
  html::{
    ConvertResult,
    HtmlConverter,
    SharedConverter,
    default_converter,
    escaped_fallback,
  },
  renderable::{Renderable, impl_display},
};

/// HTML table with a header row of labels and one data row of elements.
///
/// Data cells may hold arbitrary Markdown, including whole tables. Raw
/// Markdown inside an HTML table renders poorly in most processors, so each
/// cell is rendered and then passed through an [`HtmlConverter`] before being
/// embedded. Header labels are emitted literally.
///
/// The number of labels and the number of data cells are independent; a
/// mismatch produces a ragged table rather than an error.
pub struct HeaderRow {
  headers:   Vec<String>,
  cells:     Vec<Box<dyn Renderable>>,
  converter: SharedConverter,
}

impl HeaderRow {
  /// Create a header row converting cells with the default comrak converter.
  #[must_use]
  pub fn new<I, S>(headers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::with_shared_converter(default_converter(), headers)
  }

  /// Create a header row converting cells with `converter`.
  #[must_use]
  pub fn with_converter<C, I, S>(converter: C, headers: I) -> Self
  where
    C: HtmlConverter + Send + Sync + 'static,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::with_shared_converter(Arc::new(converter), headers)
  }

  /// Create a header row converting cells with an already shared converter.
  #[must_use]
  pub fn with_shared_converter<I, S>(
    converter: SharedConverter,
    headers: I,
  ) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      headers: headers.into_iter().map(Into::into).collect(),
      cells: Vec::new(),
      converter,
    }
  }

  /// Header labels, in column order.
  #[must_use]
  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  /// Render, failing on the first cell the converter rejects.
  ///
  /// [`Renderable::render`] never fails; it substitutes escaped Markdown for
  /// cells that could not be converted. Use this when a conversion failure
  /// should stop the caller instead.
  ///
  /// # Errors
  ///
  /// Returns the converter's error for the first failing cell.
  pub fn try_render(&self) -> ConvertResult<String> {
    let mut out = String::new();
    self.write_table(&mut out, |markdown| self.converter.to_html(markdown))?;
    Ok(out)
  }

  fn write_table<F, E>(&self, out: &mut String, mut convert: F) -> Result<(), E>
  where
    F: FnMut(&str) -> Result<String, E>,
  {
    if self.headers.len() != self.cells.len() {
      warn!(
        "Header row has {} labels but {} data cells; rendering ragged table",
        self.headers.len(),
        self.cells.len()
      );
    }

    out.push_str("<table>\n<thead>\n<tr>\n");
    for header in &self.headers {
      out.push_str("<th>\n\n");
      out.push_str(header);
      out.push_str("\n</th>\n");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n<tr>\n");

    for cell in &self.cells {
      let html = convert(&cell.render())?;
      out.push_str("<td>\n\n");
      out.push_str(&html);
      out.push_str("</td>\n");
    }
    out.push_str("</tr>\n</tbody>\n</table>\n");

    Ok(())
  }
}

child_api!(HeaderRow, cells);

impl Renderable for HeaderRow {
  fn render_into(&self, out: &mut String) {
    let Ok(()) = self.write_table(out, |markdown| {
      Ok::<_, Infallible>(self.converter.to_html(markdown).unwrap_or_else(
        |e| {
          error!("Failed to convert header row cell to HTML: {e}");
          escaped_fallback(markdown)
        },
      ))
    });
  }
}

impl fmt::Debug for HeaderRow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HeaderRow")
      .field("headers", &self.headers)
      .field("cells", &self.cells.len())
      .finish_non_exhaustive()
  }
}

impl_display!(HeaderRow);

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::{Bold, Table, Text, html::ConvertError};

  fn marker(markdown: &str) -> String {
    format!("[html]{markdown}[/html]")
  }

  #[test]
  fn test_layout_with_stub_converter() {
    let row = HeaderRow::with_converter(marker, ["One", "Two"])
      .with(Text::new("a"))
      .with(Bold::new("b"));

    assert_eq!(
      row.render(),
      "<table>\n<thead>\n<tr>\n<th>\n\nOne\n</th>\n<th>\n\nTwo\n</th>\n</tr>\n\
       </thead>\n<tbody>\n<tr>\n<td>\n\n[html]a[/html]</td>\n<td>\n\n\
       [html]**b**\n[/html]</td>\n</tr>\n</tbody>\n</table>\n"
    );
  }

  #[test]
  fn test_labels_are_literal() {
    let row = HeaderRow::with_converter(marker, ["**Table 1**"]);
    let rendered = row.render();
    assert!(rendered.contains("<th>\n\n**Table 1**\n</th>"));
    assert!(!rendered.contains("[html]"));
  }

  #[test]
  fn test_ragged_counts_render() {
    let row = HeaderRow::with_converter(marker, ["only"])
      .with(Text::new("x"))
      .with(Text::new("y"))
      .with(Text::new("z"));

    let rendered = row.render();
    assert_eq!(rendered.matches("<th>").count(), 1);
    assert_eq!(rendered.matches("<td>").count(), 3);

    let empty = HeaderRow::with_converter(marker, Vec::<String>::new());
    assert_eq!(
      empty.render(),
      "<table>\n<thead>\n<tr>\n</tr>\n</thead>\n<tbody>\n<tr>\n</tr>\n\
       </tbody>\n</table>\n"
    );
  }

  #[test]
  fn test_nested_table_is_converted() {
    let mut table = Table::new(["Field", "Value"]);
    table.add_row(["Name", "Test"]);

    let rendered = HeaderRow::new(["Table"]).with(table).render();
    assert!(rendered.contains("<th>Field</th>"));
    assert!(!rendered.contains("| Field | Value |"));
  }

  #[test]
  fn test_failed_conversion_degrades() {
    struct Failing;

    impl HtmlConverter for Failing {
      fn to_html(&self, _markdown: &str) -> ConvertResult<String> {
        Err(ConvertError::Rejected("no".to_string()))
      }
    }

    let row = HeaderRow::with_converter(Failing, ["h"]).with(Text::new("<x>"));

    assert!(row.render().contains("<td>\n\n<pre>&lt;x&gt;</pre>\n</td>"));
    assert!(matches!(row.try_render(), Err(ConvertError::Rejected(_))));
  }

  #[test]
  fn test_try_render_matches_render_on_success() {
    let row = HeaderRow::with_converter(marker, ["h"]).with(Text::new("t"));
    assert_eq!(row.try_render().expect("stub never fails"), row.render());
  }
}
