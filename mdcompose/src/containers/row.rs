use std::fmt;

use super::child_api;
use crate::renderable::{Renderable, impl_display};

/// Elements placed side by side in a single-row HTML table without a header.
///
/// Useful where Markdown table syntax is not enough, for example to put two
/// whole tables next to each other. Cells hold each child's raw render output;
/// the blank line after `<td>` lets Markdown processors treat the cell body as
/// Markdown.
#[derive(Default)]
pub struct Row {
  items: Vec<Box<dyn Renderable>>,
}

impl Row {
  /// Create an empty row.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

child_api!(Row, items);

impl Renderable for Row {
  fn render_into(&self, out: &mut String) {
    out.push_str("<table>\n<tr>\n");
    for item in &self.items {
      out.push_str("<td>\n\n");
      item.render_into(out);
      out.push_str("</td>\n");
    }
    out.push_str("</tr>\n</table>\n");
  }
}

impl FromIterator<Box<dyn Renderable>> for Row {
  fn from_iter<I: IntoIterator<Item = Box<dyn Renderable>>>(iter: I) -> Self {
    Self {
      items: iter.into_iter().collect(),
    }
  }
}

impl fmt::Debug for Row {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Row")
      .field("items", &self.items.len())
      .finish()
  }
}

impl_display!(Row);
