use std::fmt;

use super::child_api;
use crate::renderable::{Renderable, impl_display};

/// Vertical stack of elements.
///
/// Each child is rendered in insertion order and followed by one extra
/// newline, which leaves a blank line between blocks in the document.
///
/// ```
/// use mdcompose::{Bold, Column, H1, Renderable};
///
/// let mut column = Column::new();
/// column.add(H1::new("Title")).add(Bold::new("body"));
/// assert_eq!(column.render(), "# Title\n\n**body**\n\n");
/// ```
#[derive(Default)]
pub struct Column {
  items: Vec<Box<dyn Renderable>>,
}

impl Column {
  /// Create an empty column.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

child_api!(Column, items);

impl Renderable for Column {
  fn render_into(&self, out: &mut String) {
    for item in &self.items {
      item.render_into(out);
      out.push('\n');
    }
  }
}

impl FromIterator<Box<dyn Renderable>> for Column {
  fn from_iter<I: IntoIterator<Item = Box<dyn Renderable>>>(iter: I) -> Self {
    Self {
      items: iter.into_iter().collect(),
    }
  }
}

impl fmt::Debug for Column {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Column")
      .field("items", &self.items.len())
      .finish()
  }
}

impl_display!(Column);
