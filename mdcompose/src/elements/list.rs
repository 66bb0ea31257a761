//! Ordered and unordered lists.
use std::fmt::Write;

use crate::renderable::{Renderable, impl_display};

/// Numbered list, `1. item`. Numbering starts at one and follows input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OrderedList(Vec<String>);

/// Bulleted list, `- item`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct List(Vec<String>);

macro_rules! list_constructors {
  ($($name:ident),+) => {
    $(
      impl $name {
        /// Build a list from items in display order.
        #[must_use]
        pub fn new<I, S>(items: I) -> Self
        where
          I: IntoIterator<Item = S>,
          S: Into<String>,
        {
          Self(items.into_iter().map(Into::into).collect())
        }

        /// The items, in display order.
        #[must_use]
        pub fn items(&self) -> &[String] {
          &self.0
        }
      }

      impl<S: Into<String>> FromIterator<S> for $name {
        fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
          Self::new(iter)
        }
      }
    )+

    impl_display!($($name),+);
  };
}

list_constructors!(OrderedList, List);

impl Renderable for OrderedList {
  fn render_into(&self, out: &mut String) {
    for (i, item) in self.0.iter().enumerate() {
      // writing into a String cannot fail
      let _ = writeln!(out, "{}. {item}", i + 1);
    }
  }
}

impl Renderable for List {
  fn render_into(&self, out: &mut String) {
    for item in &self.0 {
      out.push_str("- ");
      out.push_str(item);
      out.push('\n');
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ordered_list() {
    assert_eq!(OrderedList::new(["a", "b"]).render(), "1. a\n2. b\n");
  }

  #[test]
  fn test_unordered_list() {
    assert_eq!(List::new(["a", "b"]).render(), "- a\n- b\n");
  }

  #[test]
  fn test_empty_lists_render_nothing() {
    assert_eq!(OrderedList::default().render(), "");
    assert_eq!(List::new(Vec::<String>::new()).render(), "");
  }

  #[test]
  fn test_numbering_past_nine() {
    let list: OrderedList = (1..=10).map(|i| format!("item {i}")).collect();
    let rendered = list.render();
    assert!(rendered.ends_with("10. item 10\n"));
    assert_eq!(rendered.lines().count(), 10);
  }
}
