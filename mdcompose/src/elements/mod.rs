//! Leaf elements: text, headings, emphasis, code, quotes, dividers and lists.
mod list;
mod text;

pub use list::{List, OrderedList};
pub use text::{
  BlockQuote,
  Bold,
  Code,
  CodeBlock,
  DIVIDER,
  Divider,
  H1,
  H2,
  H3,
  Italic,
  Strikethrough,
  Text,
};
