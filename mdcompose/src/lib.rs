//! # mdcompose - composable Markdown documents
//!
//! Build a document as a tree of typed elements and render it to Markdown
//! with one call. Leaf elements wrap text (headings, emphasis, code, quotes,
//! lists); containers ([`Column`], [`Row`], [`HeaderRow`], [`Table`]) hold
//! other elements, including other containers.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdcompose::{Bold, Column, H1, Renderable, Table};
//!
//! let mut table = Table::new(["Field", "Value"]);
//! table.add_row(["Name", "Test"]);
//!
//! let mut doc = Column::new();
//! doc.add(H1::new("Report")).add(Bold::new("Summary")).add(table);
//!
//! assert_eq!(
//!   doc.render(),
//!   "# Report\n\n**Summary**\n\n| Field | Value |\n| ----- | ----- |\n| Name \
//!    | Test |\n\n"
//! );
//! ```
//!
//! ## Nested tables
//!
//! Markdown cannot nest tables. [`Row`] places elements side by side in a
//! literal HTML table, and [`HeaderRow`] adds a header row while converting
//! each cell to HTML first, through an [`HtmlConverter`]. The default
//! converter is [`ComrakConverter`]; any `Fn(&str) -> String` works as well.
//!
//! ```rust
//! use mdcompose::{HeaderRow, Renderable, Text};
//!
//! let identity = |markdown: &str| markdown.to_string();
//! let row = HeaderRow::with_converter(identity, ["Left"]).with(Text::new("x"));
//! assert!(row.render().contains("<td>\n\nx</td>"));
//! ```
//!
//! Rendering never fails. Ragged tables and mismatched header rows render as
//! visibly ragged output so there is always something to inspect.

mod containers;
mod elements;
pub mod html;
mod renderable;
mod table;

pub use crate::{
  containers::{Column, HeaderRow, Row},
  elements::{
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
    List,
    OrderedList,
    Strikethrough,
    Text,
  },
  html::{
    ComrakConverter,
    ConvertError,
    ConvertResult,
    HtmlConverter,
    HtmlOptions,
    SharedConverter,
  },
  renderable::Renderable,
  table::Table,
};
