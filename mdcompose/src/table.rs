//! Markdown pipe tables.
use std::fmt::Display;

use log::{debug, warn};

use crate::renderable::{Renderable, impl_display};

/// A Markdown pipe table with fixed column labels and a growing list of rows.
///
/// Rows shorter than the header are padded with empty cells when rendered.
/// Longer rows are emitted as they are, without truncation, so their extra
/// cells spill past the header. Cell content is not escaped.
///
/// ```
/// use mdcompose::{Renderable, Table};
///
/// let mut table = Table::new(["Field", "Value"]);
/// table.add_row(["Name", "Test"]).add_row(["Hello"]);
///
/// assert_eq!(
///   table.render(),
///   "| Field | Value |\n| ----- | ----- |\n| Name | Test |\n| Hello |  |\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
  columns: Vec<String>,
  rows:    Vec<Vec<String>>,
}

impl Table {
  /// Create a table with the given column labels and no rows.
  #[must_use]
  pub fn new<I, S>(columns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      columns: columns.into_iter().map(Into::into).collect(),
      rows:    Vec::new(),
    }
  }

  /// Column labels.
  #[must_use]
  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  /// Stored rows, exactly as they were added.
  #[must_use]
  pub fn rows(&self) -> &[Vec<String>] {
    &self.rows
  }

  /// Append several rows. Returns `self` for chaining.
  pub fn add<R, C, S>(&mut self, rows: R) -> &mut Self
  where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.rows.extend(
      rows
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect()),
    );
    self
  }

  /// Append one row. Returns `self` for chaining.
  pub fn add_row<C, S>(&mut self, cells: C) -> &mut Self
  where
    C: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.rows.push(cells.into_iter().map(Into::into).collect());
    self
  }

  /// Append several rows of arbitrary values, formatting each cell with
  /// [`Display`].
  pub fn add_any(&mut self, rows: &[&[&dyn Display]]) -> &mut Self {
    for row in rows {
      self.add_row_any(row);
    }
    self
  }

  /// Append one row of arbitrary values, formatting each cell with
  /// [`Display`].
  pub fn add_row_any(&mut self, cells: &[&dyn Display]) -> &mut Self {
    self.add_row(cells.iter().map(ToString::to_string))
  }

  /// Builder form of [`Self::add_row`].
  #[must_use]
  pub fn with_row<C, S>(mut self, cells: C) -> Self
  where
    C: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.add_row(cells);
    self
  }

  fn write_header(&self, out: &mut String) {
    write_cells(out, self.columns.iter().map(String::as_str));

    // dash runs match each label's width, not a minimum of three
    let separators: Vec<String> = self
      .columns
      .iter()
      .map(|column| "-".repeat(column.chars().count()))
      .collect();
    write_cells(out, separators.iter().map(String::as_str));
  }
}

impl Renderable for Table {
  fn render_into(&self, out: &mut String) {
    self.write_header(out);

    let width = self.columns.len();
    for (i, row) in self.rows.iter().enumerate() {
      if row.len() < width {
        debug!(
          "Padding table row {i} from {} to {width} cells",
          row.len()
        );
        let padding = std::iter::repeat_n("", width - row.len());
        write_cells(out, row.iter().map(String::as_str).chain(padding));
      } else {
        if row.len() > width {
          warn!(
            "Table row {i} has {} cells but only {width} columns",
            row.len()
          );
        }
        write_cells(out, row.iter().map(String::as_str));
      }
    }
  }
}

impl_display!(Table);

/// Write `| a | b | c |` followed by a newline.
fn write_cells<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
  out.push_str("| ");
  for (i, cell) in cells.enumerate() {
    if i > 0 {
      out.push_str(" | ");
    }
    out.push_str(cell);
  }
  out.push_str(" |\n");
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Table {
    let mut table = Table::new(["Field", "Value"]);
    table.add([vec!["Name", "Test"], vec!["Age", "-1"], vec!["Hello"]]);
    table
  }

  #[test]
  fn test_header_and_separator() {
    let rendered = sample().render();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("| Field | Value |"));
    assert_eq!(lines.next(), Some("| ----- | ----- |"));
  }

  #[test]
  fn test_short_row_is_padded() {
    let rendered = sample().render();
    assert_eq!(rendered.lines().nth(4), Some("| Hello |  |"));
  }

  #[test]
  fn test_stored_rows_are_not_padded() {
    let table = sample();
    let first = table.render();
    assert_eq!(table.rows()[2], ["Hello"]);
    assert_eq!(table.render(), first);
  }

  #[test]
  fn test_long_row_is_not_truncated() {
    let mut table = Table::new(["A"]);
    table.add_row(["1", "2", "3"]);
    assert_eq!(table.render(), "| A |\n| - |\n| 1 | 2 | 3 |\n");
  }

  #[test]
  fn test_separator_widths_follow_labels() {
    let table = Table::new(["Id", "Description", "ü"]);
    assert_eq!(
      table.render(),
      "| Id | Description | ü |\n| -- | ----------- | - |\n"
    );
  }

  #[test]
  fn test_data_line_count_matches_rows() {
    let table = sample();
    let lines = table.render().lines().count();
    assert_eq!(lines - 2, table.rows().len());
  }

  #[test]
  fn test_pipes_are_not_escaped() {
    let table = Table::new(["x"]).with_row(["a|b"]);
    assert!(table.render().ends_with("| a|b |\n"));
  }

  #[test]
  fn test_heterogeneous_rows() {
    let mut table = Table::new(["Name", "Age", "Score", "Active"]);
    let first: &[&dyn Display] = &[&"Ada", &36, &99.5, &true];
    let second: &[&dyn Display] = &[&'x', &-1];
    let third: &[&dyn Display] = &[];
    table.add_row_any(first);
    table.add_any(&[second, third]);

    assert_eq!(table.rows()[0], ["Ada", "36", "99.5", "true"]);
    assert_eq!(table.rows()[1], ["x", "-1"]);
    assert!(table.rows()[2].is_empty());
    assert!(table.render().ends_with("| x | -1 |  |  |\n|  |  |  |  |\n"));
  }

  #[test]
  fn test_table_without_columns() {
    let mut table = Table::new(Vec::<String>::new());
    table.add_row(["stray"]);
    assert_eq!(table.render(), "|  |\n|  |\n| stray |\n");
  }
}
