#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use mdcompose::{
  BlockQuote,
  Bold,
  Code,
  CodeBlock,
  Column,
  DIVIDER,
  H1,
  H2,
  H3,
  HeaderRow,
  Italic,
  List,
  OrderedList,
  Renderable,
  Row,
  Strikethrough,
  Table,
  Text,
};

fn leaves() -> Vec<Box<dyn Renderable>> {
  vec![
    Text::new("plain").boxed(),
    H1::new("one").boxed(),
    H2::new("two").boxed(),
    H3::new("three").boxed(),
    Bold::new("b").boxed(),
    Italic::new("i").boxed(),
    Strikethrough::new("s").boxed(),
    Code::new("c").boxed(),
    CodeBlock::new("block").boxed(),
    BlockQuote::new("q1\nq2").boxed(),
    DIVIDER.boxed(),
    OrderedList::new(["a", "b"]).boxed(),
    List::new(["a", "b"]).boxed(),
  ]
}

#[test]
fn test_leaf_render_is_repeatable() {
  for leaf in leaves() {
    assert_eq!(leaf.render(), leaf.render());
  }
}

#[test]
fn test_leaf_outputs() {
  let expected = [
    "plain",
    "# one\n",
    "## two\n",
    "### three\n",
    "**b**\n",
    "*i*\n",
    "~~s~~\n",
    "`c`\n",
    "```\nblock\n```\n",
    "> q1\n> q2",
    "---\n",
    "1. a\n2. b\n",
    "- a\n- b\n",
  ];

  let rendered: Vec<String> = leaves().iter().map(|l| l.render()).collect();
  assert_eq!(rendered, expected);
}

#[test]
fn test_sample_table() {
  let mut table = Table::new(["Field", "Value"]);
  table.add([vec!["Name", "Test"], vec!["Age", "-1"], vec!["Hello"]]);

  assert_eq!(
    table.render(),
    "| Field | Value |\n| ----- | ----- |\n| Name | Test |\n| Age | -1 |\n| \
     Hello |  |\n"
  );
}

#[test]
fn test_table_data_lines_equal_row_count() {
  for rows in 0..5 {
    let mut table = Table::new(["A", "B", "C"]);
    for i in 0..rows {
      // alternate short, exact and long rows
      let cells: Vec<String> = (0..=i % 4).map(|c| c.to_string()).collect();
      table.add_row(cells);
    }
    assert_eq!(table.render().lines().count(), 2 + rows);
  }
}

#[test]
fn test_column_blocks() {
  for n in 0..4 {
    let mut column = Column::new();
    for i in 0..n {
      column.add(Text::new(format!("block {i}")));
    }

    let rendered = column.render();
    assert_eq!(rendered.is_empty(), n == 0);
    assert_eq!(rendered.matches('\n').count(), n);
    for i in 0..n {
      assert!(rendered.contains(&format!("block {i}\n")));
    }
  }
}

#[test]
fn test_tree_render_is_idempotent() {
  let mut table = Table::new(["k", "v"]);
  table.add_row(["a", "1"]);

  let mut doc = Column::new();
  doc
    .add(H1::new("Title"))
    .add(table.clone())
    .add(Row::new().with(table.clone()).with(Bold::new("side")))
    .add(HeaderRow::new(["Nested"]).with(table));

  let first = doc.render();
  for _ in 0..3 {
    assert_eq!(doc.render(), first);
  }
  assert_eq!(doc.to_string(), first);
}

#[test]
fn test_add_chaining_matches_sequential_add() {
  let mut chained = Column::new();
  chained.add(H2::new("a")).add(Italic::new("b")).add(DIVIDER);

  let mut sequential = Column::new();
  sequential.add(H2::new("a"));
  sequential.add(Italic::new("b"));
  sequential.add(DIVIDER);

  let built = Column::new()
    .with(H2::new("a"))
    .with(Italic::new("b"))
    .with(DIVIDER);

  assert_eq!(chained.render(), sequential.render());
  assert_eq!(built.render(), sequential.render());
}

#[test]
fn test_add_then_render_equals_render_with_item() {
  let mut row = Row::new();
  row.add(Text::new("first"));
  let before = row.render();

  let after = row.add(Text::new("second")).render();
  assert_ne!(before, after);
  assert_eq!(
    after,
    Row::new()
      .with(Text::new("first"))
      .with(Text::new("second"))
      .render()
  );
}

#[test]
fn test_header_row_cells_are_html() {
  let mut table = Table::new(["Field", "Value"]);
  table.add_row(["Name", "Test"]);

  let mut header_row = HeaderRow::new(["**Table 1**", "*Table 2*"]);
  header_row.add(table.clone()).add(table);

  let rendered = header_row.render();
  assert!(!rendered.contains("| Field | Value |"));
  assert!(!rendered.contains("| ----- | ----- |"));
  assert_eq!(rendered.matches("<th>Field</th>").count(), 2);
  assert_eq!(rendered.matches("<td>Name</td>").count(), 2);
  // labels are emitted verbatim
  assert!(rendered.contains("<th>\n\n**Table 1**\n</th>"));
  assert!(
    header_row
      .try_render()
      .expect("comrak converts tables")
      .eq(&rendered)
  );
}
