//! The demonstration document: one of every element kind, with the same table
//! reused inside each container.
use std::{rc::Rc, sync::Arc};

use mdcompose::{
  Bold,
  Column,
  DIVIDER,
  H1,
  H2,
  H3,
  HeaderRow,
  Italic,
  List,
  OrderedList,
  Row,
  SharedConverter,
  Strikethrough,
  Table,
  Text,
};

/// The sample table. Its last row is deliberately short to show padding.
#[must_use]
pub fn demo_table() -> Table {
  let mut table = Table::new(["Field", "Value"]);
  table.add([vec!["Name", "Test"], vec!["Age", "-1"], vec!["Hello"]]);
  table
}

/// Build the demonstration document. Header rows convert their cells with
/// `converter`.
#[must_use]
pub fn build_demo_document(converter: &SharedConverter) -> Column {
  let table = Rc::new(demo_table());

  let mut side_by_side = Row::new();
  side_by_side.add(Rc::clone(&table)).add(Rc::clone(&table));

  let mut labelled = HeaderRow::with_shared_converter(
    Arc::clone(converter),
    ["**Table 1**", "*Table 2*"],
  );
  labelled.add(Rc::clone(&table)).add(Rc::clone(&table));

  let mut numbered = HeaderRow::with_shared_converter(
    Arc::clone(converter),
    ["0", "1"],
  );
  numbered.add(Rc::clone(&table)).add(Rc::clone(&table));

  let mut doc = Column::new();
  doc
    .add(H1::new("Testing"))
    .add(Bold::new("Very bold"))
    .add(Rc::clone(&table))
    .add(H2::new("Testing 2"))
    .add(Italic::new("Emphasis"))
    .add(Strikethrough::new("Not valid"))
    .add(H3::new("Testing 3"))
    .add(Text::new("Lorem ipsum etc"))
    .add(List::new(["Apple", "Banana", "Orange"]))
    .add(OrderedList::new(["Item 1", "Item 2", "Item 3"]))
    .add(DIVIDER)
    .add(side_by_side)
    .add(labelled)
    .add(numbered);
  doc
}
