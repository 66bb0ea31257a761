//! Container elements that compose other [`Renderable`](crate::Renderable)s.
//!
//! Every container owns its children exclusively and only grows by appending;
//! there is no removal or reordering.
mod column;
mod header_row;
mod row;

pub use column::Column;
pub use header_row::HeaderRow;
pub use row::Row;

/// Append and inspection methods shared by containers holding boxed
/// renderables in the given field.
macro_rules! child_api {
  ($name:ident, $field:ident) => {
    impl $name {
      /// Append one child. Returns `self` for chaining.
      pub fn add(
        &mut self,
        item: impl $crate::Renderable + 'static,
      ) -> &mut Self {
        self.$field.push(Box::new(item));
        self
      }

      /// Append several children, in iteration order. Returns `self` for
      /// chaining.
      pub fn add_all<I>(&mut self, items: I) -> &mut Self
      where
        I: IntoIterator<Item = Box<dyn $crate::Renderable>>,
      {
        self.$field.extend(items);
        self
      }

      /// Builder form of [`Self::add`].
      #[must_use]
      pub fn with(mut self, item: impl $crate::Renderable + 'static) -> Self {
        self.add(item);
        self
      }

      /// Number of children.
      #[must_use]
      pub fn len(&self) -> usize {
        self.$field.len()
      }

      /// Whether the container has no children.
      #[must_use]
      pub fn is_empty(&self) -> bool {
        self.$field.is_empty()
      }

      /// Children in insertion order.
      pub fn iter(&self) -> impl Iterator<Item = &dyn $crate::Renderable> {
        self.$field.iter().map(|item| &**item)
      }
    }

    impl Extend<Box<dyn $crate::Renderable>> for $name {
      fn extend<I: IntoIterator<Item = Box<dyn $crate::Renderable>>>(
        &mut self,
        iter: I,
      ) {
        self.$field.extend(iter);
      }
    }
  };
}

pub(crate) use child_api;
