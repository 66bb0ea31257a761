//! The [`Renderable`] capability shared by every document element.
use std::{rc::Rc, sync::Arc};

/// An element that can produce its final textual representation.
///
/// Rendering is deterministic and never fails: the same element rendered
/// twice yields byte-identical output, and structurally odd input (ragged
/// tables, empty lists) degrades into odd-looking output instead of an error.
///
/// Implementors only need [`Renderable::render_into`]; containers use it to
/// write their children into a shared buffer.
pub trait Renderable {
  /// Append this element's rendered text to `out`.
  fn render_into(&self, out: &mut String);

  /// Render this element into a freshly allocated string.
  #[must_use]
  fn render(&self) -> String {
    let mut out = String::new();
    self.render_into(&mut out);
    out
  }

  /// Box this element for storage in a container.
  #[must_use]
  fn boxed(self) -> Box<dyn Renderable>
  where
    Self: Sized + 'static,
  {
    Box::new(self)
  }
}

impl<T: Renderable + ?Sized> Renderable for &T {
  fn render_into(&self, out: &mut String) {
    (**self).render_into(out);
  }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
  fn render_into(&self, out: &mut String) {
    (**self).render_into(out);
  }
}

impl<T: Renderable + ?Sized> Renderable for Rc<T> {
  fn render_into(&self, out: &mut String) {
    (**self).render_into(out);
  }
}

impl<T: Renderable + ?Sized> Renderable for Arc<T> {
  fn render_into(&self, out: &mut String) {
    (**self).render_into(out);
  }
}

/// Implement [`std::fmt::Display`] for element types by delegating to
/// [`Renderable::render`].
macro_rules! impl_display {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl ::std::fmt::Display for $ty {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
          f.write_str(&$crate::Renderable::render(self))
        }
      }
    )+
  };
}

pub(crate) use impl_display;
