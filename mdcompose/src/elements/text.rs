//! Leaf elements wrapping a single string payload.
use crate::renderable::{Renderable, impl_display};

/// Define a newtype around a `String` payload with the usual constructors.
macro_rules! text_element {
  ($($(#[$meta:meta])* $name:ident;)+) => {
    $(
      $(#[$meta])*
      #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
      pub struct $name(String);

      impl $name {
        /// Wrap the given payload.
        #[must_use]
        pub fn new(payload: impl Into<String>) -> Self {
          Self(payload.into())
        }

        /// The raw payload, without any formatting applied.
        #[must_use]
        pub fn as_str(&self) -> &str {
          &self.0
        }
      }

      impl From<&str> for $name {
        fn from(payload: &str) -> Self {
          Self::new(payload)
        }
      }

      impl From<String> for $name {
        fn from(payload: String) -> Self {
          Self(payload)
        }
      }
    )+

    impl_display!($($name),+);
  };
}

text_element! {
  /// Plain text passthrough. No trailing newline is added.
  Text;
  /// Level one heading, `# payload`.
  H1;
  /// Level two heading, `## payload`.
  H2;
  /// Level three heading, `### payload`.
  H3;
  /// Strong emphasis, `**payload**`.
  Bold;
  /// Emphasis, `*payload*`.
  Italic;
  /// Struck-out text, `~~payload~~`.
  Strikethrough;
  /// Inline code span, `` `payload` ``.
  Code;
  /// Fenced code block without an info string.
  CodeBlock;
  /// Block quote. Every line of a multi-line payload gets its own `> ` prefix,
  /// and no trailing newline is emitted.
  BlockQuote;
}

impl Renderable for Text {
  fn render_into(&self, out: &mut String) {
    out.push_str(&self.0);
  }
}

impl Renderable for H1 {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "# ", &self.0, "");
  }
}

impl Renderable for H2 {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "## ", &self.0, "");
  }
}

impl Renderable for H3 {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "### ", &self.0, "");
  }
}

impl Renderable for Bold {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "**", &self.0, "**");
  }
}

impl Renderable for Italic {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "*", &self.0, "*");
  }
}

impl Renderable for Strikethrough {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "~~", &self.0, "~~");
  }
}

impl Renderable for Code {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "`", &self.0, "`");
  }
}

impl Renderable for CodeBlock {
  fn render_into(&self, out: &mut String) {
    wrap_line(out, "```\n", &self.0, "\n```");
  }
}

impl Renderable for BlockQuote {
  fn render_into(&self, out: &mut String) {
    // `split` keeps a trailing empty segment, so "a\n" becomes "> a\n> "
    for (i, line) in self.0.split('\n').enumerate() {
      if i > 0 {
        out.push('\n');
      }
      out.push_str("> ");
      out.push_str(line);
    }
  }
}

/// Horizontal rule, `---`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Divider;

/// The one divider value; [`Divider`] carries no state.
pub const DIVIDER: Divider = Divider;

impl Renderable for Divider {
  fn render_into(&self, out: &mut String) {
    out.push_str("---\n");
  }
}

impl_display!(Divider);

fn wrap_line(out: &mut String, open: &str, payload: &str, close: &str) {
  out.reserve(open.len() + payload.len() + close.len() + 1);
  out.push_str(open);
  out.push_str(payload);
  out.push_str(close);
  out.push('\n');
}
