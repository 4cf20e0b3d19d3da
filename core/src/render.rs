//! Tree-of-text rendering shared by every inventory entity.
//!
//! Each node draws one line, `<prefix><connector><label>\n`, then hands its
//! children a longer prefix. A node that is the last of its siblings closes its
//! branch with a corner, so its children are indented with blanks instead of a
//! vertical bar:
//!
//! ```text
//! +-Host: a
//! | \-10.0.0.1
//! \-Host: b
//!   \-10.0.0.2
//! ```

use std::fmt::{Display, Write};

/// Connector drawn in front of every sibling but the last.
pub const TEE: &str = "+-";
/// Connector drawn in front of the last sibling.
pub const CORNER: &str = "\\-";

const BAR: &str = "| ";
const BLANK: &str = "  ";

/// An entity that can draw itself and its descendants as an indented tree.
pub trait Render {
    /// Appends this node and its subtree to `out`.
    ///
    /// `prefix` is the indentation accumulated from the ancestors, `is_last`
    /// whether this node closes its sibling list.
    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool);

    /// Renders this node and its subtree into a fresh string.
    fn render(&self, prefix: &str, is_last: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, prefix, is_last);
        out
    }
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { TEE }
}

/// Prefix handed to the children of a node drawn with `prefix` and `is_last`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let mut next = String::with_capacity(prefix.len() + 2);
    next.push_str(prefix);
    next.push_str(if is_last { BLANK } else { BAR });
    next
}

/// Writes a single `<prefix><connector><label>` line.
pub(crate) fn push_line(out: &mut String, prefix: &str, is_last: bool, label: impl Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{prefix}{}{label}", connector(is_last));
}

/// Renders `children` as one sibling list under `prefix`.
pub(crate) fn push_siblings<'a, I>(out: &mut String, prefix: &str, children: I)
where
    I: IntoIterator<Item = &'a dyn Render>,
    I::IntoIter: ExactSizeIterator,
{
    let children = children.into_iter();
    let total = children.len();
    for (idx, child) in children.enumerate() {
        child.render_into(out, prefix, idx + 1 == total);
    }
}
