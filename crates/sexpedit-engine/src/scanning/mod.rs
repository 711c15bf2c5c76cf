//! Text scanning primitives shared by the editing and extraction layers.
//!
//! Nothing here allocates a tree: each function walks the [`Text`] forward or
//! backward from an offset and reports a [`Span`] (or a [`Form`], which is a
//! span tagged with its syntactic kind).

pub mod delimiter;
pub mod form;
pub mod matcher;
pub mod siblings;
pub mod span;
pub mod text;

pub use delimiter::{Delimiter, is_close, is_open, is_token_char, is_whitespace};
pub use form::{Form, next_form};
pub use matcher::{enclosing_list, match_forward};
pub use siblings::{last_child_of, sibling_after};
pub use span::Span;
pub use text::{LineCol, Text};
