//! Balanced-delimiter matching.
//!
//! [`enclosing_list`] first walks backward from the caret to the nearest
//! unbalanced open delimiter, counting `)`, `]` and `}` against `(`, `[` and
//! `{` with a single shared counter. For well-nested source an inner list is
//! always closed before its parent regardless of kind, so one counter is
//! enough; on mixed-kind malformed input the result is unspecified but never
//! a panic. It then walks forward from that open delimiter counting only its
//! own kind to find the matching close.

use super::{Delimiter, Span, Text, delimiter::is_close};

/// Innermost list that strictly contains `offset`, with its delimiter kind.
///
/// The returned span always starts with `kind.open()` and ends with
/// `kind.close()`.
pub fn enclosing_list(text: &Text, offset: usize) -> Option<(Span, Delimiter)> {
    let offset = text.clamp(offset);
    let start = unbalanced_open_before(text, offset)?;
    let kind = Delimiter::from_open(text.get(start)?)?;
    let end = match_forward(text, start, kind)?;
    // A close before the caret means the caret was never inside.
    if end < offset {
        return None;
    }
    Some((Span::new(start, end), kind))
}

/// Offset just past the close delimiter matching the `kind` opener at
/// `start`, or `None` if the list is never closed.
pub fn match_forward(text: &Text, start: usize, kind: Delimiter) -> Option<usize> {
    let mut depth = 0usize;
    for i in start + 1..text.len() {
        let c = text.get(i)?;
        if c == kind.open() {
            depth += 1;
        } else if c == kind.close() {
            if depth == 0 {
                return Some(i + 1);
            }
            depth -= 1;
        }
    }
    None
}

fn unbalanced_open_before(text: &Text, offset: usize) -> Option<usize> {
    let mut balance = 0usize;
    for i in (0..offset).rev() {
        let c = text.get(i)?;
        if is_close(c) {
            balance += 1;
        } else if Delimiter::from_open(c).is_some() {
            if balance == 0 {
                return Some(i);
            }
            balance -= 1;
        }
    }
    None
}
