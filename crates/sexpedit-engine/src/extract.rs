//! "Form before the caret" queries, used to pick what an evaluate command
//! sends and what it highlights.

use serde::Serialize;

use crate::scanning::{
    Span, Text,
    delimiter::{is_close, is_open, is_token_char},
};

/// A form's source text together with its span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRange {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Span of the form that ends closest before `offset`, ignoring whitespace
/// in between.
///
/// A caret in the middle of a symbol is first moved to the end of that
/// symbol, so `ab|c` yields `abc`.
pub fn form_span_before_cursor(text: &Text, offset: usize) -> Option<Span> {
    let offset = snap_to_token_end(text, text.clamp(offset));
    let Some(last) = text.skip_whitespace_backward(offset) else {
        log::debug!("form-before-cursor: nothing before offset {offset}");
        return None;
    };
    let end = last + 1;
    let c = text.get(last)?;

    let start = if is_close(c) {
        list_start(text, last)?
    } else if c == '"' {
        string_start(text, last)?
    } else {
        (0..=last)
            .rev()
            .find(|&i| !text.get(i).is_some_and(is_token_char))
            .map_or(0, |i| i + 1)
    };

    // An open delimiter right before the caret is not a form.
    (start < end).then(|| Span::new(start, end))
}

/// Source text of the form before `offset`.
pub fn form_before_cursor(text: &Text, offset: usize) -> Option<String> {
    form_span_before_cursor(text, offset).map(|span| text.slice(span))
}

/// Source text and span of the form before `offset`.
pub fn form_range_before_cursor(text: &Text, offset: usize) -> Option<FormRange> {
    form_span_before_cursor(text, offset).map(|span| FormRange {
        text: text.slice(span),
        start: span.start,
        end: span.end,
    })
}

fn snap_to_token_end(text: &Text, offset: usize) -> usize {
    let inside_token = offset > 0
        && text.get(offset).is_some_and(is_token_char)
        && text.get(offset - 1).is_some_and(is_token_char);
    if !inside_token {
        return offset;
    }
    (offset..text.len())
        .find(|&i| !text.get(i).is_some_and(is_token_char))
        .unwrap_or(text.len())
}

/// Opener matching the close delimiter at `close`, counting every delimiter
/// kind with one balance.
fn list_start(text: &Text, close: usize) -> Option<usize> {
    let mut balance = 0usize;
    for i in (0..=close).rev() {
        let c = text.get(i)?;
        if is_close(c) {
            balance += 1;
        } else if is_open(c) {
            balance -= 1;
            if balance == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Nearest unescaped `"` before the closing quote at `close`.
fn string_start(text: &Text, close: usize) -> Option<usize> {
    (0..close)
        .rev()
        .find(|&i| text.get(i) == Some('"') && (i == 0 || text.get(i - 1) != Some('\\')))
}
