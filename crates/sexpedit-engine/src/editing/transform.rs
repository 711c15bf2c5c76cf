use crate::scanning::{Form, Span, Text, enclosing_list, last_child_of, sibling_after};

use super::Patch;

/// Moves the close delimiter of the list around `offset` past the form that
/// follows the list, pulling that form inside.
///
/// `None` when the caret is not inside a list or nothing follows the list
/// before its parent closes. The caret offset is kept as-is: every edited
/// char sits at or after the old close, which is at or after the caret.
pub fn slurp_forward(text: &Text, offset: usize) -> Option<Patch> {
    let offset = text.clamp(offset);
    let Some((list, kind)) = enclosing_list(text, offset) else {
        log::debug!("slurp-forward: offset {offset} is not inside a list");
        return None;
    };
    let Some(sibling) = sibling_after(text, list.end).map(Form::span) else {
        log::debug!(
            "slurp-forward: no form follows list {}..{}",
            list.start,
            list.end
        );
        return None;
    };

    let mut out = text.slice(Span::new(0, list.end - 1));
    out.push_str(&text.slice(Span::new(list.end, sibling.end)));
    out.push(kind.close());
    out.push_str(&text.slice(Span::new(sibling.end, text.len())));

    Some(Patch { text: out, offset })
}

/// Moves the close delimiter of the list around `offset` in front of its
/// last child, so the child follows the list.
///
/// The whitespace that separated the child from the previous child stays
/// between the new close and the child; when there was none a single space
/// is inserted. `None` when the caret is not inside a list or the list is
/// empty. The caret offset is preserved as a raw char offset, even when the
/// caret was inside the ejected child.
pub fn barf_forward(text: &Text, offset: usize) -> Option<Patch> {
    let offset = text.clamp(offset);
    let Some((list, kind)) = enclosing_list(text, offset) else {
        log::debug!("barf-forward: offset {offset} is not inside a list");
        return None;
    };
    let Some(child) = last_child_of(text, list).map(Form::span) else {
        log::debug!("barf-forward: list {}..{} is empty", list.start, list.end);
        return None;
    };

    let gap_start = text
        .skip_whitespace_backward(child.start)
        .map_or(child.start, |i| i + 1);

    let mut out = text.slice(Span::new(0, gap_start));
    out.push(kind.close());
    if gap_start == child.start {
        out.push(' ');
    } else {
        out.push_str(&text.slice(Span::new(gap_start, child.start)));
    }
    // The child plus any whitespace that trailed it inside the list.
    out.push_str(&text.slice(Span::new(child.start, list.end - 1)));
    out.push_str(&text.slice(Span::new(list.end, text.len())));

    Some(Patch { text: out, offset })
}
