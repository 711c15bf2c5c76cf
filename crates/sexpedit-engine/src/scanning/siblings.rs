use super::{Form, Span, Text, form::next_form};

/// The last complete child form inside the list `parent`, or `None` if the
/// list is empty.
///
/// Children are walked left to right from just inside the opener; the walk
/// stops at the parent's own close delimiter.
pub fn last_child_of(text: &Text, parent: Span) -> Option<Form> {
    let close = parent.end.saturating_sub(1);
    let mut current = parent.start + 1;
    let mut last = None;

    while current < close {
        let Some(form) = next_form(text, current) else {
            break;
        };
        if form.span().end >= parent.end {
            break;
        }
        current = form.span().end;
        last = Some(form);
    }

    last
}

/// The form immediately following `after` (usually a list's end offset).
pub fn sibling_after(text: &Text, after: usize) -> Option<Form> {
    next_form(text, after)
}
