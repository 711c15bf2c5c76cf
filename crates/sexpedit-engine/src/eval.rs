use crate::{
    extract::form_span_before_cursor,
    scanning::{Span, Text},
};

/// Code an evaluate action should send, and the span to flash while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTarget {
    pub code: String,
    pub span: Span,
}

/// Picks what to evaluate: a non-empty selection wins, otherwise the form
/// before the caret.
pub fn eval_target(text: &Text, offset: usize, selection: Option<Span>) -> Option<EvalTarget> {
    let selected = selection
        .map(|sel| {
            Span::new(
                text.clamp(sel.start.min(sel.end)),
                text.clamp(sel.start.max(sel.end)),
            )
        })
        .filter(|span| !span.is_empty());
    let span = match selected {
        Some(span) => span,
        None => form_span_before_cursor(text, offset)?,
    };

    let code = text.slice(span);
    if code.trim().is_empty() {
        log::debug!("eval: nothing to evaluate at offset {offset}");
        return None;
    }
    Some(EvalTarget { code, span })
}
