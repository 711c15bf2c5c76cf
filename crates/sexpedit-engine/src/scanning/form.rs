use super::{
    Delimiter, Span, Text,
    delimiter::{is_close, is_token_char},
    matcher::enclosing_list,
};

/// A syntactically complete unit: a list, a string literal or an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    List(Span, Delimiter),
    StringLiteral(Span),
    /// Symbol, number, keyword: any unbroken run of token chars.
    Atom(Span),
}

impl Form {
    pub fn span(self) -> Span {
        match self {
            Form::List(span, _) | Form::StringLiteral(span) | Form::Atom(span) => span,
        }
    }
}

/// The first form at or after `from`, skipping leading whitespace.
///
/// Returns `None` at end of buffer, on an unterminated string or list, and
/// when the next non-whitespace char is a close delimiter (the end of the
/// enclosing list rather than a form).
pub fn next_form(text: &Text, from: usize) -> Option<Form> {
    let start = text.skip_whitespace_forward(from)?;
    let c = text.get(start)?;

    if Delimiter::from_open(c).is_some() {
        // The list enclosing the position just inside this opener is the
        // list that starts here.
        let (span, kind) = enclosing_list(text, start + 1)?;
        return Some(Form::List(span, kind));
    }

    if c == '"' {
        return (start + 1..text.len())
            .find(|&i| text.get(i) == Some('"') && text.get(i - 1) != Some('\\'))
            .map(|close| Form::StringLiteral(Span::new(start, close + 1)));
    }

    if is_close(c) {
        return None;
    }

    let end = (start..text.len())
        .find(|&i| !text.get(i).is_some_and(is_token_char))
        .unwrap_or(text.len());
    Some(Form::Atom(Span::new(start, end)))
}
