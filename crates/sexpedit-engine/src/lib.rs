//! # sexpedit-engine
//!
//! Structural (s-expression aware) editing for Lisp-family source text.
//!
//! Given a buffer and a caret offset, the engine locates the syntactic forms
//! around the caret (lists, strings, atoms) and performs paren-preserving
//! rewrites on them. Every operation is a pure function of `(text, offset)`:
//! there is no persistent syntax tree, no cross-call state and no I/O. The
//! structure is recovered by re-scanning the text on every call.
//!
//! ## Layers
//!
//! ```text
//! scanning::matcher   balanced-delimiter scans (enclosing list)
//!        ▲
//! scanning::form      classify + bound the next form (list / string / atom)
//!        ▲
//! scanning::siblings  last child of a list, form following a list
//!        ▲
//! editing             slurp-forward / barf-forward → Patch
//! extract             form before the caret → Span / FormRange
//! eval                what an "evaluate" action should send and flash
//! ```
//!
//! ## Offsets
//!
//! All positions are zero-based indices of `char`s into the buffer, not byte
//! offsets. [`Text`] holds the buffer as a `Vec<char>` for the duration of a
//! call. Offsets past the end of the buffer are clamped to its length.
//!
//! ## Well-formedness
//!
//! The backward scans count all three delimiter kinds with one shared
//! balance counter. That is only sound for well-nested input, which is a
//! precondition of every operation here. On malformed input the result is
//! `None` or some span, never a panic.
//!
//! ## Quick start
//!
//! ```
//! use sexpedit_engine::{slurp_forward, form_range_before_cursor};
//!
//! let patch = slurp_forward("(foo (bar) baz)", 6).unwrap();
//! assert_eq!(patch.text, "(foo (bar baz))");
//! assert_eq!(patch.offset, 6);
//!
//! let range = form_range_before_cursor("(+ 1 2) (+ 3 4)", 7).unwrap();
//! assert_eq!(range.text, "(+ 1 2)");
//! assert_eq!((range.start, range.end), (0, 7));
//! ```

pub mod editing;
pub mod eval;
pub mod extract;
pub mod scanning;

pub use editing::{Cmd, Patch, UnknownCommand};
pub use eval::{EvalTarget, eval_target};
pub use extract::FormRange;
pub use scanning::{Delimiter, Form, LineCol, Span, Text};

/// Innermost list strictly containing `offset`.
pub fn enclosing_list(text: &str, offset: usize) -> Option<Span> {
    scanning::enclosing_list(&Text::new(text), offset).map(|(span, _)| span)
}

/// Extends the list around `offset` to swallow the form that follows it.
pub fn slurp_forward(text: &str, offset: usize) -> Option<Patch> {
    editing::slurp_forward(&Text::new(text), offset)
}

/// Ejects the last child of the list around `offset` so it follows the list.
pub fn barf_forward(text: &str, offset: usize) -> Option<Patch> {
    editing::barf_forward(&Text::new(text), offset)
}

/// Source text of the form immediately before `offset`.
pub fn form_before_cursor(text: &str, offset: usize) -> Option<String> {
    extract::form_before_cursor(&Text::new(text), offset)
}

/// Source text and span of the form immediately before `offset`.
pub fn form_range_before_cursor(text: &str, offset: usize) -> Option<FormRange> {
    extract::form_range_before_cursor(&Text::new(text), offset)
}
