use serde::Serialize;

/// Result of applying a transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    /// The full rewritten buffer.
    pub text: String,
    /// Caret offset in `text`.
    pub offset: usize,
}
