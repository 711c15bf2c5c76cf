use super::{Span, delimiter::is_whitespace};

/// An immutable, char-indexed view of an editor buffer.
///
/// Built fresh for each call; the engine never keeps one across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    chars: Vec<char>,
}

/// A zero-based caret position as a widget sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineCol {
    pub line: usize,
    /// Column in chars.
    pub col: usize,
}

impl Text {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Char at `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// Clamps a caret offset into `0..=len`.
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len())
    }

    /// The text covered by `span`, clamped to the buffer.
    pub fn slice(&self, span: Span) -> String {
        let end = self.clamp(span.end);
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// First non-whitespace offset at or after `from`.
    pub fn skip_whitespace_forward(&self, from: usize) -> Option<usize> {
        (from..self.len()).find(|&i| !is_whitespace(self.chars[i]))
    }

    /// Last non-whitespace offset strictly before `before`.
    pub fn skip_whitespace_backward(&self, before: usize) -> Option<usize> {
        (0..self.clamp(before))
            .rev()
            .find(|&i| !is_whitespace(self.chars[i]))
    }

    /// Spans of each line, excluding the `\n`. An empty buffer has one
    /// empty line.
    pub fn lines(&self) -> impl Iterator<Item = Span> + '_ {
        let mut start = 0usize;
        let mut done = false;
        std::iter::from_fn(move || {
            if done {
                return None;
            }
            match (start..self.len()).find(|&i| self.chars[i] == '\n') {
                Some(nl) => {
                    let span = Span::new(start, nl);
                    start = nl + 1;
                    Some(span)
                }
                None => {
                    done = true;
                    Some(Span::new(start, self.len()))
                }
            }
        })
    }

    /// Line and column of a caret offset (clamped to the buffer).
    pub fn line_col(&self, offset: usize) -> LineCol {
        let offset = self.clamp(offset);
        let line = self.chars[..offset].iter().filter(|&&c| c == '\n').count();
        let line_start = self.chars[..offset]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |nl| nl + 1);
        LineCol {
            line,
            col: offset - line_start,
        }
    }

    /// Caret offset for a line and column. Lines past the end clamp to the
    /// last line, columns clamp to the line's length.
    pub fn offset_at(&self, pos: LineCol) -> usize {
        let mut last = Span::new(0, 0);
        for (i, line) in self.lines().enumerate() {
            last = line;
            if i == pos.line {
                break;
            }
        }
        last.start + pos.col.min(last.len())
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
