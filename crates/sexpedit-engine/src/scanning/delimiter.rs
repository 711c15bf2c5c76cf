/// One of the three bracket pairs that delimit a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `( )`
    Paren,
    /// `[ ]`
    Bracket,
    /// `{ }`
    Brace,
}

impl Delimiter {
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Bracket),
            '{' => Some(Self::Brace),
            _ => None,
        }
    }

    pub fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Bracket),
            '}' => Some(Self::Brace),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
            Self::Brace => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Brace => '}',
        }
    }
}

pub fn is_open(c: char) -> bool {
    Delimiter::from_open(c).is_some()
}

pub fn is_close(c: char) -> bool {
    Delimiter::from_close(c).is_some()
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Anything that can appear inside a symbol, number or keyword: not
/// whitespace, not a delimiter, not a double quote.
pub fn is_token_char(c: char) -> bool {
    !is_whitespace(c) && !is_open(c) && !is_close(c) && c != '"'
}
