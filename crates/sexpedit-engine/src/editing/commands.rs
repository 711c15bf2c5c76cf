use std::{fmt, str::FromStr};

use crate::scanning::Text;

use super::{Patch, transform};

/// Named structural edit commands, as bound to keys by an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmd {
    SlurpForward,
    BarfForward,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl Cmd {
    pub const ALL: [Cmd; 2] = [Cmd::SlurpForward, Cmd::BarfForward];

    /// Stable identifier used in keymaps and config files.
    pub fn id(self) -> &'static str {
        match self {
            Cmd::SlurpForward => "slurp-forward",
            Cmd::BarfForward => "barf-forward",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cmd::SlurpForward => "Slurp Forward",
            Cmd::BarfForward => "Barf Forward",
        }
    }

    pub fn default_keybindings(self) -> &'static [&'static str] {
        match self {
            Cmd::SlurpForward => &["ctrl+right", "alt+right"],
            Cmd::BarfForward => &["ctrl+left", "alt+left"],
        }
    }

    /// Runs the command against `text` with the caret at `offset`.
    pub fn apply(self, text: &Text, offset: usize) -> Option<Patch> {
        match self {
            Cmd::SlurpForward => transform::slurp_forward(text, offset),
            Cmd::BarfForward => transform::barf_forward(text, offset),
        }
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Cmd {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cmd::ALL
            .into_iter()
            .find(|cmd| cmd.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
