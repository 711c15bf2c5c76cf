//! Structural rewrites.
//!
//! Each transform is a single-shot pure function from `(text, offset)` to a
//! [`Patch`] holding the complete new buffer and the caret offset to restore,
//! or `None` when the transform does not apply at that offset. Callers replace
//! the whole buffer with `patch.text`; nothing is applied in place.
//!
//! - **`transform`**: `slurp_forward` and `barf_forward`
//! - **`commands`**: the [`Cmd`] enum naming those transforms for keymaps
//! - **`patch`**: the [`Patch`] result type

pub mod commands;
pub mod patch;
pub mod transform;

pub use commands::{Cmd, UnknownCommand};
pub use patch::Patch;
pub use transform::{barf_forward, slurp_forward};
