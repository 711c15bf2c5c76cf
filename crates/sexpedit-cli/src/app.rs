use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sexpedit_config::{Action, Config};
use sexpedit_engine::{Cmd, LineCol, Span, Text, eval_target};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::keys::key_string;

/// A highlighted span that disappears at `until`.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub span: Span,
    pub until: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Editor state: the buffer, the caret (a char offset) and transient UI bits.
pub struct App {
    pub path: PathBuf,
    pub buffer: String,
    pub caret: usize,
    pub status: String,
    pub flash: Option<Flash>,
    pub dirty: bool,
    config: Config,
}

impl App {
    pub fn open(path: PathBuf, config: Config) -> Result<Self> {
        let buffer = if path.exists() {
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?
        } else {
            String::new()
        };
        log::info!("opened {} ({} chars)", path.display(), buffer.chars().count());

        Ok(Self {
            path,
            buffer,
            caret: 0,
            status: String::new(),
            flash: None,
            dirty: false,
            config,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Outcome> {
        if let Some(keys) = key_string(&key)
            && let Some(action) = self.config.action_for(&keys)
        {
            return self.run_action(action);
        }

        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Left => self.caret = self.caret.saturating_sub(1),
            KeyCode::Right => self.caret = (self.caret + 1).min(self.len()),
            KeyCode::Up => self.move_line(-1),
            KeyCode::Down => self.move_line(1),
            KeyCode::Home => self.move_to_line_edge(false),
            KeyCode::End => self.move_to_line_edge(true),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Enter => self.insert('\n'),
            KeyCode::Tab => {
                self.insert(' ');
                self.insert(' ');
            }
            KeyCode::Char(c) if plain => self.insert(c),
            _ => {}
        }
        Ok(Outcome::Continue)
    }

    pub fn run_action(&mut self, action: Action) -> Result<Outcome> {
        if let Some(cmd) = action.edit_cmd() {
            self.apply(cmd);
            return Ok(Outcome::Continue);
        }
        match action {
            Action::EvalLastForm => self.eval_last_form(),
            Action::Save => self.save()?,
            Action::Quit => return Ok(Outcome::Quit),
            Action::SlurpForward | Action::BarfForward => {}
        }
        Ok(Outcome::Continue)
    }

    /// Runs a structural command, replacing the whole buffer on success.
    pub fn apply(&mut self, cmd: Cmd) {
        match cmd.apply(&self.text(), self.caret) {
            Some(patch) => {
                self.buffer = patch.text;
                self.caret = patch.offset;
                self.dirty = true;
                self.status = cmd.label().to_string();
            }
            None => self.status = format!("{}: not applicable here", cmd.label()),
        }
    }

    /// Highlights the form before the caret and shows it in the status line.
    pub fn eval_last_form(&mut self) {
        match eval_target(&self.text(), self.caret, None) {
            Some(target) => {
                self.flash = Some(Flash {
                    span: target.span,
                    until: Instant::now() + Duration::from_millis(self.config.flash_ms),
                });
                self.status = format!("eval: {}", target.code);
            }
            None => self.status = "eval: no form before the caret".to_string(),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        std::fs::write(&self.path, &self.buffer)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("saved {}", self.path.display());
        self.dirty = false;
        self.status = format!("saved {}", self.path.display());
        Ok(())
    }

    /// The flash span if it has not yet expired.
    pub fn active_flash(&self, now: Instant) -> Option<Span> {
        self.flash.filter(|f| now < f.until).map(|f| f.span)
    }

    pub fn text(&self) -> Text {
        Text::new(&self.buffer)
    }

    pub fn caret_line_col(&self) -> LineCol {
        self.text().line_col(self.caret)
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(offset)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.caret);
        self.buffer.insert(at, c);
        self.caret += 1;
        self.dirty = true;
    }

    fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        self.delete();
    }

    fn delete(&mut self) {
        if self.caret >= self.len() {
            return;
        }
        let at = self.byte_index(self.caret);
        self.buffer.remove(at);
        self.dirty = true;
    }

    fn move_line(&mut self, delta: isize) {
        let text = self.text();
        let pos = text.line_col(self.caret);
        let Some(line) = pos.line.checked_add_signed(delta) else {
            return;
        };
        self.caret = text.offset_at(LineCol { line, col: pos.col });
    }

    fn move_to_line_edge(&mut self, end: bool) {
        let text = self.text();
        let pos = text.line_col(self.caret);
        let col = if end { usize::MAX } else { 0 };
        self.caret = text.offset_at(LineCol {
            line: pos.line,
            col,
        });
    }
}
