use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Renders a key press in the `[ctrl+][alt+][shift+]<key>` form used by
/// keybinding config, or `None` for keys that cannot be bound.
pub fn key_string(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        _ => return None,
    };

    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("alt+");
    }
    // Shifted chars already arrive as the shifted char.
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        out.push_str("shift+");
    }
    out.push_str(&name);
    Some(out)
}
