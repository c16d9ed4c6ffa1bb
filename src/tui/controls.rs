//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up => app.prev_field(),
        KeyCode::Down => app.next_field(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.adjust(1),
        KeyCode::Char('-') | KeyCode::Left => app.adjust(-1),
        KeyCode::Tab => app.next_preset(),
        KeyCode::Char('a') | KeyCode::Enter => app.add_preset(),
        KeyCode::Char('j') => app.select_next_device(),
        KeyCode::Char('k') => app.select_prev_device(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('c') => app.clear_devices(),
        KeyCode::Char('1') => app.switch_preset("weekender"),
        KeyCode::Char('2') => app.switch_preset("winter_nomad"),
        KeyCode::Char('3') => app.switch_preset("off_grid_south"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new("weekender");
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.quit);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_clears() {
        let mut app = App::new("weekender");
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert!(app.session().ledger().is_empty());
        assert!(!app.quit);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.quit);
    }

    #[test]
    fn number_keys_switch_presets() {
        let mut app = App::new("weekender");
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.preset_name, "winter_nomad");
    }
}
