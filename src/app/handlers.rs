//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Fetch a random user
    Call,
    /// Cancel the most recent pending request
    CancelLatest,
    /// Cancel every pending request
    CancelAll,
    /// Clear users and finished log entries
    Clear,
    Quit,
    /// Key is not bound
    None,
}

impl KeyAction {
    /// Map a key event to an action.
    ///
    /// Only presses count; repeats and releases are ignored.
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('c') | KeyCode::Enter => KeyAction::Call,
            KeyCode::Char('x') => KeyAction::CancelLatest,
            KeyCode::Char('X') => KeyAction::CancelAll,
            KeyCode::Char('d') => KeyAction::Clear,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl App {
    /// Handle a key press. Returns the action that was taken.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let action = KeyAction::from_key(key);
        match action {
            KeyAction::Call => {
                self.call_api();
            }
            KeyAction::CancelLatest => {
                if self.cancel_latest().is_none() {
                    tracing::debug!("nothing to cancel");
                }
            }
            KeyAction::CancelAll => {
                let cancelled = self.cancel_all();
                tracing::info!(cancelled, "cancelled all requests");
            }
            KeyAction::Clear => self.clear_users(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        make_key_event(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(KeyAction::from_key(key(KeyCode::Char('c'))), KeyAction::Call);
        assert_eq!(KeyAction::from_key(key(KeyCode::Enter)), KeyAction::Call);
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Char('x'))),
            KeyAction::CancelLatest
        );
        assert_eq!(
            KeyAction::from_key(make_key_event(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            KeyAction::CancelAll
        );
        assert_eq!(KeyAction::from_key(key(KeyCode::Char('d'))), KeyAction::Clear);
        assert_eq!(KeyAction::from_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(KeyAction::from_key(key(KeyCode::Char('z'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c_quits_but_other_modifiers_do_nothing() {
        assert_eq!(
            KeyAction::from_key(make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key(make_key_event(KeyCode::Char('x'), KeyModifiers::ALT)),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut event = key(KeyCode::Char('c'));
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyAction::from_key(event), KeyAction::None);
    }

    #[tokio::test]
    async fn test_handle_key_drives_requests() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Pending);
        let config = AppConfig::default().with_max_delay(Duration::ZERO);
        let mut app = App::new(&config, mock);

        assert_eq!(app.handle_key(key(KeyCode::Char('c'))), KeyAction::Call);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), KeyAction::Call);
        assert_eq!(app.pending_count(), 2);

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.pending_count(), 1);

        app.handle_key(make_key_event(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(app.pending_count(), 0);

        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.requests.is_empty());

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
