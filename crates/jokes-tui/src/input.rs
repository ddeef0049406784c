use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jokes_core::{FetchRequest, TabKind};

use crate::ui::App;

/// Apply a key press to the app. Returns the request to run when the key
/// submitted a form or asked for the next page.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            if app.session.error().is_some() {
                app.session.dismiss_error();
            } else {
                app.quit();
            }
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Enter => return app.submit(),
        KeyCode::Char('n') if ctrl => return app.load_more(),
        KeyCode::Char('l') if ctrl => app.clear_active_tab(),
        KeyCode::Char('u') if ctrl => app.clear_input(),
        KeyCode::Up if app.session.active_tab() == TabKind::Search => {
            app.session.select_prev_category();
        }
        KeyCode::Down if app.session.active_tab() == TabKind::Search => {
            app.session.select_next_category();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) if !ctrl => app.enter_char(c),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokes_core::{FetchOutcome, PageResult, Session};

    fn app() -> App {
        App::new(Session::default(), "http://localhost:8000")
    }

    fn press(app: &mut App, code: KeyCode) -> Option<FetchRequest> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> Option<FetchRequest> {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit_ask() {
        let mut app = app();
        type_text(&mut app, "pun pls");
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }

        let request = press(&mut app, KeyCode::Enter);
        assert_eq!(
            request,
            Some(FetchRequest::Ask {
                request_text: "pun".to_string(),
                amount: 1,
            })
        );
        // A second Enter while loading does nothing
        assert_eq!(press(&mut app, KeyCode::Enter), None);
    }

    #[test]
    fn test_tab_keys_cycle_modes() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.active_tab(), TabKind::Search);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.active_tab(), TabKind::Id);
    }

    #[test]
    fn test_arrows_change_category_on_search_only() {
        let mut app = app();
        app.session
            .set_categories(vec!["Programming".to_string(), "Pun".to_string()]);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.session.selected_category(), "Any");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.session.selected_category(), "Programming");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.session.selected_category(), "Pun");
    }

    #[test]
    fn test_ctrl_n_requests_next_page() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "cat");
        let request = press(&mut app, KeyCode::Enter).unwrap();
        app.apply(FetchOutcome::Jokes {
            request,
            result: Ok(PageResult {
                has_more: true,
                ..PageResult::default()
            }),
        });

        // Control chords never reach the input
        let next = ctrl(&mut app, 'n');
        assert_eq!(app.session.input(TabKind::Search), "cat");
        assert!(matches!(next, Some(FetchRequest::Search { page: 2, .. })));
    }

    #[test]
    fn test_esc_dismisses_error_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "x1");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.error().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.session.error().is_none());
        assert!(app.running);

        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_l_clears_active_tab_input() {
        let mut app = app();
        type_text(&mut app, "hello");
        ctrl(&mut app, 'l');
        assert_eq!(app.session.input(TabKind::Ask), "");
    }
}
