use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    app::{App, Focus, PopupState},
    basket::Section,
    event::Action,
};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            return handle_key_press(key, app);
        }
    }
    None
}

fn handle_key_press(key_event: KeyEvent, app: &App) -> Option<Action> {
    // A visible popup swallows everything except dismissal.
    if app.popup_state != PopupState::None {
        return match key_event.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ClearPopup),
            _ => None,
        };
    }

    match app.focus {
        Focus::Search => handle_search_keys(key_event, app),
        Focus::Sections => handle_section_keys(key_event),
    }
}

/// Key handling while the search form has focus. Printable characters go
/// into the query, so command keys live behind modifiers or non-text
/// codes here.
fn handle_search_keys(key_event: KeyEvent, app: &App) -> Option<Action> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('u') => Some(Action::SearchClear),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Tab => Some(Action::SearchSwitchTab),
        KeyCode::Enter => Some(Action::PerformSearch(app.query.clone(), app.selected_tab)),
        KeyCode::Esc | KeyCode::Down => Some(Action::SwitchFocus),
        _ => None,
    }
}

/// Key handling while the sections area has focus.
fn handle_section_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Up => Some(Action::SwitchFocus),
        KeyCode::Char('t') => Some(Action::ToggleSection(Section::TransactionCompletion)),
        KeyCode::Char('p') => Some(Action::ToggleSection(Section::Payment)),
        KeyCode::Char('b') => Some(Action::ToggleBarcodeReveal),
        KeyCode::Char('r') => Some(Action::RequestRefund),
        KeyCode::Char('a') => Some(Action::AuthorizeAllRefunds),
        KeyCode::Char('c') => Some(Action::CopyBasketReference),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::{SearchTab, TicketData, TicketSource};
    use crate::config::AppSettings;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn search_app() -> App {
        App::new(
            AppSettings::default(),
            TicketSource::Direct(TicketData::demo()),
        )
    }

    #[test]
    fn enter_submits_the_exact_query_and_tab() {
        let mut app = search_app();
        app.query = "B00N2WEJ".to_string();
        app.selected_tab = SearchTab::BtlRef;

        assert_eq!(
            handle_event(&app, key(KeyCode::Enter)),
            Some(Action::PerformSearch(
                "B00N2WEJ".to_string(),
                SearchTab::BtlRef
            ))
        );

        // An empty query submits as-is.
        app.query.clear();
        assert_eq!(
            handle_event(&app, key(KeyCode::Enter)),
            Some(Action::PerformSearch(String::new(), SearchTab::BtlRef))
        );
    }

    #[test]
    fn printable_characters_feed_the_query() {
        let app = search_app();
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('b'))),
            Some(Action::SearchInput('b'))
        );
        // Section command keys are input while the form has focus.
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        );
    }

    #[test]
    fn ctrl_u_clears_without_searching() {
        let app = search_app();
        assert_eq!(handle_event(&app, ctrl('u')), Some(Action::SearchClear));
    }

    #[test]
    fn section_keys_map_to_section_actions() {
        let mut app = search_app();
        app.focus = Focus::Sections;

        assert_eq!(handle_event(&app, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('t'))),
            Some(Action::ToggleSection(Section::TransactionCompletion))
        );
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('p'))),
            Some(Action::ToggleSection(Section::Payment))
        );
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('b'))),
            Some(Action::ToggleBarcodeReveal)
        );
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('r'))),
            Some(Action::RequestRefund)
        );
        assert_eq!(
            handle_event(&app, key(KeyCode::Char('a'))),
            Some(Action::AuthorizeAllRefunds)
        );
    }

    #[test]
    fn popup_swallows_keys_until_dismissed() {
        let mut app = search_app();
        app.popup_state = PopupState::Message("Copied".to_string());

        assert_eq!(handle_event(&app, key(KeyCode::Char('x'))), None);
        assert_eq!(handle_event(&app, key(KeyCode::Esc)), Some(Action::ClearPopup));
        assert_eq!(
            handle_event(&app, key(KeyCode::Enter)),
            Some(Action::ClearPopup)
        );
    }
}
