use crate::ui::app::App;
use crate::ui::confirm::{ConfirmChoice, ConfirmIntent};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key event. The confirmation dialog wins over the form dialog,
/// which wins over the list; at most one dialog is ever visible.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.confirm().is_visible() {
        handle_confirm_key(app, key);
        return;
    }

    if app.form().is_open() {
        handle_form_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.dispatch_confirm(ConfirmIntent::Close);
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.dispatch_confirm(ConfirmIntent::ToggleChoice);
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.dispatch_confirm(ConfirmIntent::Select(ConfirmChoice::Yes));
            app.confirm_delete();
        }
        KeyCode::Enter => app.confirm_delete(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_form(FormIntent::Cancel),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('a') => app.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_confirm(),
        KeyCode::Char('r') => app.request_refresh(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::worker::ApiEvent;
    use crate::api::{Drink, DrinkId};
    use crate::ui::confirm::ConfirmDialogState;
    use crate::ui::form::{Field, FormDialogState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn drink(id: &str, title: &str) -> Drink {
        Drink {
            id: DrinkId::new(id),
            title: title.into(),
            company_name: "Acme".into(),
            price: 12000.0,
            volume: "0.5L".into(),
            kind: "carbonated".into(),
            image: "http://x/y.png".into(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola")]));
        app
    }

    #[test]
    fn q_quits_from_list() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn a_opens_create_dialog() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert!(app.form().is_open());
    }

    #[test]
    fn typed_q_goes_into_the_form_not_quit() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        match app.form() {
            FormDialogState::Open { fields, .. } => {
                assert_eq!(fields.value(Field::Title), "q");
            }
            _ => panic!("expected open form"),
        }
    }

    #[test]
    fn escape_cancels_form() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.form().is_open());
    }

    #[test]
    fn d_opens_confirm_and_n_declines() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert!(app.confirm().is_visible());
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert!(!app.confirm().is_visible());
    }

    #[test]
    fn enter_on_default_no_declines() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.confirm().is_visible());
    }

    #[test]
    fn arrows_toggle_confirm_choice() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Left));
        match app.confirm() {
            ConfirmDialogState::Visible { selected, .. } => {
                assert_eq!(*selected, ConfirmChoice::Yes);
            }
            _ => panic!("expected visible confirm"),
        }
    }

    #[test]
    fn confirm_dialog_swallows_list_keys() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
    }

    #[test]
    fn enter_on_list_opens_edit() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.form().is_open());
        assert_eq!(app.form().title(), "Update Drink");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
