//! End-to-end flows through the public API: keystrokes in, api commands out,
//! api outcomes back in.

mod common;

use common::*;
use crossterm::event::KeyCode;
use drinkhub::api::worker::{ApiCommand, ApiEvent};
use drinkhub::api::{DrinkDraft, DrinkId};
use drinkhub::ui::input::handle_key;

fn type_text(app: &mut drinkhub::ui::app::App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

// -- startup -------------------------------------------------------------------

#[test]
fn startup_refresh_then_load() {
    let (mut app, mut rx) = make_app();

    app.request_refresh();
    assert_eq!(rx.try_recv().unwrap(), ApiCommand::Refresh);
    assert!(app.store().is_refreshing());

    app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola"), drink("2", "Fanta")]));
    assert!(!app.store().is_refreshing());
    assert_eq!(app.store().len(), 2);
    assert_eq!(app.selected_drink().unwrap().title, "Cola");
}

// -- create --------------------------------------------------------------------

#[test]
fn create_flow_via_keys() {
    let (mut app, mut rx) = make_app();
    app.on_api_event(ApiEvent::Loaded(vec![]));

    handle_key(&mut app, press_key(KeyCode::Char('a')));
    assert!(app.form().is_open());

    for text in ["Ayran", "Milky", "8000", "0.33L", "still", "http://x/a.png"] {
        type_text(&mut app, text);
        handle_key(&mut app, press_key(KeyCode::Tab));
    }
    handle_key(&mut app, press_key(KeyCode::Enter));

    assert_eq!(
        rx.try_recv().unwrap(),
        ApiCommand::Create(DrinkDraft {
            title: "Ayran".into(),
            company_name: "Milky".into(),
            price: 8000.0,
            volume: "0.33L".into(),
            kind: "still".into(),
            image: "http://x/a.png".into(),
        })
    );
    assert!(app.form().is_submitting());

    // The worker confirms and then delivers the refetched collection.
    app.on_api_event(ApiEvent::Created);
    assert!(!app.form().is_open());
    assert_eq!(app.toast().unwrap().message(), "Drink added successfully");

    app.on_api_event(ApiEvent::Loaded(vec![drink("9", "Ayran")]));
    assert_eq!(app.store().len(), 1);
}

#[test]
fn invalid_price_never_reaches_the_wire() {
    let (mut app, mut rx) = make_app();

    handle_key(&mut app, press_key(KeyCode::Char('a')));
    for text in ["Ayran", "Milky", "free", "0.33L", "still", "http://x/a.png"] {
        type_text(&mut app, text);
        handle_key(&mut app, press_key(KeyCode::Tab));
    }
    handle_key(&mut app, press_key(KeyCode::Enter));

    assert!(rx.try_recv().is_err());
    assert!(app.form().is_open());
    assert!(!app.form().is_submitting());
}

#[test]
fn keys_are_ignored_while_submitting() {
    let (mut app, mut rx) = make_app();

    handle_key(&mut app, press_key(KeyCode::Char('a')));
    for text in ["Ayran", "Milky", "8000", "0.33L", "still", "http://x/a.png"] {
        type_text(&mut app, text);
        handle_key(&mut app, press_key(KeyCode::Tab));
    }
    handle_key(&mut app, press_key(KeyCode::Enter));
    let _ = rx.try_recv();

    // A second Enter while outstanding issues nothing.
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert!(rx.try_recv().is_err());

    // Typed characters do not reach the buffers either.
    type_text(&mut app, "zzz");
    app.on_api_event(ApiEvent::CreateFailed("500".into()));
    match app.form() {
        drinkhub::ui::form::FormDialogState::Open { fields, .. } => {
            assert_eq!(fields.value(drinkhub::ui::form::Field::Title), "Ayran");
            assert_eq!(fields.value(drinkhub::ui::form::Field::Image), "http://x/a.png");
        }
        _ => panic!("expected open form"),
    }
}

// -- edit ----------------------------------------------------------------------

#[test]
fn edit_flow_via_keys() {
    let (mut app, mut rx) = make_app();
    app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola"), drink("2", "Fanta")]));

    handle_key(&mut app, press_key(KeyCode::Down));
    handle_key(&mut app, press_key(KeyCode::Char('e')));
    assert_eq!(app.form().title(), "Update Drink");

    type_text(&mut app, " Zero");
    handle_key(&mut app, press_key(KeyCode::Enter));

    match rx.try_recv().unwrap() {
        ApiCommand::Update { id, draft } => {
            assert_eq!(id, DrinkId::new("2"));
            assert_eq!(draft.title, "Fanta Zero");
            assert_eq!(draft.price, 12000.0);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

// -- delete --------------------------------------------------------------------

#[test]
fn delete_flow_requires_explicit_yes() {
    let (mut app, mut rx) = make_app();
    app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola")]));

    // Enter on the default answer declines.
    handle_key(&mut app, press_key(KeyCode::Char('d')));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert!(rx.try_recv().is_err());

    // Toggling to Yes and confirming issues the delete.
    handle_key(&mut app, press_key(KeyCode::Char('d')));
    handle_key(&mut app, press_key(KeyCode::Left));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(rx.try_recv().unwrap(), ApiCommand::Delete(DrinkId::new("1")));

    app.on_api_event(ApiEvent::Deleted);
    assert_eq!(app.toast().unwrap().message(), "Drink deleted");

    app.on_api_event(ApiEvent::Loaded(vec![]));
    assert!(app.store().is_empty());
    assert_eq!(app.selected(), 0);
}

#[test]
fn y_shortcut_confirms_immediately() {
    let (mut app, mut rx) = make_app();
    app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola")]));

    handle_key(&mut app, press_key(KeyCode::Char('d')));
    handle_key(&mut app, press_key(KeyCode::Char('y')));
    assert_eq!(rx.try_recv().unwrap(), ApiCommand::Delete(DrinkId::new("1")));
    assert!(!app.confirm().is_visible());
}

// -- failure handling ------------------------------------------------------------

#[test]
fn refresh_failure_keeps_stale_data_on_screen() {
    let (mut app, mut rx) = make_app();
    app.on_api_event(ApiEvent::Loaded(vec![drink("1", "Cola")]));

    handle_key(&mut app, press_key(KeyCode::Char('r')));
    assert_eq!(rx.try_recv().unwrap(), ApiCommand::Refresh);

    app.on_api_event(ApiEvent::LoadFailed("connection refused".into()));
    assert_eq!(app.store().len(), 1);
    assert!(app.store().last_load_failed());
    assert_eq!(app.toast().unwrap().message(), "Failed to load drinks");
}
