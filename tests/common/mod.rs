//! Shared test utilities.

#![allow(dead_code)]

use drinkhub::api::worker::ApiCommand;
use drinkhub::api::{Drink, DrinkId};
use drinkhub::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn drink(id: &str, title: &str) -> Drink {
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

/// Build an `App` whose api channel is captured for inspection.
pub fn make_app() -> (App, mpsc::Receiver<ApiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let mut app = App::new();
    app.set_api_sender(tx);
    (app, rx)
}
