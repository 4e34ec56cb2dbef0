use crate::api::worker;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the UI until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);

    // The api worker reports outcomes through the same channel the input
    // thread uses, so the main loop has a single source of events.
    let event_tx = events.sender();
    let api_sender = worker::spawn(&config.api, move |event| {
        let _ = event_tx.send(AppEvent::Api(event));
    })
    .context("failed to start api worker")?;

    let mut app = App::new();
    app.set_api_sender(api_sender);
    app.request_refresh();
    info!(base_url = %config.api.base_url, "session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
