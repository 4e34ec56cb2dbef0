//! Drink list and detail card for the body region.

use crate::api::Drink;
use crate::ui::app::App;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, PRIMARY_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let store = app.store();

    if store.never_loaded() {
        // A failed first read shows an error placeholder, never the empty
        // state.
        let (message, style) = if store.last_load_failed() {
            (
                "Could not load drinks. Press r to retry.",
                Style::default().fg(STATUS_ERROR),
            )
        } else {
            ("Loading drinks…", Style::default().fg(MUTED_TEXT))
        };
        render_placeholder(frame, area, message, style);
        return;
    }

    if store.is_empty() {
        render_placeholder(
            frame,
            area,
            "No drinks yet. Press a to add one.",
            Style::default().fg(MUTED_TEXT),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_list(frame, chunks[0], app);
    if let Some(drink) = app.selected_drink() {
        render_detail(frame, chunks[1], drink);
    }
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect, message: &str, style: Style) {
    let placeholder = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(placeholder, area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .store()
        .drinks()
        .unwrap_or_default()
        .iter()
        .map(|drink| {
            ListItem::new(Line::from(vec![
                Span::styled(drink.title.clone(), Style::default().fg(PRIMARY_TEXT)),
                Span::styled(
                    format!("  {}", drink.volume),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT));

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, drink: &Drink) {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(PRIMARY_TEXT);

    let lines = vec![
        Line::from(Span::styled(
            drink.title.clone(),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(drink.company_name.clone(), label)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Price: ", label),
            Span::styled(format!("{} UZS", format_price(drink.price)), value),
        ]),
        Line::from(vec![
            Span::styled("Volume: ", label),
            Span::styled(drink.volume.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::styled(drink.kind.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(drink.image.clone(), value),
        ]),
        Line::from(""),
        // Inert decoration; ratings are not stored anywhere.
        Line::from(Span::styled("☆ ☆ ☆ ☆ ☆", label)),
    ];

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(detail, area);
}

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}
