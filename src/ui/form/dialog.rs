//! Dialog rendering for the create/edit form overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR,
};

use super::fields::Field;
use super::state::FormDialogState;

const DIALOG_WIDTH: u16 = 56;

// One label line and one value line per field, plus error and action rows.
const DIALOG_HEIGHT: u16 = 19;

/// Render the form dialog overlay on top of the list.
pub fn render_form_dialog(frame: &mut Frame<'_>, state: &FormDialogState) {
    let FormDialogState::Open {
        fields,
        focused,
        submitting,
        error,
        ..
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(DIALOG_HEIGHT as usize);
    for (index, field) in Field::ALL.into_iter().enumerate() {
        let is_focused = index == *focused;
        let label_style = if is_focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let value_style = if is_focused {
            Style::default().fg(PRIMARY_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(PRIMARY_TEXT)
        };

        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));

        let cursor = if is_focused && !*submitting { "▏" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("  {}{}", fields.value(field), cursor),
            value_style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(match error {
        Some(message) => Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    });
    lines.push(Line::from(""));
    lines.push(render_actions(state.submit_label(), *submitting));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_actions(submit_label: &str, submitting: bool) -> Line<'static> {
    if submitting {
        return Line::from(Span::styled(
            "  Saving…",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    let button_style = Style::default()
        .fg(PRIMARY_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" Enter: {} ", submit_label), button_style),
        Span::raw("  "),
        Span::styled(
            " Esc: Cancel ",
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}
