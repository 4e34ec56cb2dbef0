//! Dialog rendering for the delete confirmation overlay.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR};

use super::state::{ConfirmChoice, ConfirmDialogState};

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 7;

/// Render the confirmation dialog overlay. It sits above every other
/// surface, including the form dialog.
pub fn render_confirm_dialog(frame: &mut Frame<'_>, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible {
        title, selected, ..
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Drink ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Delete \"{}\"? This cannot be undone.", title),
            Style::default().fg(PRIMARY_TEXT),
        )),
        Line::from(""),
        render_buttons(*selected),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_buttons(selected: ConfirmChoice) -> Line<'static> {
    let active = |color| {
        Style::default()
            .fg(color)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    };

    let yes_style = if selected == ConfirmChoice::Yes {
        active(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let no_style = if selected == ConfirmChoice::No {
        active(PRIMARY_TEXT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };

    Line::from(vec![
        Span::raw("            "),
        Span::styled(" Yes ", yes_style),
        Span::raw("      "),
        Span::styled(" No ", no_style),
    ])
}
