use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, PRIMARY_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, width: u16) -> Paragraph<'static> {
        let hints = if app.confirm().is_visible() {
            " ←/→: Choose │ Enter: Confirm │ Esc: Cancel"
        } else if app.form().is_open() {
            " Tab: Next Field │ Enter: Submit │ Esc: Cancel"
        } else {
            " ↑/↓: Select │ a: Add │ e: Edit │ d: Delete │ r: Refresh │ q: Quit"
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let content_width = width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
