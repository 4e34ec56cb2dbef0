use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, PRIMARY_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(PRIMARY_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let count = match app.store().drinks() {
            Some(drinks) => format!("{} drinks", drinks.len()),
            None => "not loaded".to_string(),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Drinks Management", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
        ];
        if app.store().is_refreshing() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("refreshing…", Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
