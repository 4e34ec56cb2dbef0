use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::render_body;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK};
use crate::ui::toast::{Toast, ToastKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    render_body(frame, body, app);
    frame.render_widget(Footer::new().widget(app, footer.width), footer);

    // Dialogs stack above the list; confirmation wins over the form.
    render_form_dialog(frame, app.form());
    render_confirm_dialog(frame, app.confirm());

    if let Some(toast) = app.toast() {
        render_toast(frame, body, toast);
    }
}

/// Transient notification pinned to the bottom-right of the body.
fn render_toast(frame: &mut Frame<'_>, body: Rect, toast: &Toast) {
    let color = match toast.kind() {
        ToastKind::Success => STATUS_OK,
        ToastKind::Error => STATUS_ERROR,
    };

    let width = (toast.message().chars().count() as u16 + 4).min(body.width);
    let height = 3.min(body.height);
    let area = Rect {
        x: body.x + body.width.saturating_sub(width + 1),
        y: body.y + body.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", toast.message()),
        Style::default().fg(color),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, area);
}
