//! Transient notification box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use mailtriage_app::Toast;

use crate::theme::styles;

pub struct ToastView<'a> {
    toast: &'a Toast,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn icon(&self) -> &'static str {
        if self.toast.is_error() {
            "✗"
        } else {
            "✓"
        }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let style = styles::toast(self.toast.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.icon()), style),
            Span::styled(self.toast.message.clone(), style),
        ]);
        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
