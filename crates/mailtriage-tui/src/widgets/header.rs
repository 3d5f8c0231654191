//! Header bar: title and classification service status

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use mailtriage_app::ApiStatus;

use crate::theme::{palette, styles};

/// Title on the left, service status on the right
pub struct MainHeader<'a> {
    api_status: &'a ApiStatus,
    base_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_status: &'a ApiStatus, base_url: &'a str) -> Self {
        Self {
            api_status,
            base_url,
        }
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        match self.api_status {
            ApiStatus::Unknown => vec![Span::styled("○ API", styles::text_muted())],
            ApiStatus::Offline => vec![Span::styled(
                "● API offline",
                Style::default().fg(palette::STATUS_RED),
            )],
            ApiStatus::Online(health) => {
                let mut spans = vec![Span::styled(
                    "● API online",
                    Style::default().fg(palette::STATUS_GREEN),
                )];
                let flags = [
                    ("modelo", health.classifier_loaded),
                    ("IA", health.openai_configured),
                ];
                for (label, flag) in flags {
                    if let Some(on) = flag {
                        spans.push(Span::styled(
                            format!("  {} {}", label, if on { "✓" } else { "✗" }),
                            styles::text_secondary(),
                        ));
                    }
                }
                spans
            }
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("✉ mailtriage", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("Classificador de Emails", styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let mut right_spans = self.status_spans();
        right_spans.push(Span::styled(format!("  {} ", self.base_url), styles::text_muted()));
        let mut right = Line::from(right_spans);

        // Drop the URL first when space runs out
        if left_width + right.width() as u16 > inner.width {
            right = Line::from(self.status_spans());
        }
        let right_width = (right.width() as u16).min(inner.width);

        buf.set_line(inner.x, inner.y, &left, inner.width);
        if left_width + right_width < inner.width {
            buf.set_line(
                inner.x + inner.width - right_width,
                inner.y,
                &right,
                right_width,
            );
        }
    }
}
