//! Result panel: loading indicator or the displayed analysis

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mailtriage_app::{AppState, FocusPane};
use mailtriage_core::AnalysisResult;

use crate::theme::{palette, styles};

/// Braille spinner frames, advanced by the engine while a request is in flight
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame counter
pub fn spinner_frame(frame: u64) -> &'static str {
    SPINNER[(frame % SPINNER.len() as u64) as usize]
}

const EMPTY_MESSAGE: &str = "Envie um email para ver a classificação";
const LOADING_MESSAGE: &str = "Analisando email...";

pub struct ResultPanel<'a> {
    state: &'a AppState,
}

impl<'a> ResultPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Wrapped rows of the displayed result and the rows `area` shows,
    /// or `None` when no result is on screen
    pub fn content_size(&self, area: Rect) -> Option<(u16, u16)> {
        if self.state.is_submitting() {
            return None;
        }
        let result = self.state.result_view.current()?;
        let inner = styles::glass_block(false).inner(area);
        let rows = wrapped_rows(&self.result_lines(result), inner.width);
        Some((rows, inner.height))
    }

    fn result_lines(&self, result: &AnalysisResult) -> Vec<Line<'static>> {
        let mut header = vec![
            Span::styled(
                format!(" {} ", result.category),
                styles::category_badge(&result.category_slug()),
            ),
            Span::raw("  "),
            Span::styled(result.confidence_label(), styles::text_secondary()),
        ];
        if self.state.result_view.is_copied() {
            header.push(Span::styled(
                "  ✓ Copiado",
                Style::default().fg(palette::STATUS_GREEN),
            ));
        }

        let mut lines = vec![
            Line::from(header),
            Line::default(),
            section_title("Resposta sugerida"),
        ];
        lines.extend(body_lines(&result.response, styles::text_primary()));
        lines.push(Line::default());
        lines.push(section_title("Texto analisado"));
        lines.extend(body_lines(&result.original_text, styles::text_muted()));
        lines
    }
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        styles::text_secondary().add_modifier(Modifier::BOLD),
    ))
}

/// Rows the lines take when wrapped at `width`
fn wrapped_rows(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width as usize).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}

fn body_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Result;
        let mut block = styles::glass_block(focused).title(Span::styled(
            " Resultado ",
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        if focused && self.state.result_view.is_visible() {
            block = block.title_bottom(Line::from(vec![
                Span::styled(" c ", styles::keybinding()),
                Span::styled("copiar ", styles::text_muted()),
                Span::styled(" ↑↓ ", styles::keybinding()),
                Span::styled("rolar ", styles::text_muted()),
            ]));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.is_submitting() {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(self.state.loading_frame)),
                    styles::accent_bold(),
                ),
                Span::styled(LOADING_MESSAGE, styles::text_secondary()),
            ]);
            Paragraph::new(line).render(inner, buf);
            return;
        }

        let Some(result) = self.state.result_view.current() else {
            let mut lines = vec![Line::from(Span::styled(EMPTY_MESSAGE, styles::text_muted()))];
            if let Some(error) = &self.state.submission_error {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("Última tentativa falhou: {}", error),
                    Style::default().fg(palette::STATUS_RED),
                )));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        };

        let lines = self.result_lines(result);
        let content_height = wrapped_rows(&lines, inner.width);
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let max_scroll = content_height.saturating_sub(inner.height);
        let scroll = self.state.result_view.scroll.min(max_scroll);
        paragraph.scroll((scroll, 0)).render(inner, buf);
    }
}
