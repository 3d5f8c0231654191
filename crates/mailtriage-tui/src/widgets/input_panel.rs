//! Input panel: mode tabs, file picker or text editor, submit button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use mailtriage_app::{AppState, FocusPane};
use mailtriage_core::InputMode;
use mailtriage_core::validation::MAX_FILE_SIZE;

use super::result_view::spinner_frame;
use crate::theme::styles;

const SUBMIT_LABEL: &str = "Analisar Email";
const SUBMITTING_LABEL: &str = "Analisando...";
const TEXT_PLACEHOLDER: &str = "Cole aqui o conteúdo do email...";
const CURSOR: &str = "▏";

/// The panel the user composes a submission in
pub struct InputPanel<'a> {
    state: &'a AppState,
}

impl<'a> InputPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focused(&self) -> bool {
        self.state.focus == FocusPane::Input
    }

    fn tabs_line(&self) -> Line<'static> {
        let active = self.state.input.mode();
        let tab = |mode: InputMode, key: &str| {
            let style = if mode == active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            vec![
                Span::styled(format!(" {} ", mode.label()), style),
                Span::styled(format!(" {} ", key), styles::keybinding()),
            ]
        };

        let mut spans = tab(InputMode::Upload, "F1");
        spans.push(Span::raw(" "));
        spans.extend(tab(InputMode::Text, "F2"));
        Line::from(spans)
    }

    fn upload_lines(&self) -> Vec<Line<'static>> {
        let input = &self.state.input;
        let mut path_spans = vec![
            Span::styled("Arquivo: ", styles::text_secondary()),
            Span::styled(input.path_input().to_string(), styles::text_primary()),
        ];
        if self.focused() {
            path_spans.push(Span::styled(CURSOR, styles::accent_bold()));
        }

        let selected = match input.file() {
            Some(file) => Line::from(vec![
                Span::styled(file.display_name(), styles::text_primary()),
                Span::styled(format!("  ({})", format_size(file.size)), styles::text_muted()),
            ]),
            None => Line::from(Span::styled(
                format!(
                    "Arraste um arquivo .txt ou .pdf (máx. {})",
                    format_size(MAX_FILE_SIZE)
                ),
                styles::text_muted(),
            )),
        };

        vec![Line::from(path_spans), selected]
    }

    fn render_text_editor(&self, area: Rect, buf: &mut Buffer) {
        let text = self.state.input.text();
        if text.is_empty() {
            let mut spans = vec![Span::styled(
                TEXT_PLACEHOLDER,
                styles::text_muted().add_modifier(Modifier::ITALIC),
            )];
            if self.focused() {
                spans.insert(0, Span::styled(CURSOR, styles::accent_bold()));
            }
            Paragraph::new(Line::from(spans)).render(area, buf);
            return;
        }

        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary())))
            .collect();
        if self.focused() {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(CURSOR, styles::accent_bold()));
            }
        }

        // Keep the end of the text (where typing happens) in view
        let wrapped = wrapped_height(text, area.width);
        let scroll = wrapped.saturating_sub(area.height);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }

    fn button_line(&self) -> Line<'static> {
        if self.state.is_submitting() {
            let frame = spinner_frame(self.state.loading_frame);
            return Line::from(vec![
                Span::styled(format!(" {} ", frame), styles::accent_bold()),
                Span::styled(format!("{} ", SUBMITTING_LABEL), styles::button(false)),
            ]);
        }

        let enabled = self.state.submit_enabled();
        let mut spans = vec![Span::styled(
            format!(" {} ", SUBMIT_LABEL),
            styles::button(enabled),
        )];
        if enabled {
            spans.push(Span::styled(" Ctrl+S", styles::keybinding()));
        }
        Line::from(spans)
    }
}

impl Widget for InputPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused()).title(Span::styled(
            " Entrada ",
            if self.focused() {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.tabs_line(), inner.width);

        let body = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 3);
        match self.state.input.mode() {
            InputMode::Upload => {
                Paragraph::new(self.upload_lines()).render(body, buf);
            }
            InputMode::Text => self.render_text_editor(body, buf),
        }

        let button_row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        Paragraph::new(self.button_line())
            .alignment(Alignment::Right)
            .style(Style::default())
            .render(button_row, buf);
    }
}

/// Human-readable byte size
fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Rows the text occupies when wrapped at `width` (plus the cursor cell)
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| (line.width() + 1).div_ceil(width).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}
