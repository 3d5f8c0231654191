//! Footer line listing the shortcuts for the focused pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use mailtriage_app::FocusPane;
use mailtriage_core::InputMode;

use crate::theme::styles;

pub struct KeyHints {
    focus: FocusPane,
    mode: InputMode,
}

impl KeyHints {
    pub fn new(focus: FocusPane, mode: InputMode) -> Self {
        Self { focus, mode }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "painel"), ("^S", "analisar")];
        match self.focus {
            FocusPane::Input => match self.mode {
                InputMode::Upload => {
                    hints.push(("Enter", "selecionar"));
                    hints.push(("F2", "texto"));
                }
                InputMode::Text => {
                    hints.push(("^L", "limpar"));
                    hints.push(("F1", "upload"));
                }
            },
            FocusPane::Result => {
                hints.push(("c", "copiar"));
                hints.push(("n", "nova análise"));
            }
            FocusPane::History => {
                hints.push(("Enter", "abrir"));
                hints.push(("^D", "limpar"));
            }
        }
        hints.push(("^N", "nova"));
        hints.push(("^Q", "sair"));
        hints
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
