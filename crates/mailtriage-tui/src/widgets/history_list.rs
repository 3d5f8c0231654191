//! History panel: the most recent analyses, newest first

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use mailtriage_app::{AppState, FocusPane};
use mailtriage_core::HistoryEntry;

use crate::theme::styles;

const EMPTY_MESSAGE: &str = "Nenhuma análise realizada ainda";
const HIGHLIGHT_SYMBOL: &str = "▶ ";

pub struct HistoryList<'a> {
    state: &'a AppState,
}

impl<'a> HistoryList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn item(entry: &HistoryEntry, width: usize) -> ListItem<'static> {
        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", entry.category),
                styles::category_badge(&entry.category_slug()),
            ),
            Span::raw(" "),
            Span::styled(entry.date.clone(), styles::text_muted()),
        ]);
        let preview = Line::from(Span::styled(
            truncate_to_width(&entry.preview, width),
            styles::text_secondary(),
        ));
        ListItem::new(Text::from(vec![header, preview]))
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::History;
        let count = self.state.history.len();
        let title = if count == 0 {
            " Histórico ".to_string()
        } else {
            format!(" Histórico ({}) ", count)
        };
        let mut block = styles::glass_block(focused).title(Span::styled(
            title,
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        if focused && count > 0 {
            block = block.title_bottom(Line::from(vec![
                Span::styled(" Enter ", styles::keybinding()),
                Span::styled("abrir ", styles::text_muted()),
                Span::styled(" ^D ", styles::keybinding()),
                Span::styled("limpar ", styles::text_muted()),
            ]));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.history.is_empty() {
            Paragraph::new(Span::styled(EMPTY_MESSAGE, styles::text_muted()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let preview_width = (inner.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.len());
        let items: Vec<ListItem> = self
            .state
            .history
            .entries()
            .iter()
            .map(|entry| Self::item(entry, preview_width))
            .collect();

        let mut list = List::new(items).highlight_symbol(HIGHLIGHT_SYMBOL);
        if focused {
            list = list.highlight_style(styles::focused_selected());
        }

        let mut list_state = ListState::default().with_selected(Some(self.state.history_selected));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

/// Cut `text` to at most `width` columns on one line, ending in "…" when cut
fn truncate_to_width(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let flat = flat.trim();

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            // Make room for the ellipsis
            while used + 1 > width {
                match out.pop() {
                    Some(last) => used -= last.width().unwrap_or(0),
                    None => return out,
                }
            }
            out.push('…');
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}
