//! Main render/view function (View in TEA pattern)


use mailtriage_app::AppState;
use mailtriage_core::InputMode;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Toast width; narrower terminals get the full width
const TOAST_WIDTH: u16 = 48;

/// Render the complete UI
///
/// Only the result scroll limit is written back to `state`; animation frames
/// and expiry are advanced by the engine on `Tick`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let text_mode = state.input.mode() == InputMode::Text;
    let areas = layout::create(area, text_mode);

    frame.render_widget(
        widgets::MainHeader::new(&state.api_status, &state.settings.api.base_url),
        areas.header,
    );
    frame.render_widget(widgets::InputPanel::new(state), areas.input);
    let result_size = widgets::ResultPanel::new(state).content_size(areas.result);
    if let Some((content, visible)) = result_size {
        state.result_view.update_content_size(content, visible);
    }
    frame.render_widget(widgets::ResultPanel::new(state), areas.result);
    frame.render_widget(widgets::HistoryList::new(state), areas.history);
    frame.render_widget(
        widgets::KeyHints::new(state.focus, state.input.mode()),
        areas.footer,
    );

    if let Some(toast) = state.toast.current() {
        let toast_area = layout::toast_area(area, TOAST_WIDTH);
        frame.render_widget(widgets::ToastView::new(toast), toast_area);
    }
}
