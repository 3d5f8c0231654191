//! Screen layout definitions for the TUI
//!
//! Wide terminals put the history in a right-hand column; narrow ones stack
//! it below the result.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this use the stacked layout
pub const WIDE_MIN_WIDTH: u16 = 90;

/// Width of the history column in the wide layout
const HISTORY_WIDTH: u16 = 38;

/// Height of the history panel in the stacked layout
const HISTORY_STACKED_HEIGHT: u16 = 8;

/// Upload mode needs: tabs, path field, file line, button
const INPUT_HEIGHT_UPLOAD: u16 = 8;

/// Text mode gets a taller editor
const INPUT_HEIGHT_TEXT: u16 = 12;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with service status
    pub header: Rect,
    /// Mode tabs, editor/picker and submit button
    pub input: Rect,
    /// Loading indicator or the displayed analysis
    pub result: Rect,
    pub history: Rect,
    /// One-line shortcut hints
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `text_mode` - Whether the text editor is shown (taller input panel)
pub fn create(area: Rect, text_mode: bool) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let input_height = if text_mode {
        INPUT_HEIGHT_TEXT
    } else {
        INPUT_HEIGHT_UPLOAD
    };

    if area.width >= WIDE_MIN_WIDTH {
        let [main, history] =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(HISTORY_WIDTH)])
                .areas(body);
        let [input, result] =
            Layout::vertical([Constraint::Length(input_height), Constraint::Min(3)]).areas(main);

        ScreenAreas {
            header,
            input,
            result,
            history,
            footer,
        }
    } else {
        let [input, result, history] = Layout::vertical([
            Constraint::Length(input_height),
            Constraint::Min(3),
            Constraint::Length(HISTORY_STACKED_HEIGHT),
        ])
        .areas(body);

        ScreenAreas {
            header,
            input,
            result,
            history,
            footer,
        }
    }
}

/// Bottom-right box for a toast of `width` columns, above the footer
pub fn toast_area(screen: Rect, width: u16) -> Rect {
    let width = width.min(screen.width);
    let height = 3.min(screen.height);
    Rect {
        x: screen.x + screen.width - width,
        y: (screen.y + screen.height).saturating_sub(height + 1).max(screen.y),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_puts_history_on_the_right() {
        let layout = create(Rect::new(0, 0, 120, 40), false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.history.width, HISTORY_WIDTH);
        assert_eq!(layout.history.x, 120 - HISTORY_WIDTH);
        assert_eq!(layout.input.height, INPUT_HEIGHT_UPLOAD);
        assert_eq!(layout.result.y, layout.input.y + layout.input.height);
    }

    #[test]
    fn test_narrow_layout_stacks_history() {
        let layout = create(Rect::new(0, 0, 80, 40), false);

        assert_eq!(layout.history.width, 80);
        assert_eq!(layout.history.height, HISTORY_STACKED_HEIGHT);
        assert!(layout.history.y > layout.result.y);
    }

    #[test]
    fn test_text_mode_has_taller_input() {
        let upload = create(Rect::new(0, 0, 120, 40), false);
        let text = create(Rect::new(0, 0, 120, 40), true);
        assert!(text.input.height > upload.input.height);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);
        assert_eq!(
            layout.header.height
                + layout.input.height
                + layout.result.height
                + layout.history.height
                + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_toast_area_bottom_right_above_footer() {
        let screen = Rect::new(0, 0, 80, 24);
        let toast = toast_area(screen, 30);
        assert_eq!(toast.x, 50);
        assert_eq!(toast.y, 20);
        assert_eq!(toast.height, 3);
    }

    #[test]
    fn test_toast_area_clamped_to_screen() {
        let screen = Rect::new(0, 0, 20, 2);
        let toast = toast_area(screen, 30);
        assert_eq!(toast.width, 20);
        assert_eq!(toast.x, 0);
        assert_eq!(toast.y, 0);
    }
}
