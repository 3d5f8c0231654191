//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const TOAST_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Foreground on accent-colored backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Button gradient (approximate) ---
pub const BUTTON_BG: Color = Color::Rgb(37, 99, 235);
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(45, 51, 59);

// --- Category badges ---
pub const CATEGORY_PRODUCTIVE: Color = Color::Rgb(16, 185, 129);
pub const CATEGORY_UNPRODUCTIVE: Color = Color::Rgb(234, 179, 8);
pub const CATEGORY_OTHER: Color = Color::Rgb(99, 102, 241);
