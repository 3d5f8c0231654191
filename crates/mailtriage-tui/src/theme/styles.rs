//! Semantic style builders

use mailtriage_core::ToastKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Shortcut key in hint lines
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - focused+selected rows and the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_DISABLED_BG)
    }
}

// --- Category badges ---

/// Badge style keyed by the lower-cased category slug
pub fn category_badge(slug: &str) -> Style {
    let bg = match slug {
        "produtivo" => palette::CATEGORY_PRODUCTIVE,
        "improdutivo" => palette::CATEGORY_UNPRODUCTIVE,
        _ => palette::CATEGORY_OTHER,
    };
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

// --- Toasts ---
pub fn toast(kind: ToastKind) -> Style {
    let fg = match kind {
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Error => palette::STATUS_RED,
    };
    Style::default().fg(fg).bg(palette::TOAST_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}
