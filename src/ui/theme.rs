//! Colour palette and text styles used across the UI.
//!
//! The three widget hooks mirror the classic class names: `wrapper` is the
//! viewport border, `container` the strip background, `item` each boxed entry.

use ratatui::style::{Color, Modifier, Style};

use crate::core::scroller::Cursor;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── infinite-scroll-wrapper ────────────────────────────────
    pub fn wrapper_style(cursor: Cursor) -> Style {
        match cursor {
            Cursor::Grab => Style::default().fg(Color::Gray),
            Cursor::Grabbing => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn wrapper_hint_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── infinite-scroll-container ──────────────────────────────
    pub fn container_style() -> Style {
        Style::default().bg(Color::Reset)
    }

    // ── infinite-scroll-item ───────────────────────────────────
    pub fn item_border_style() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn item_text_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // ── page chrome ────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subheading_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
