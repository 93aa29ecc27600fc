//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use super::page::HostPage;
use crate::config::AppConfig;

/// Top-level application state.
pub struct AppState {
    /// The demo page and its widget instances.
    pub page: HostPage,
    /// User configuration (bindings, input tuning).
    pub config: AppConfig,
    /// Last known terminal size, refreshed on every draw.
    pub terminal_area: Rect,
    /// Panel currently under the pointer.
    pub hovered: Option<usize>,
    /// Panel that received the last button press; it keeps receiving
    /// pointer moves until release.
    pub pointer_owner: Option<usize>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(page: HostPage, config: AppConfig) -> Self {
        Self {
            page,
            config,
            terminal_area: Rect::default(),
            hovered: None,
            pointer_owner: None,
            should_quit: false,
        }
    }
}
