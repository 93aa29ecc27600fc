//! Input handling — maps key, mouse and frame events to widget hooks.
//!
//! Terminal rows are converted to units here, so the engine only ever sees
//! unit positions and deltas.  Touch input reaches us as ordinary left-button
//! down/drag/up events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::event::AppEvent;
use super::state::AppState;
use crate::config::Action;
use crate::core::scroller::ScrollInput;
use crate::ui::layout::{point_in_rect, PageLayout};
use crate::ui::scroll_widget::viewport_rect;

/// Route one event to its handler.
pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(k) => handle_key(state, k),
        AppEvent::Mouse(m) => handle_mouse(state, m),
        AppEvent::Resize(w, h) => handle_resize(state, w, h),
        AppEvent::Frame => handle_frame(state),
    }
}

/// Advance every widget by one animation frame.
pub fn handle_frame(state: &mut AppState) {
    for panel in &mut state.page.panels {
        panel.scroll.on_frame();
    }
}

pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.terminal_area = Rect::new(0, 0, width, height);
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    let step = state.config.key_step;
    let target = state.hovered.unwrap_or(0);
    match action {
        Action::Quit => state.should_quit = true,
        Action::ScrollUp => {
            if let Some(scroll) = state.page.panel_mut(target) {
                scroll.wheel(-step);
            }
        }
        Action::ScrollDown => {
            if let Some(scroll) = state.page.panel_mut(target) {
                scroll.wheel(step);
            }
        }
    }
}

/// Process a mouse event: hover tracking, wheel, and press/drag/release.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let under_pointer = panel_at(state, mouse.column, mouse.row);
    let pointer_y = f64::from(mouse.row) * state.page.units_per_row();

    match mouse.kind {
        MouseEventKind::Moved => {
            update_hover(state, under_pointer);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            update_hover(state, under_pointer);
            state.pointer_owner = under_pointer;
            if let Some(scroll) = under_pointer.and_then(|i| state.page.panel_mut(i)) {
                scroll.pointer_down(pointer_y);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            update_hover(state, under_pointer);
            if let Some(scroll) = state.pointer_owner.and_then(|i| state.page.panel_mut(i)) {
                scroll.pointer_move(pointer_y);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let owner = state.pointer_owner.take();
            if let Some(scroll) = owner.and_then(|i| state.page.panel_mut(i)) {
                scroll.pointer_up();
            }
            update_hover(state, under_pointer);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let wheel_delta = if mouse.kind == MouseEventKind::ScrollDown {
                state.config.wheel_step
            } else {
                -state.config.wheel_step
            };
            if let Some(scroll) = under_pointer.and_then(|i| state.page.panel_mut(i)) {
                scroll.wheel(wheel_delta);
                tracing::trace!(wheel_delta, offset = scroll.offset(), "wheel");
            }
        }
        _ => {}
    }
}

/// Screen rectangles of every panel's viewport, in panel order.
pub fn viewports(state: &AppState) -> Vec<Rect> {
    let layout = PageLayout::from_area(state.terminal_area, state.page.len());
    layout
        .columns
        .iter()
        .zip(&state.page.panels)
        .map(|(column, panel)| viewport_rect(panel.scroll.props(), column.widget_area))
        .collect()
}

fn panel_at(state: &AppState, x: u16, y: u16) -> Option<usize> {
    viewports(state)
        .into_iter()
        .position(|rect| point_in_rect(rect, x, y))
}

/// Fire leave/enter hooks when the pointer crosses a viewport edge.
fn update_hover(state: &mut AppState, under_pointer: Option<usize>) {
    if state.hovered == under_pointer {
        return;
    }
    if let Some(scroll) = state.hovered.and_then(|i| state.page.panel_mut(i)) {
        scroll.on_hover_change(false);
    }
    if let Some(scroll) = under_pointer.and_then(|i| state.page.panel_mut(i)) {
        scroll.on_hover_change(true);
    }
    state.hovered = under_pointer;
}
