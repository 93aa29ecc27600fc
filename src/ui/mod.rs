//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* scroll engine and turns its strip and offset
//! into cells on the terminal.  No state is mutated here.

pub mod layout;
pub mod scroll_widget;
pub mod theme;
