//! Core model — items, the rendered strip, wrap math, and the scroll engine.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Offsets and
//! heights are plain `f64` units; the UI layer decides how many units make a
//! terminal row.

pub mod item;
pub mod position;
pub mod props;
pub mod scroller;
pub mod strip;
