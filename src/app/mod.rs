//! Application orchestration — host page, state, event loop, and input
//! handling.

pub mod event;
pub mod handler;
pub mod page;
pub mod state;
