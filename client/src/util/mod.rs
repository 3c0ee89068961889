//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. `render`, `compose`
//! and `gesture` are pure; `storage` touches localStorage under `hydrate`.

pub mod compose;
pub mod gesture;
pub mod render;
pub mod storage;
