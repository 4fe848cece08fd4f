//! Common types for the scanview token visualizer.
//!
//! This crate provides the position types shared by the token list, the
//! CLI and the WASM bindings:
//! - `LineMap` for byte offset <-> line/column conversion
//! - `Position` (0-based) and `Selection` (1-based, editor facing)

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position, Selection};
