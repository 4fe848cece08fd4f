//! WebAssembly bindings for scanview.
//!
//! The browser host owns the TypeScript scanner and the editor. These
//! bindings name what the scanner reports and compute the ranges the host
//! highlights:
//! - `formatEnum` and the per-enum helpers (`formatSyntaxKind`, ...)
//! - `ScanSession` / `describeTokens` for the token list

use wasm_bindgen::prelude::*;

pub mod wasm_api;

/// Install the panic hook so panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
