//! JavaScript-facing API.

pub mod formatting;
pub mod tokens;

pub use formatting::{
    format_enum, format_enum_json, format_modifier_flags, format_node_flags, format_syntax_kind,
    format_token_flags,
};
pub use tokens::{ScanSession, describe_tokens};

#[cfg(test)]
#[path = "../tests/wasm_api_tests.rs"]
mod tests;
