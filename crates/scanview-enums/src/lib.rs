//! Enum and bit-flag name formatting.
//!
//! This crate renders numeric enum values as display names, the way a
//! debugger shows `SyntaxKind` or `ModifierFlags` values:
//! - `EnumDefinition` - an ordered list of named integer constants
//! - `format_enum` - single-value and flag-decomposition formatting
//! - `compare_values` / `stable_sort` - the ordering helpers behind it
//! - `known` - built-in TypeScript scanner enums (`SyntaxKind`, `TokenFlags`, ...)

pub mod comparison;
pub use comparison::{compare_values, stable_sort};

pub mod definition;
pub use definition::{EnumDefinition, EnumDefinitionError, EnumMember};

pub mod format;
pub use format::{format_enum, format_flags};

pub mod known;
