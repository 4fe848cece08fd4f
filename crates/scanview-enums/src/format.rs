//! Display names for enum and bit-flag values.
//!
//! `format_enum` maps a value to the name of a member of an
//! `EnumDefinition`. For flag enums the value is decomposed greedily from
//! the highest member down, so composite members (e.g. `AccessibilityModifier`
//! = `Public | Private | Protected`) win over their parts. The function is
//! total: anything it cannot name comes back as the decimal value.

use bitflags::Flags;
use tracing::trace;

use crate::definition::{EnumDefinition, EnumMember};

/// Format `value` as a member name of `definition`.
///
/// - `0` formats as the lowest member when that member's value is exactly 0,
///   otherwise as `"0"`.
/// - With `is_flags`, the value is split into member names joined by `|`,
///   listed in ascending value order. Zero-valued members never take part.
/// - If the flags do not cover every bit (or `is_flags` is false), the full
///   value is looked up as a single member.
/// - Anything else formats as the decimal value.
///
/// ```
/// use scanview_enums::{EnumDefinition, format_enum};
///
/// let modifiers: EnumDefinition = [("None", 0), ("Readonly", 1), ("Static", 2), ("Abstract", 4)]
///     .into_iter()
///     .collect();
/// assert_eq!(format_enum(6, &modifiers, true), "Static|Abstract");
/// assert_eq!(format_enum(2, &modifiers, false), "Static");
/// assert_eq!(format_enum(64, &modifiers, true), "64");
/// ```
pub fn format_enum(value: i64, definition: &EnumDefinition, is_flags: bool) -> String {
    let members = definition.sorted_members();

    if value == 0 {
        return match members.first() {
            Some(first) if first.value == 0 => first.name.clone(),
            _ => "0".to_string(),
        };
    }

    if is_flags {
        if let Some(names) = decompose_flags(value, &members) {
            return names;
        }
        trace!(value, "flags left unnamed bits, trying an exact match");
    }

    match members.iter().find(|member| member.value == value) {
        Some(member) => member.name.clone(),
        None => {
            trace!(value, "no member matches, using the numeric value");
            value.to_string()
        }
    }
}

/// Format a `bitflags` value using its type's own named flags.
pub fn format_flags<F>(flags: &F) -> String
where
    F: Flags,
    F::Bits: Into<i64>,
{
    format_enum(flags.bits().into(), &EnumDefinition::from_flags::<F>(), true)
}

/// Split `value` into flag names, or `None` if some bits have no name.
///
/// Walks `members` (sorted ascending) from the top and prepends each match,
/// so the joined names read from the lowest matched value to the highest.
fn decompose_flags(value: i64, members: &[&EnumMember]) -> Option<String> {
    let mut remaining = value;
    let mut matched: Vec<&str> = Vec::new();

    for member in members.iter().rev() {
        if remaining == 0 {
            break;
        }
        let flag = member.value;
        if flag != 0 && remaining & flag == flag {
            remaining &= !flag;
            matched.push(&member.name);
        }
    }

    if remaining != 0 {
        return None;
    }

    matched.reverse();
    Some(matched.join("|"))
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
