use super::*;

fn definition(pairs: &[(&str, i64)]) -> EnumDefinition {
    pairs.iter().map(|&(name, value)| (name, value)).collect()
}

fn modifiers() -> EnumDefinition {
    definition(&[
        ("None", 0),
        ("Readonly", 1),
        ("Static", 2),
        ("Abstract", 4),
        ("Public", 8),
    ])
}

// =============================================================================
// Single values
// =============================================================================

#[test]
fn test_exact_member_names() {
    let kinds = definition(&[("Unknown", 0), ("Identifier", 80), ("EqualsToken", 64)]);
    for member in kinds.members() {
        assert_eq!(format_enum(member.value, &kinds, false), member.name);
    }
}

#[test]
fn test_unknown_value_is_decimal() {
    let def = definition(&[("A", 1), ("B", 2)]);
    assert_eq!(format_enum(9999, &def, false), "9999");
    assert_eq!(format_enum(-3, &def, false), "-3");
}

#[test]
fn test_negative_member() {
    let def = definition(&[("Less", -1), ("Equal", 0), ("Greater", 1)]);
    assert_eq!(format_enum(-1, &def, false), "Less");
    assert_eq!(format_enum(0, &def, false), "0");
}

#[test]
fn test_first_declared_alias_wins() {
    let def = definition(&[("Zero", 0), ("None", 0), ("A", 1), ("FirstA", 1)]);
    assert_eq!(format_enum(0, &def, false), "Zero");
    assert_eq!(format_enum(1, &def, false), "A");
}

#[test]
fn test_declaration_order_does_not_need_to_be_sorted() {
    let def = definition(&[("C", 3), ("None", 0), ("A", 1)]);
    assert_eq!(format_enum(0, &def, false), "None");
    assert_eq!(format_enum(3, &def, false), "C");
}

// =============================================================================
// Zero
// =============================================================================

#[test]
fn test_zero_with_zero_member() {
    assert_eq!(format_enum(0, &modifiers(), false), "None");
    assert_eq!(format_enum(0, &modifiers(), true), "None");
}

#[test]
fn test_zero_without_zero_member() {
    let def = definition(&[("A", 1), ("B", 2)]);
    assert_eq!(format_enum(0, &def, false), "0");
    assert_eq!(format_enum(0, &def, true), "0");
}

#[test]
fn test_zero_uses_lowest_member_only() {
    // The lowest member is negative, so zero is not named even though a
    // zero member exists.
    let def = definition(&[("Zero", 0), ("Negative", -4)]);
    assert_eq!(format_enum(0, &def, false), "0");
}

#[test]
fn test_empty_definition() {
    let def = EnumDefinition::new();
    assert_eq!(format_enum(0, &def, true), "0");
    assert_eq!(format_enum(5, &def, true), "5");
    assert_eq!(format_enum(5, &def, false), "5");
}

// =============================================================================
// Flags
// =============================================================================

#[test]
fn test_single_flag() {
    assert_eq!(format_enum(4, &modifiers(), true), "Abstract");
}

#[test]
fn test_disjoint_flags_join_in_ascending_order() {
    assert_eq!(format_enum(12, &modifiers(), true), "Abstract|Public");
    assert_eq!(format_enum(3, &modifiers(), true), "Readonly|Static");
    assert_eq!(format_enum(15, &modifiers(), true), "Readonly|Static|Abstract|Public");
}

#[test]
fn test_composite_member_preferred() {
    let def = definition(&[
        ("None", 0),
        ("Public", 1),
        ("Private", 2),
        ("Protected", 4),
        ("Readonly", 8),
        ("NonPublicAccessibilityModifier", 6),
        ("AccessibilityModifier", 7),
    ]);
    assert_eq!(format_enum(7, &def, true), "AccessibilityModifier");
    assert_eq!(format_enum(6, &def, true), "NonPublicAccessibilityModifier");
    assert_eq!(format_enum(15, &def, true), "AccessibilityModifier|Readonly");
    assert_eq!(format_enum(10, &def, true), "Private|Readonly");
}

#[test]
fn test_unnamed_bits_fall_back_to_decimal() {
    assert_eq!(format_enum(16, &modifiers(), true), "16");
    // Named bits do not rescue a value with an unnamed bit.
    assert_eq!(format_enum(17, &modifiers(), true), "17");
}

#[test]
fn test_flags_without_zero_member() {
    let def = definition(&[("A", 1), ("B", 2)]);
    assert_eq!(format_enum(3, &def, true), "A|B");
}

#[test]
fn test_failed_decomposition_checks_full_value() {
    // -1 decomposes into A and B but leaves unnamed high bits, so the full
    // value is looked up and matches `All`.
    let def = definition(&[("None", 0), ("A", 1), ("B", 2), ("All", -1)]);
    assert_eq!(format_enum(-1, &def, true), "All");
    assert_eq!(format_enum(-2, &def, true), "-2");
}

#[test]
fn test_non_flag_mode_does_not_decompose() {
    assert_eq!(format_enum(12, &modifiers(), false), "12");
}

#[test]
fn test_formatting_is_repeatable() {
    let def = modifiers();
    let first = format_enum(10, &def, true);
    let second = format_enum(10, &def, true);
    assert_eq!(first, "Static|Public");
    assert_eq!(first, second);
}

#[test]
fn test_format_flags_uses_bitflags_names() {
    bitflags::bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        struct Access: u16 {
            const NONE = 0;
            const READ = 1 << 0;
            const WRITE = 1 << 1;
            const EXECUTE = 1 << 2;
        }
    }

    assert_eq!(format_flags(&Access::empty()), "NONE");
    assert_eq!(format_flags(&(Access::READ | Access::EXECUTE)), "READ|EXECUTE");
    assert_eq!(format_flags(&Access::from_bits_retain(1 << 8)), "256");
}
