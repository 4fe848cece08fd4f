//! Properties of `format_enum` checked over whole definitions.

use scanview_enums::known::{modifier_flags, syntax_kind};
use scanview_enums::{EnumDefinition, format_enum};

fn power_of_two_flags() -> EnumDefinition {
    [
        ("None", 0),
        ("Readonly", 1),
        ("Static", 2),
        ("Abstract", 4),
        ("Public", 8),
        ("Async", 16),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_every_non_flag_member_formats_to_its_first_name() {
    let kinds = syntax_kind();
    for member in kinds.sorted_members() {
        let name = format_enum(member.value, kinds, false);
        let first = kinds
            .members()
            .iter()
            .find(|candidate| candidate.value == member.value)
            .unwrap();
        assert_eq!(name, first.name);
    }
}

#[test]
fn test_every_subset_of_disjoint_flags_decomposes() {
    let flags = power_of_two_flags();
    let named: Vec<_> = flags
        .members()
        .iter()
        .filter(|member| member.value != 0)
        .collect();

    for mask in 1u32..(1 << named.len()) {
        let subset: Vec<_> = named
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, member)| *member)
            .collect();
        let value = subset.iter().fold(0, |acc, member| acc | member.value);
        let expected = subset
            .iter()
            .map(|member| member.name.as_str())
            .collect::<Vec<_>>()
            .join("|");

        assert_eq!(format_enum(value, &flags, true), expected, "value {value}");
    }
}

#[test]
fn test_formatted_flag_names_are_members() {
    let modifiers = modifier_flags();
    for value in [1, 7, 31, 264, 2080, 65_536, 1 << 29] {
        let formatted = format_enum(value, modifiers, true);
        for part in formatted.split('|') {
            assert!(
                modifiers.members().iter().any(|member| member.name == part),
                "{part} is not a ModifierFlags member"
            );
        }
    }
}

#[test]
fn test_json_definition_matches_pairs() {
    let from_json = EnumDefinition::from_json_str(
        r#"{"None": 0, "Readonly": 1, "Static": 2, "Abstract": 4, "Public": 8, "Async": 16, "toString": "fn"}"#,
    )
    .unwrap();
    assert_eq!(from_json, power_of_two_flags());
    assert_eq!(format_enum(12, &from_json, true), "Abstract|Public");
}
