use super::*;

#[test]
fn test_syntax_kind_names() {
    assert_eq!(format_syntax_kind(syntax_kind::UNKNOWN), "Unknown");
    assert_eq!(format_syntax_kind(syntax_kind::END_OF_FILE_TOKEN), "EndOfFileToken");
    assert_eq!(format_syntax_kind(syntax_kind::IDENTIFIER), "Identifier");
    assert_eq!(format_syntax_kind(27), "SemicolonToken");
    assert_eq!(format_syntax_kind(115), "VarKeyword");
    assert_eq!(format_syntax_kind(syntax_kind::LAST_TOKEN), "OfKeyword");
}

#[test]
fn test_syntax_kind_prefers_kind_over_marker() {
    // EqualsToken is also FirstAssignment; FirstToken aliases Unknown.
    assert_eq!(format_syntax_kind(64), "EqualsToken");
    assert_eq!(format_syntax_kind(79), "CaretEqualsToken");
    assert_eq!(format_syntax_kind(83), "BreakKeyword");
}

#[test]
fn test_syntax_kind_out_of_range() {
    assert_eq!(format_syntax_kind(9000), "9000");
}

#[test]
fn test_every_token_kind_has_a_name() {
    for kind in 0..=syntax_kind::LAST_TOKEN {
        let name = format_syntax_kind(kind);
        assert!(
            name.parse::<u16>().is_err(),
            "kind {kind} formatted as a number"
        );
        assert!(!name.starts_with("First") && !name.starts_with("Last"));
    }
}

#[test]
fn test_token_flags() {
    assert_eq!(format_token_flags(TokenFlags::empty()), "None");
    assert_eq!(format_token_flags(TokenFlags::PrecedingLineBreak), "PrecedingLineBreak");
    assert_eq!(
        format_token_flags(TokenFlags::HexSpecifier | TokenFlags::ContainsSeparator),
        "HexSpecifier|ContainsSeparator"
    );
    assert_eq!(
        format_token_flags(TokenFlags::BinarySpecifier | TokenFlags::OctalSpecifier),
        "BinaryOrOctalSpecifier"
    );
}

#[test]
fn test_modifier_flags() {
    assert_eq!(
        format_modifier_flags(ModifierFlags::Export | ModifierFlags::Default),
        "ExportDefault"
    );
    assert_eq!(
        format_modifier_flags(ModifierFlags::Readonly | ModifierFlags::Static),
        "Readonly|Static"
    );
    assert_eq!(
        format_modifier_flags(
            ModifierFlags::Public
                | ModifierFlags::Private
                | ModifierFlags::Protected
                | ModifierFlags::Readonly
        ),
        "AccessibilityModifier|Readonly"
    );
}

#[test]
fn test_unnamed_modifier_bits() {
    let flags = ModifierFlags::from_bits_retain(ModifierFlags::Static.bits() | (1 << 20));
    assert_eq!(format_modifier_flags(flags), (256 | (1 << 20)).to_string());
}

#[test]
fn test_node_flags() {
    assert_eq!(format_node_flags(NodeFlags::Let), "Let");
    assert_eq!(
        format_node_flags(NodeFlags::Let | NodeFlags::Const | NodeFlags::Using),
        "BlockScoped"
    );
    assert_eq!(
        format_node_flags(NodeFlags::HasImplicitReturn | NodeFlags::HasExplicitReturn),
        "ReachabilityCheckFlags"
    );
}

#[test]
fn test_known_enum_lookup() {
    let kinds = known_enum("syntaxkind").unwrap();
    assert_eq!(kinds.name, "SyntaxKind");
    assert!(!kinds.is_flags);
    assert_eq!(kinds.format(80), "Identifier");

    let modifiers = known_enum("ModifierFlags").unwrap();
    assert!(modifiers.is_flags);
    assert_eq!(modifiers.format(264), "Readonly|Static");

    assert!(known_enum("EmitFlags").is_none());
}

#[test]
fn test_known_definitions_are_shared() {
    assert!(std::ptr::eq(syntax_kind(), syntax_kind()));
    assert_eq!(token_flags().members()[0].name, "None");
}

#[test]
fn test_node_flags_high_bits() {
    let node = |bits: u32| format_enum(i64::from(bits), node_flags(), true);
    assert_eq!(node(1 << 22), "PossiblyContainsDynamicImport");
    assert_eq!(node(1 << 23), "PossiblyContainsImportMeta");
    assert_eq!(node(1 << 24), "JSDoc");
    assert_eq!(node(1 << 28), "TypeCached");
    assert_eq!(node(1 << 29), "Deprecated");
    assert_eq!(
        format_node_flags(NodeFlags::JSDoc | NodeFlags::JsonFile),
        "JSDoc|JsonFile"
    );
}

#[test]
fn test_node_flags_composites() {
    assert_eq!(
        format_node_flags(NodeFlags::YieldContext | NodeFlags::AwaitContext),
        "TypeExcludesFlags"
    );
    assert_eq!(
        format_node_flags(
            NodeFlags::PossiblyContainsDynamicImport | NodeFlags::PossiblyContainsImportMeta
        ),
        "PermanentlySetIncrementalFlags"
    );
    assert_eq!(format_node_flags(NodeFlags::ContextFlags), "ContextFlags");
    // Identifier aliases share bits with earlier members; the later
    // declaration is reached first when decomposing.
    assert_eq!(
        format_node_flags(NodeFlags::ContainsThis),
        "IdentifierHasExtendedUnicodeEscape"
    );
    assert_eq!(format_enum(256, node_flags(), false), "ContainsThis");
}

#[test]
fn test_modifier_flags_jsdoc_bits() {
    assert_eq!(format_modifier_flags(ModifierFlags::JSDocPublic), "JSDocPublic");
    assert_eq!(format_modifier_flags(ModifierFlags::JSDocPrivate), "JSDocPrivate");
    assert_eq!(format_modifier_flags(ModifierFlags::JSDocProtected), "JSDocProtected");
    assert_eq!(format_modifier_flags(ModifierFlags::JSDocReadonly), "JSDocReadonly");
    assert_eq!(format_modifier_flags(ModifierFlags::JSDocOverride), "JSDocOverride");
    assert_eq!(
        format_modifier_flags(
            ModifierFlags::JSDocReadonly | ModifierFlags::HasComputedJSDocModifiers
        ),
        "JSDocReadonly|HasComputedJSDocModifiers"
    );
}

#[test]
fn test_modifier_flags_composites() {
    assert_eq!(
        format_modifier_flags(ModifierFlags::JSDocCacheOnlyModifiers),
        "JSDocCacheOnlyModifiers"
    );
    assert_eq!(format_modifier_flags(ModifierFlags::All), "All");
    assert_eq!(format_modifier_flags(ModifierFlags::Modifier), "Modifier");
    // Same bits as `All`, which is declared later and reached first.
    assert_eq!(ModifierFlags::NonCacheOnlyModifiers, ModifierFlags::All);
    assert_eq!(
        format_modifier_flags(ModifierFlags::NonCacheOnlyModifiers),
        "All"
    );
    assert_eq!(
        ModifierFlags::Modifier | ModifierFlags::Decorator,
        ModifierFlags::All
    );
}

#[test]
fn test_contextual_keyword_markers() {
    let names: Vec<&str> = syntax_kind()
        .members()
        .iter()
        .filter(|member| member.name.ends_with("ContextualKeyword"))
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(names, ["FirstContextualKeyword", "LastContextualKeyword"]);
    assert_eq!(format_syntax_kind(128), "AbstractKeyword");
}
