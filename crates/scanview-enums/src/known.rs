//! Built-in definitions for the TypeScript scanner enums.
//!
//! The values follow the TypeScript compiler's own enums, so kinds and flags
//! reported by a TypeScript scanner running in the host format directly:
//!
//! - `syntax_kind()` - token kinds produced by the scanner (not node kinds)
//! - `TokenFlags` - per-token scanner flags
//! - `ModifierFlags` - declaration modifiers
//! - `NodeFlags` - parser node flags
//!
//! Definitions are built once and shared.

use std::sync::OnceLock;

use crate::definition::EnumDefinition;
use crate::format::format_enum;

/// Token kind constants the token list needs by value.
pub mod syntax_kind {
    pub const UNKNOWN: u16 = 0;
    pub const END_OF_FILE_TOKEN: u16 = 1;
    pub const IDENTIFIER: u16 = 80;
    pub const LAST_TOKEN: u16 = 165;
}

/// `SyntaxKind` token members in declaration order.
const SYNTAX_KIND_MEMBERS: &[(&str, i64)] = &[
    ("Unknown", 0),
    ("EndOfFileToken", 1),
    ("SingleLineCommentTrivia", 2),
    ("MultiLineCommentTrivia", 3),
    ("NewLineTrivia", 4),
    ("WhitespaceTrivia", 5),
    ("ShebangTrivia", 6),
    ("ConflictMarkerTrivia", 7),
    ("NonTextFileMarkerTrivia", 8),
    ("NumericLiteral", 9),
    ("BigIntLiteral", 10),
    ("StringLiteral", 11),
    ("JsxText", 12),
    ("JsxTextAllWhiteSpaces", 13),
    ("RegularExpressionLiteral", 14),
    ("NoSubstitutionTemplateLiteral", 15),
    ("TemplateHead", 16),
    ("TemplateMiddle", 17),
    ("TemplateTail", 18),
    ("OpenBraceToken", 19),
    ("CloseBraceToken", 20),
    ("OpenParenToken", 21),
    ("CloseParenToken", 22),
    ("OpenBracketToken", 23),
    ("CloseBracketToken", 24),
    ("DotToken", 25),
    ("DotDotDotToken", 26),
    ("SemicolonToken", 27),
    ("CommaToken", 28),
    ("QuestionDotToken", 29),
    ("LessThanToken", 30),
    ("LessThanSlashToken", 31),
    ("GreaterThanToken", 32),
    ("LessThanEqualsToken", 33),
    ("GreaterThanEqualsToken", 34),
    ("EqualsEqualsToken", 35),
    ("ExclamationEqualsToken", 36),
    ("EqualsEqualsEqualsToken", 37),
    ("ExclamationEqualsEqualsToken", 38),
    ("EqualsGreaterThanToken", 39),
    ("PlusToken", 40),
    ("MinusToken", 41),
    ("AsteriskToken", 42),
    ("AsteriskAsteriskToken", 43),
    ("SlashToken", 44),
    ("PercentToken", 45),
    ("PlusPlusToken", 46),
    ("MinusMinusToken", 47),
    ("LessThanLessThanToken", 48),
    ("GreaterThanGreaterThanToken", 49),
    ("GreaterThanGreaterThanGreaterThanToken", 50),
    ("AmpersandToken", 51),
    ("BarToken", 52),
    ("CaretToken", 53),
    ("ExclamationToken", 54),
    ("TildeToken", 55),
    ("AmpersandAmpersandToken", 56),
    ("BarBarToken", 57),
    ("QuestionToken", 58),
    ("ColonToken", 59),
    ("AtToken", 60),
    ("QuestionQuestionToken", 61),
    ("BacktickToken", 62),
    ("HashToken", 63),
    ("EqualsToken", 64),
    ("PlusEqualsToken", 65),
    ("MinusEqualsToken", 66),
    ("AsteriskEqualsToken", 67),
    ("AsteriskAsteriskEqualsToken", 68),
    ("SlashEqualsToken", 69),
    ("PercentEqualsToken", 70),
    ("LessThanLessThanEqualsToken", 71),
    ("GreaterThanGreaterThanEqualsToken", 72),
    ("GreaterThanGreaterThanGreaterThanEqualsToken", 73),
    ("AmpersandEqualsToken", 74),
    ("BarEqualsToken", 75),
    ("BarBarEqualsToken", 76),
    ("AmpersandAmpersandEqualsToken", 77),
    ("QuestionQuestionEqualsToken", 78),
    ("CaretEqualsToken", 79),
    ("Identifier", 80),
    ("PrivateIdentifier", 81),
    ("JSDocCommentTextToken", 82),
    ("BreakKeyword", 83),
    ("CaseKeyword", 84),
    ("CatchKeyword", 85),
    ("ClassKeyword", 86),
    ("ConstKeyword", 87),
    ("ContinueKeyword", 88),
    ("DebuggerKeyword", 89),
    ("DefaultKeyword", 90),
    ("DeleteKeyword", 91),
    ("DoKeyword", 92),
    ("ElseKeyword", 93),
    ("EnumKeyword", 94),
    ("ExportKeyword", 95),
    ("ExtendsKeyword", 96),
    ("FalseKeyword", 97),
    ("FinallyKeyword", 98),
    ("ForKeyword", 99),
    ("FunctionKeyword", 100),
    ("IfKeyword", 101),
    ("ImportKeyword", 102),
    ("InKeyword", 103),
    ("InstanceOfKeyword", 104),
    ("NewKeyword", 105),
    ("NullKeyword", 106),
    ("ReturnKeyword", 107),
    ("SuperKeyword", 108),
    ("SwitchKeyword", 109),
    ("ThisKeyword", 110),
    ("ThrowKeyword", 111),
    ("TrueKeyword", 112),
    ("TryKeyword", 113),
    ("TypeOfKeyword", 114),
    ("VarKeyword", 115),
    ("VoidKeyword", 116),
    ("WhileKeyword", 117),
    ("WithKeyword", 118),
    ("ImplementsKeyword", 119),
    ("InterfaceKeyword", 120),
    ("LetKeyword", 121),
    ("PackageKeyword", 122),
    ("PrivateKeyword", 123),
    ("ProtectedKeyword", 124),
    ("PublicKeyword", 125),
    ("StaticKeyword", 126),
    ("YieldKeyword", 127),
    ("AbstractKeyword", 128),
    ("AccessorKeyword", 129),
    ("AsKeyword", 130),
    ("AssertsKeyword", 131),
    ("AssertKeyword", 132),
    ("AnyKeyword", 133),
    ("AsyncKeyword", 134),
    ("AwaitKeyword", 135),
    ("BooleanKeyword", 136),
    ("ConstructorKeyword", 137),
    ("DeclareKeyword", 138),
    ("GetKeyword", 139),
    ("InferKeyword", 140),
    ("IntrinsicKeyword", 141),
    ("IsKeyword", 142),
    ("KeyOfKeyword", 143),
    ("ModuleKeyword", 144),
    ("NamespaceKeyword", 145),
    ("NeverKeyword", 146),
    ("OutKeyword", 147),
    ("ReadonlyKeyword", 148),
    ("RequireKeyword", 149),
    ("NumberKeyword", 150),
    ("ObjectKeyword", 151),
    ("SatisfiesKeyword", 152),
    ("SetKeyword", 153),
    ("StringKeyword", 154),
    ("SymbolKeyword", 155),
    ("TypeKeyword", 156),
    ("UndefinedKeyword", 157),
    ("UniqueKeyword", 158),
    ("UnknownKeyword", 159),
    ("UsingKeyword", 160),
    ("FromKeyword", 161),
    ("GlobalKeyword", 162),
    ("BigIntKeyword", 163),
    ("OverrideKeyword", 164),
    ("OfKeyword", 165),
    // Range markers. Declared after the kinds they alias so the kind
    // names win when formatting.
    ("FirstAssignment", 64),
    ("LastAssignment", 79),
    ("FirstCompoundAssignment", 65),
    ("LastCompoundAssignment", 79),
    ("FirstReservedWord", 83),
    ("LastReservedWord", 118),
    ("FirstKeyword", 83),
    ("LastKeyword", 165),
    ("FirstFutureReservedWord", 119),
    ("LastFutureReservedWord", 127),
    ("FirstPunctuation", 19),
    ("LastPunctuation", 79),
    ("FirstToken", 0),
    ("LastToken", 165),
    ("FirstTriviaToken", 2),
    ("LastTriviaToken", 7),
    ("FirstLiteralToken", 9),
    ("LastLiteralToken", 15),
    ("FirstTemplateToken", 15),
    ("LastTemplateToken", 18),
    ("FirstBinaryOperator", 30),
    ("LastBinaryOperator", 79),
    ("FirstContextualKeyword", 128),
    ("LastContextualKeyword", 165),
];

// Flag names mirror the TypeScript enum members.
#[allow(non_upper_case_globals)]
mod flags {
    bitflags::bitflags! {
        /// Scanner flags attached to each token.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct TokenFlags: u32 {
            const None = 0;
            const PrecedingLineBreak = 1 << 0;
            const PrecedingJSDocComment = 1 << 1;
            const Unterminated = 1 << 2;
            const ExtendedUnicodeEscape = 1 << 3;
            const Scientific = 1 << 4;
            const Octal = 1 << 5;
            const HexSpecifier = 1 << 6;
            const BinarySpecifier = 1 << 7;
            const OctalSpecifier = 1 << 8;
            const ContainsSeparator = 1 << 9;
            const UnicodeEscape = 1 << 10;
            const ContainsInvalidEscape = 1 << 11;
            const HexEscape = 1 << 12;
            const ContainsLeadingZero = 1 << 13;
            const ContainsInvalidSeparator = 1 << 14;
            const PrecedingJSDocLeadingAsterisks = 1 << 15;
            const BinaryOrOctalSpecifier = Self::BinarySpecifier.bits() | Self::OctalSpecifier.bits();
            const WithSpecifier = Self::HexSpecifier.bits() | Self::BinaryOrOctalSpecifier.bits();
            const StringLiteralFlags = Self::HexEscape.bits()
                | Self::UnicodeEscape.bits()
                | Self::ExtendedUnicodeEscape.bits()
                | Self::ContainsInvalidEscape.bits();
            const NumericLiteralFlags = Self::Scientific.bits()
                | Self::Octal.bits()
                | Self::ContainsLeadingZero.bits()
                | Self::WithSpecifier.bits()
                | Self::ContainsSeparator.bits()
                | Self::ContainsInvalidSeparator.bits();
            const TemplateLiteralLikeFlags = Self::HexEscape.bits()
                | Self::UnicodeEscape.bits()
                | Self::ExtendedUnicodeEscape.bits()
                | Self::ContainsInvalidEscape.bits();
            const IsInvalid = Self::Octal.bits()
                | Self::ContainsLeadingZero.bits()
                | Self::ContainsInvalidSeparator.bits()
                | Self::ContainsInvalidEscape.bits();
        }
    }

    bitflags::bitflags! {
        /// Declaration modifiers.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct ModifierFlags: u32 {
            const None = 0;
            const Public = 1 << 0;
            const Private = 1 << 1;
            const Protected = 1 << 2;
            const Readonly = 1 << 3;
            const Override = 1 << 4;
            const Export = 1 << 5;
            const Abstract = 1 << 6;
            const Ambient = 1 << 7;
            const Static = 1 << 8;
            const Accessor = 1 << 9;
            const Async = 1 << 10;
            const Default = 1 << 11;
            const Const = 1 << 12;
            const In = 1 << 13;
            const Out = 1 << 14;
            const Decorator = 1 << 15;
            const Deprecated = 1 << 16;
            // Cached from JSDoc tags, only set when `HasComputedJSDocModifiers` is.
            const JSDocPublic = 1 << 23;
            const JSDocPrivate = 1 << 24;
            const JSDocProtected = 1 << 25;
            const JSDocReadonly = 1 << 26;
            const JSDocOverride = 1 << 27;
            const SyntacticOrJSDocModifiers = Self::Public.bits()
                | Self::Private.bits()
                | Self::Protected.bits()
                | Self::Readonly.bits()
                | Self::Override.bits();
            const SyntacticOnlyModifiers = Self::Export.bits()
                | Self::Ambient.bits()
                | Self::Abstract.bits()
                | Self::Static.bits()
                | Self::Accessor.bits()
                | Self::Async.bits()
                | Self::Default.bits()
                | Self::Const.bits()
                | Self::In.bits()
                | Self::Out.bits()
                | Self::Decorator.bits();
            const SyntacticModifiers = Self::SyntacticOrJSDocModifiers.bits() | Self::SyntacticOnlyModifiers.bits();
            const JSDocCacheOnlyModifiers = Self::JSDocPublic.bits()
                | Self::JSDocPrivate.bits()
                | Self::JSDocProtected.bits()
                | Self::JSDocReadonly.bits()
                | Self::JSDocOverride.bits();
            const JSDocOnlyModifiers = Self::Deprecated.bits();
            const NonCacheOnlyModifiers = Self::SyntacticOrJSDocModifiers.bits()
                | Self::SyntacticOnlyModifiers.bits()
                | Self::JSDocOnlyModifiers.bits();
            const HasComputedJSDocModifiers = 1 << 28;
            const HasComputedFlags = 1 << 29;
            const AccessibilityModifier = Self::Public.bits() | Self::Private.bits() | Self::Protected.bits();
            const ParameterPropertyModifier = Self::AccessibilityModifier.bits()
                | Self::Readonly.bits()
                | Self::Override.bits();
            const NonPublicAccessibilityModifier = Self::Private.bits() | Self::Protected.bits();
            const TypeScriptModifier = Self::Ambient.bits()
                | Self::Public.bits()
                | Self::Private.bits()
                | Self::Protected.bits()
                | Self::Readonly.bits()
                | Self::Abstract.bits()
                | Self::Const.bits()
                | Self::Override.bits()
                | Self::In.bits()
                | Self::Out.bits();
            const ExportDefault = Self::Export.bits() | Self::Default.bits();
            const All = Self::Export.bits()
                | Self::Ambient.bits()
                | Self::Public.bits()
                | Self::Private.bits()
                | Self::Protected.bits()
                | Self::Static.bits()
                | Self::Readonly.bits()
                | Self::Abstract.bits()
                | Self::Accessor.bits()
                | Self::Async.bits()
                | Self::Default.bits()
                | Self::Const.bits()
                | Self::Deprecated.bits()
                | Self::Override.bits()
                | Self::In.bits()
                | Self::Out.bits()
                | Self::Decorator.bits();
            const Modifier = Self::All.bits() & !Self::Decorator.bits();
        }
    }

    bitflags::bitflags! {
        /// Parser node flags.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct NodeFlags: u32 {
            const None = 0;
            const Let = 1 << 0;
            const Const = 1 << 1;
            const Using = 1 << 2;
            const AwaitUsing = Self::Const.bits() | Self::Using.bits();
            const NestedNamespace = 1 << 3;
            const Synthesized = 1 << 4;
            const Namespace = 1 << 5;
            const OptionalChain = 1 << 6;
            const ExportContext = 1 << 7;
            const ContainsThis = 1 << 8;
            const HasImplicitReturn = 1 << 9;
            const HasExplicitReturn = 1 << 10;
            const GlobalAugmentation = 1 << 11;
            const HasAsyncFunctions = 1 << 12;
            const DisallowInContext = 1 << 13;
            const YieldContext = 1 << 14;
            const DecoratorContext = 1 << 15;
            const AwaitContext = 1 << 16;
            const DisallowConditionalTypesContext = 1 << 17;
            const ThisNodeHasError = 1 << 18;
            const JavaScriptFile = 1 << 19;
            const ThisNodeOrAnySubNodesHasError = 1 << 20;
            const HasAggregatedChildData = 1 << 21;
            const PossiblyContainsDynamicImport = 1 << 22;
            const PossiblyContainsImportMeta = 1 << 23;
            const JSDoc = 1 << 24;
            const Ambient = 1 << 25;
            const InWithStatement = 1 << 26;
            const JsonFile = 1 << 27;
            const TypeCached = 1 << 28;
            const Deprecated = 1 << 29;
            const BlockScoped = Self::Let.bits() | Self::Const.bits() | Self::Using.bits();
            const Constant = Self::Const.bits() | Self::Using.bits();
            const ReachabilityCheckFlags = Self::HasImplicitReturn.bits() | Self::HasExplicitReturn.bits();
            const ReachabilityAndEmitFlags = Self::ReachabilityCheckFlags.bits() | Self::HasAsyncFunctions.bits();
            const ContextFlags = Self::DisallowInContext.bits()
                | Self::DisallowConditionalTypesContext.bits()
                | Self::YieldContext.bits()
                | Self::DecoratorContext.bits()
                | Self::AwaitContext.bits()
                | Self::JavaScriptFile.bits()
                | Self::InWithStatement.bits()
                | Self::Ambient.bits();
            const TypeExcludesFlags = Self::YieldContext.bits() | Self::AwaitContext.bits();
            const PermanentlySetIncrementalFlags = Self::PossiblyContainsDynamicImport.bits()
                | Self::PossiblyContainsImportMeta.bits();
            // Reused bits on identifiers.
            const IdentifierHasExtendedUnicodeEscape = Self::ContainsThis.bits();
            const IdentifierIsInJSDocNamespace = Self::HasAsyncFunctions.bits();
        }
    }
}

pub use flags::{ModifierFlags, NodeFlags, TokenFlags};

/// The `SyntaxKind` token definition.
pub fn syntax_kind() -> &'static EnumDefinition {
    static DEFINITION: OnceLock<EnumDefinition> = OnceLock::new();
    DEFINITION.get_or_init(|| SYNTAX_KIND_MEMBERS.iter().copied().collect())
}

pub fn token_flags() -> &'static EnumDefinition {
    static DEFINITION: OnceLock<EnumDefinition> = OnceLock::new();
    DEFINITION.get_or_init(EnumDefinition::from_flags::<TokenFlags>)
}

pub fn modifier_flags() -> &'static EnumDefinition {
    static DEFINITION: OnceLock<EnumDefinition> = OnceLock::new();
    DEFINITION.get_or_init(EnumDefinition::from_flags::<ModifierFlags>)
}

pub fn node_flags() -> &'static EnumDefinition {
    static DEFINITION: OnceLock<EnumDefinition> = OnceLock::new();
    DEFINITION.get_or_init(EnumDefinition::from_flags::<NodeFlags>)
}

pub fn format_syntax_kind(kind: u16) -> String {
    format_enum(i64::from(kind), syntax_kind(), false)
}

pub fn format_token_flags(flags: TokenFlags) -> String {
    format_enum(i64::from(flags.bits()), token_flags(), true)
}

pub fn format_modifier_flags(flags: ModifierFlags) -> String {
    format_enum(i64::from(flags.bits()), modifier_flags(), true)
}

pub fn format_node_flags(flags: NodeFlags) -> String {
    format_enum(i64::from(flags.bits()), node_flags(), true)
}

/// A built-in definition looked up by name.
#[derive(Clone, Copy, Debug)]
pub struct KnownEnum {
    pub name: &'static str,
    pub definition: &'static EnumDefinition,
    pub is_flags: bool,
}

impl KnownEnum {
    pub fn format(&self, value: i64) -> String {
        format_enum(value, self.definition, self.is_flags)
    }
}

/// Names accepted by `known_enum`.
pub const KNOWN_ENUM_NAMES: &[&str] = &["SyntaxKind", "TokenFlags", "ModifierFlags", "NodeFlags"];

/// Look up a built-in definition by name, ignoring ASCII case.
pub fn known_enum(name: &str) -> Option<KnownEnum> {
    let name = KNOWN_ENUM_NAMES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))?;
    let (definition, is_flags) = match name {
        "SyntaxKind" => (syntax_kind(), false),
        "TokenFlags" => (token_flags(), true),
        "ModifierFlags" => (modifier_flags(), true),
        "NodeFlags" => (node_flags(), true),
        _ => return None,
    };
    Some(KnownEnum {
        name,
        definition,
        is_flags,
    })
}

#[cfg(test)]
#[path = "tests/known_tests.rs"]
mod tests;
