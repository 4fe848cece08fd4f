use super::*;

#[test]
fn test_format_enum_json() {
    let modifiers = r#"{"0": "None", "None": 0, "Readonly": 1, "Static": 2, "Abstract": 4, "Public": 8}"#;
    assert_eq!(format_enum_json(12.0, modifiers, true), "Abstract|Public");
    assert_eq!(format_enum_json(0.0, modifiers, false), "None");
    assert_eq!(format_enum_json(2.0, modifiers, false), "Static");
}

#[test]
fn test_format_enum_json_malformed_definition() {
    assert_eq!(format_enum_json(7.0, "not json", true), "7");
    assert_eq!(format_enum_json(0.0, "[]", false), "0");
}

#[test]
fn test_built_in_helpers() {
    assert_eq!(format_syntax_kind(1), "EndOfFileToken");
    assert_eq!(format_token_flags(1), "PrecedingLineBreak");
    assert_eq!(format_modifier_flags(0x108), "Readonly|Static");
    assert_eq!(format_node_flags(2), "Const");
}

#[test]
fn test_scan_session() {
    let mut session = ScanSession::new("x;".to_string());
    assert!(session.push_token(80, 1));
    assert!(session.push_token(27, 2));
    assert!(!session.push_token(1, 2));
    assert!(!session.push_token(80, 3));

    assert_eq!(session.token_count(), 3);
    assert_eq!(session.token_name(1).as_deref(), Some("SemicolonToken"));
    assert_eq!(session.token_name(5), None);

    let selection: serde_json::Value =
        serde_json::from_str(&session.selection_json(1).unwrap()).unwrap();
    assert_eq!(selection["selectionStartColumn"], 2);
    assert_eq!(selection["positionColumn"], 3);
}

#[test]
fn test_scan_session_errors() {
    let mut session = ScanSession::new("'a".to_string());
    session.push_token(11, 2);
    session.report_error("Unterminated string literal.".to_string(), 2);
    session.push_token(1, 2);

    let report: serde_json::Value = serde_json::from_str(&session.report_json()).unwrap();
    assert_eq!(report["title"], "Scan failed");
    assert_eq!(report["errors"][0]["message"], "Unterminated string literal.");
    assert_eq!(report["tokens"][1]["token"], "EndOfFileToken");
}

#[test]
fn test_describe_tokens() {
    let json = describe_tokens(r#"[{"kind": 121, "end": 3}, {"kind": 1, "end": 3}]"#, "let");
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["tokens"][0]["token"], "LetKeyword");
    assert_eq!(report["tokens"][0]["end"], 3);

    assert_eq!(describe_tokens("{", "let"), "null");
}
