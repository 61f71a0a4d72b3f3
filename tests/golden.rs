use common::{GOLDEN_NODES, fixed_banner, node_declarations};
use equivgen::codegen::{errors::CodegenError, generate, generate_with_banner};
use equivgen::session::{Session, UnknownModePolicy};

mod common;

#[test]
fn nodes_match_golden_file() {
    let text = generate_with_banner(&node_declarations(), &Session::default(), &fixed_banner())
        .expect("generation failed");

    assert!(
        text == GOLDEN_NODES,
        "generated text differs from tests/golden/nodes.rs:\n{text}"
    );
}

#[test]
fn unknown_mode_declaration_is_absent() {
    let text = generate_with_banner(&node_declarations(), &Session::default(), &fixed_banner())
        .unwrap();
    assert!(!text.contains("Legacy"));
    assert_eq!(text.matches("impl AstEquiv for").count(), 6);
}

#[test]
fn strict_session_rejects_the_nodes() {
    let session = Session {
        unknown_mode: UnknownModePolicy::Error,
        ..Session::default()
    };
    let error = generate_with_banner(&node_declarations(), &session, &fixed_banner())
        .expect_err("expected error");

    assert!(
        matches!(
            &error,
            CodegenError::UnknownMode { decl, mode } if decl == "Legacy" && mode == "bogus"
        ),
        "{:#?}",
        error
    );
}

#[test]
fn banner_leads_the_file() {
    let mut lines = GOLDEN_NODES.lines();
    assert_eq!(lines.next(), Some("// AUTOMATICALLY GENERATED - DO NOT EDIT"));
    assert_eq!(
        lines.next(),
        Some("// Produced 2024-01-01 00:00:00 by equivgen")
    );
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn generate_stamps_the_current_time() {
    let text = generate(&node_declarations(), &Session::default()).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("// AUTOMATICALLY GENERATED - DO NOT EDIT"));
    let produced = lines.next().unwrap();
    assert!(produced.starts_with("// Produced "), "{produced}");
    assert!(produced.ends_with(" by equivgen"), "{produced}");

    // Everything after the banner is independent of the time.
    let body = |text: &str| text.lines().skip(2).collect::<Vec<_>>().join("\n");
    assert_eq!(body(text.as_str()), body(GOLDEN_NODES));
}
