//! End-to-end extraction scenarios against whole scripts.

#![allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

use kts_extract::{block_text, extract_block, partition, Keyword, Span};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn buildscript(source: &str) -> Option<Span> {
    extract_block(source, &Keyword::BUILDSCRIPT)
}

fn assert_no_buildscript(source: &str) {
    assert_eq!(buildscript(source), None, "unexpected match in {source:?}");
}

// ─── Scenarios ─────────────────────────────────────────────────────

#[test]
fn top_level_buildscript_returns_exact_range() {
    let script = "val foo = 42\n  buildscript {\n    val bar = 51\n    repositories {}\n    // also part of the content }}\n}dependencies {}";
    let range = buildscript(script).unwrap();
    assert_eq!(
        &script[range.to_range()],
        "buildscript {\n    val bar = 51\n    repositories {}\n    // also part of the content }}\n}"
    );
}

#[test]
fn nested_buildscript_is_absent() {
    assert_no_buildscript("foo { buildscript {} }");
}

#[test]
fn longer_identifier_is_absent() {
    assert_no_buildscript("buildscripto {}");
    assert_no_buildscript("mybuildscript {}");
    assert_no_buildscript("buildscript_ {}");
}

#[test]
fn bare_reference_is_absent() {
    assert_no_buildscript("val a = buildscript\na.dependencies {}");
}

#[test]
fn bare_reference_followed_by_block_returns_second() {
    let span = buildscript("val a = buildscript\nbuildscript {}").unwrap();
    assert_eq!(span, Span::new(20, 34));
    assert_eq!(span.last(), Some(33));
}

#[test]
fn scripts_without_top_level_block() {
    for script in [
        "",
        "dependencies {}",
        "// no buildscript {} here",
        "/* /* no */ buildscript {} here either */",
    ] {
        assert_no_buildscript(script);
    }
}

// ─── Further edge cases ────────────────────────────────────────────

#[test]
fn keyword_in_literals_is_absent() {
    assert_no_buildscript(r#"println("buildscript {}")"#);
    assert_no_buildscript(r#"val s = """buildscript {}""""#);
    assert_no_buildscript("`buildscript` {}");
}

#[test]
fn unterminated_constructs_are_absent() {
    assert_no_buildscript("/* buildscript {}");
    assert_no_buildscript("buildscript {");
    assert_no_buildscript("buildscript { \"\"\" }");
}

#[test]
fn comment_with_brace_before_block_does_not_shift_depth() {
    let script = "// {\n/* { */\nval s = \"{\"\nbuildscript { }";
    assert_eq!(block_text(script, &Keyword::BUILDSCRIPT), Some("buildscript { }"));
}

#[test]
fn shebang_and_bom_scripts() {
    assert_eq!(
        block_text("#!/usr/bin/env kotlin\nbuildscript {}", &Keyword::BUILDSCRIPT),
        Some("buildscript {}")
    );
    let script = "\u{FEFF}buildscript {}";
    assert_eq!(buildscript(script), Some(Span::new(3, 17)));
}

#[test]
fn plugins_block_after_buildscript() {
    let script = "buildscript {\n  repositories { mavenCentral() }\n}\nplugins {\n  `java-library`\n}\n";
    assert_eq!(
        block_text(script, &Keyword::PLUGINS),
        Some("plugins {\n  `java-library`\n}")
    );
}

#[test]
fn custom_keyword() {
    let keyword = Keyword::new("pluginManagement").unwrap();
    let script = "pluginManagement { repositories { gradlePluginPortal() } }";
    assert_eq!(extract_block(script, &keyword), Some(Span::new(0, 58)));
}

#[test]
fn partition_preserves_body_offsets() {
    let script = "buildscript {\n  x\n}\ntasks.register(\"hello\")\n";
    let sections = partition(script, &Keyword::BUILDSCRIPT);
    assert_eq!(sections.block_text, Some("buildscript {\n  x\n}"));
    assert_eq!(sections.body.len(), script.len());
    assert_eq!(sections.body.lines().count(), script.lines().count());
    assert!(sections.body.ends_with("\ntasks.register(\"hello\")\n"));
}

// ─── Properties ────────────────────────────────────────────────────

/// Script noise that exercises every lexical context.
fn noise() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{"),
        Just("}"),
        Just("//"),
        Just("/*"),
        Just("*/"),
        Just("\""),
        Just("\"\"\""),
        Just("'"),
        Just("${"),
        Just("`"),
        Just("\n"),
        Just(" "),
        Just("val"),
        Just("build"),
        Just("script"),
        Just("x"),
        Just("="),
    ];
    proptest::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

/// Balanced block content: braces may appear but always close.
fn balanced_body() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{}"),
        Just("{ repositories {} }"),
        Just("\"}\""),
        Just("'}'"),
        // Padded so two raw strings never run together into `""""""`.
        Just(" \"\"\"\n}\n\"\"\" "),
        Just("// }}\n"),
        Just("/* } /* } */ */"),
        Just("\"${ {} }\""),
        Just("buildscript {}"),
        Just("val a = 1"),
        Just(" "),
        Just("\n"),
    ];
    proptest::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn absent_keyword_text_is_never_found(source in noise()) {
        prop_assume!(!source.contains("buildscript"));
        prop_assert_eq!(buildscript(&source), None);
    }

    #[test]
    fn keyword_hidden_in_comment_or_literal_is_never_found(
        prefix in noise(),
        hidden in prop_oneof![
            Just("// buildscript {}"),
            Just("/* buildscript {} */"),
            Just("/* /* */ buildscript {} */"),
            Just("\"buildscript {}\""),
        ],
    ) {
        prop_assume!(!prefix.contains("buildscript"));
        let source = format!("{prefix}\n{hidden}");
        prop_assert_eq!(buildscript(&source), None);
    }

    #[test]
    fn matched_range_covers_exactly_the_block(
        body in balanced_body(),
        suffix in noise(),
    ) {
        let prefix = "val foo = 42\n";
        let block = format!("buildscript {{{body}}}");
        let source = format!("{prefix}{block}{suffix}");
        let span = buildscript(&source).unwrap();
        prop_assert_eq!(span.start as usize, prefix.len());
        prop_assert_eq!(&source[span.to_range()], block.as_str());
    }

    #[test]
    fn nested_occurrences_are_never_found(body in balanced_body()) {
        let source = format!("allprojects {{ {body} }}");
        prop_assert_eq!(buildscript(&source), None);
    }

    #[test]
    fn bare_reference_does_not_block_later_match(sep in "[ \t\n;.()]{1,4}") {
        let source = format!("val a = buildscript{sep}buildscript {{}}");
        let span = buildscript(&source).unwrap();
        prop_assert_eq!(&source[span.to_range()], "buildscript {}");
        prop_assert!(span.start as usize > "val a = ".len());
    }
}
