use super::*;
use kts_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

fn text(source: &str) -> Option<&str> {
    block_text(source, &Keyword::BUILDSCRIPT)
}

#[test]
fn block_on_first_line() {
    assert_eq!(text("buildscript {}"), Some("buildscript {}"));
}

#[test]
fn keyword_and_brace_separated_by_newline() {
    assert_eq!(text("buildscript\n{\n}"), Some("buildscript\n{\n}"));
}

#[test]
fn comment_between_keyword_and_brace() {
    assert_eq!(
        text("buildscript /* repos */ // note\n {}"),
        Some("buildscript /* repos */ // note\n {}")
    );
}

#[test]
fn literal_after_keyword_is_not_a_block() {
    assert_eq!(text("buildscript \"{\"\n"), None);
}

#[test]
fn keyword_at_end_of_input() {
    assert_eq!(text("val a = buildscript"), None);
}

#[test]
fn unmatched_closer_before_keyword_floors_depth() {
    assert_eq!(text("}} buildscript {}"), Some("buildscript {}"));
}

#[test]
fn braces_in_literals_inside_block() {
    let source = r#"buildscript { val s = "}}" ; val c = '}' ; val t = """ } """ } tail"#;
    assert_eq!(
        text(source),
        Some(r#"buildscript { val s = "}}" ; val c = '}' ; val t = """ } """ }"#)
    );
}

#[test]
fn template_inside_block() {
    let source = "buildscript { println(\"${ listOf(1).map { it } }}\") }\n";
    assert_eq!(
        text(source),
        Some("buildscript { println(\"${ listOf(1).map { it } }}\") }")
    );
}

#[test]
fn first_match_wins() {
    let source = "buildscript { a }\nbuildscript { b }";
    assert_eq!(
        extract_block(source, &Keyword::BUILDSCRIPT),
        Some(Span::new(0, 17))
    );
}

#[test]
fn other_keyword() {
    let source = "buildscript {}\nplugins { java }\n";
    assert_eq!(
        block_text(source, &Keyword::PLUGINS),
        Some("plugins { java }")
    );
}

#[test]
fn never_closing_block_is_absent() {
    assert_eq!(text("buildscript { repositories {"), None);
    assert_eq!(text("buildscript { /* }"), None);
    assert_eq!(text("buildscript { \"}"), None);
}

#[test]
fn opening_brace_lookahead_leaves_scanner_after_brace() {
    let buf = SourceBuffer::new(" \n{x}");
    let scanner = ContextScanner::new(buf.cursor());
    let after = opening_brace(scanner).unwrap();
    assert_eq!(after.pos(), 3);
}

#[test]
fn closing_brace_counts_nested_blocks() {
    let buf = SourceBuffer::new("a { b {} } c }");
    let mut scanner = ContextScanner::new(buf.cursor());
    assert_eq!(closing_brace(&mut scanner), Some(14));
}
