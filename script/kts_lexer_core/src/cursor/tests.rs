use crate::SourceBuffer;

// === Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_and_advance_n() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'e');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn peek_past_end_reads_padding() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

// === EOF ===

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_by_offsets() {
    let buf = SourceBuffer::new("plugins { id(\"java\") }");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 7), b"plugins");
    assert_eq!(cursor.slice(8, 9), b"{");
}

// === Bulk movement ===

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_char_skips_whole_code_point() {
    let buf = SourceBuffer::new("λx");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_char_at_eof_stays_put() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn utf8_char_width_by_leading_byte() {
    use super::Cursor;
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xCE), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn eat_until_newline_stops_before_terminator() {
    let buf = SourceBuffer::new("// note }\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_stops_at_carriage_return() {
    let buf = SourceBuffer::new("// note\r\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_comment_delim_finds_star_or_slash() {
    let buf = SourceBuffer::new("abc*/");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_comment_delim(), b'*');
    assert_eq!(cursor.pos(), 3);

    let buf = SourceBuffer::new("no delimiter");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_comment_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_picks_earliest() {
    let cases: [(&str, u8, u32); 5] = [
        ("abc\"", b'"', 3),
        ("a\\n\"", b'\\', 1),
        ("x $y\"", b'$', 2),
        ("ab\ncd\"", b'\n', 2),
        ("ab\r\"", b'\r', 2),
    ];
    for (source, byte, pos) in cases {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.skip_to_string_delim(), byte, "in {source:?}");
        assert_eq!(cursor.pos(), pos, "in {source:?}");
    }
}

#[test]
fn skip_to_raw_string_delim_ignores_backslash_and_newline() {
    let buf = SourceBuffer::new("a\\b\nc\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_raw_string_delim(), b'"');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_char_delim_ignores_dollar() {
    let buf = SourceBuffer::new("$'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_char_delim(), b'\'');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn earliest_of_combinations() {
    use super::earliest_of;
    assert_eq!(earliest_of(Some(3), Some(1)), Some(1));
    assert_eq!(earliest_of(None, Some(4)), Some(4));
    assert_eq!(earliest_of(Some(2), None), Some(2));
    assert_eq!(earliest_of(None, None), None);
}
