use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let source = SourceBuffer::new("");
    assert_eq!(source.source_len, 0);
    assert_eq!(source.buf[0], 0);
    assert!(source.cursor().is_eof());
}

#[test]
fn script_bytes_are_preserved() {
    let source = SourceBuffer::new("buildscript {}");
    assert_eq!(source.source_len, 14);
    assert_eq!(&source.buf[..14], b"buildscript {}");
    assert_eq!(source.buf[14], 0);
}

#[test]
fn multibyte_source_length_is_in_bytes() {
    let text = "val π = 3.14 // ≈";
    let source = SourceBuffer::new(text);
    assert_eq!(source.source_len as usize, text.len());
    assert_eq!(&source.buf[..text.len()], text.as_bytes());
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = SourceBuffer::new(&"x".repeat(len));
        assert_eq!(
            source.buf.len() % CACHE_LINE,
            0,
            "buffer of {} bytes is not cache-line aligned for a {len}-byte script",
            source.buf.len(),
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let source = SourceBuffer::new("abc");
    assert!(source.buf[3..].iter().all(|&b| b == 0));
}

#[test]
fn exact_cache_line_source_gets_extra_line_for_sentinel() {
    let source = SourceBuffer::new(&"y".repeat(64));
    assert_eq!(source.buf.len(), 128);
    assert_eq!(source.buf[64], 0);
}

#[test]
fn near_full_line_keeps_lookahead_zeros() {
    for len in 61u32..=63 {
        let source = SourceBuffer::new(&"z".repeat(len as usize));
        assert_eq!(source.buf.len(), 128);
        let mut cursor = source.cursor();
        cursor.advance_n(len - 1);
        assert_eq!((cursor.current(), cursor.peek(), cursor.peek2()), (b'z', 0, 0));
    }
}
