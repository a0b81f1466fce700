//! Integration tests for RTF text extraction.

use std::fs;

use tempfile::tempdir;
use unrtf::render::{self, InputEncoding, RenderOptions};
use unrtf::{parse_bytes, parse_file, Error, Node, Unrtf};

const LETTER: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\deff0\
{\\fonttbl{\\f0\\fswiss Arial;}{\\f1\\froman Times New Roman;}}\
{\\colortbl;\\red255\\green0\\blue0;}\
{\\*\\generator Riched20 10.0.19041}\
{\\info{\\author Jane Doe}{\\operator Jane Doe}}\
\\viewkind4\\uc1\\pard\\f0\\fs24 Dear   Sir,\\par\r\n\
Caf\\'e9 au lait\\~\\endash \\par\r\n\
{\\b Bold} text\\par\r\n\
}";

fn flatten(input: &[u8]) -> Vec<u8> {
    parse_bytes(input).unwrap().flatten_to_bytes()
}

#[test]
fn test_letter_flattens_visible_text_only() {
    let doc = parse_bytes(LETTER).unwrap();
    assert_eq!(
        doc.flatten_to_bytes(),
        b"Dear Sir,\nCaf\xe9 au lait \nBold text\n"
    );
    assert_eq!(doc.detect_encoding(), Some("cp1252".to_string()));
}

#[test]
fn test_letter_to_utf8() {
    let text = render::to_utf8(&parse_bytes(LETTER).unwrap(), &RenderOptions::default()).unwrap();
    assert_eq!(text, "Dear Sir,\nCafé au lait \nBold text\n");
}

#[test]
fn test_flatten_is_idempotent() {
    let doc = parse_bytes(LETTER).unwrap();
    assert_eq!(doc.flatten_to_bytes(), doc.flatten_to_bytes());
}

#[test]
fn test_documented_examples() {
    assert_eq!(flatten(b"a   b"), b"a b");
    assert_eq!(flatten(b"{\\*\\expandedcolortbl some text}"), b"");
    assert_eq!(flatten(b"a\\par b"), b"a\nb");
    assert_eq!(flatten(b"\\'41\\'42"), b"AB");
    assert_eq!(flatten(b"\\\\\\\\"), b"\\\\");
}

#[test]
fn test_hex_escapes_merge_into_one_text_node() {
    let doc = parse_bytes(b"\\'41\\'42").unwrap();
    assert_eq!(doc.child_nodes(), &[Node::text_run(b"AB".to_vec())]);
}

#[test]
fn test_brace_tolerance() {
    assert_eq!(flatten(b"{\\rtf1 ab}}cd"), b"ab");
    assert_eq!(flatten(b"{\\rtf1 {ab {cd"), b"ab cd");
}

#[test]
fn test_no_codepage() {
    let doc = parse_bytes(b"{\\rtf1\\ansi plain}").unwrap();
    assert_eq!(doc.detect_encoding(), None);
}

#[test]
fn test_shift_jis_bytes_merge_before_decoding() {
    // each \'XX is one byte of a double-byte character
    let input = b"{\\rtf1\\ansi\\ansicpg932 \\'93\\'fa\\'96\\'7b\\'8c\\'ea}";
    let text = Unrtf::new().parse_bytes(input).unwrap().to_utf8().unwrap();
    assert_eq!(text, "日本語");
}

#[test]
fn test_explicit_input_encoding() {
    let input = b"{\\rtf1 \\'cf\\'f0\\'e8}";
    let options =
        RenderOptions::new().with_input_encoding(InputEncoding::Named("cp1251".to_string()));
    let text = render::to_text(&parse_bytes(input).unwrap(), &options).unwrap();
    assert_eq!(text, "При".as_bytes());
}

#[test]
fn test_output_encoding() {
    let input = b"{\\rtf1\\ansicpg1252 na\\'efve}";
    let text = Unrtf::new()
        .with_output_encoding("utf-16be")
        .parse_bytes(input)
        .unwrap()
        .to_text()
        .unwrap();
    assert_eq!(text, b"\x00n\x00a\x00\xef\x00v\x00e");
}

#[test]
fn test_unknown_output_encoding() {
    let result = Unrtf::new()
        .with_output_encoding("not-a-charset")
        .parse_bytes(b"{\\rtf1 x}")
        .unwrap()
        .to_text();
    assert!(matches!(result, Err(Error::UnknownEncoding(_))));
}

#[test]
fn test_parse_errors_abort() {
    let inputs: [&[u8]; 3] = [b"{\\rtf1 x\\", b"{\\rtf1 \\'", b"{\\rtf1 \\'a"];
    for input in inputs {
        assert!(matches!(parse_bytes(input), Err(Error::Parse { .. })));
    }
}

#[test]
fn test_parse_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("letter.rtf");
    fs::write(&path, LETTER).unwrap();

    let doc = parse_file(&path).unwrap();
    assert_eq!(doc, parse_bytes(LETTER).unwrap());
    assert!(unrtf::is_rtf(&path));
}

#[test]
fn test_extract_text_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("letter.rtf");
    fs::write(&path, LETTER).unwrap();

    let text = unrtf::extract_text(&path).unwrap();
    assert!(text.starts_with("Dear Sir,\nCafé"));
}

#[test]
fn test_extract_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.rtf");
    fs::write(&path, b"").unwrap();

    let text = unrtf::extract_text_with_options(&path, &RenderOptions::default()).unwrap();
    assert!(text.is_empty());
    assert!(matches!(parse_file(&path), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = parse_file(dir.path().join("missing.rtf"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_deeply_nested_groups_fail_cleanly() {
    let input = vec![b'{'; 100_000];
    assert!(matches!(parse_bytes(&input), Err(Error::Parse { .. })));

    let mut input = b"{\\rtf1\\ansicpg1252 ".to_vec();
    input.extend(std::iter::repeat(b'{').take(unrtf::MAX_GROUP_DEPTH - 1));
    input.extend_from_slice(b"deep");
    assert_eq!(flatten(&input), b"deep");
}
