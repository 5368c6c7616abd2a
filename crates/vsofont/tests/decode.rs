use pretty_assertions::assert_eq;
use vector_text_core::{Decoder, Glyph, Vector};
use vector_text_vsofont::{DecodeError, VsoFont, decode, decode_or_fail};

const SIMPLE: &str = include_str!("data/simple.vso");

#[test]
fn test_simple_font() {
    let font = decode(SIMPLE).unwrap();

    assert_eq!(font.spacing(), 0.05);

    let labels: Vec<&str> = font.glyphs().map(Glyph::label).collect();
    assert_eq!(labels, ["1", "7", "A", "H", "I", "L", "O", "T", "V", "space"]);
}

#[test]
fn test_simple_font_glyph_a() {
    let font = decode(SIMPLE).unwrap();
    let glyph = font.glyph_for_char('A').unwrap();

    assert_eq!(
        glyph.strokes(),
        [
            [Vector::new(0.0, 0.8), Vector::new(0.4, 0.0)],
            [Vector::new(0.4, 0.0), Vector::new(0.8, 0.8)],
            [Vector::new(0.0, 0.4), Vector::new(0.8, 0.4)],
        ]
    );
}

#[test]
fn test_terminator_is_dropped() {
    let font = decode(SIMPLE).unwrap();

    assert_eq!(font.glyph("1").unwrap().strokes().len(), 3);
    assert_eq!(
        font.glyph("7").unwrap().strokes(),
        [
            [Vector::new(0.0, 0.0), Vector::new(0.8, 0.0)],
            [Vector::new(0.8, 0.0), Vector::new(0.4, 0.8)],
        ]
    );
}

#[test]
fn test_empty_glyph() {
    let font = decode(SIMPLE).unwrap();
    assert!(font.glyph("space").unwrap().is_empty());
}

#[test]
fn test_backend_matches_free_function() {
    assert_eq!(VsoFont::decode(SIMPLE), decode(SIMPLE));
    assert_eq!(decode_or_fail(SIMPLE), decode(SIMPLE).unwrap());
}

#[test]
fn test_broken_font_reports_line() {
    let broken = SIMPLE.replace("T 0 4 2 22", "T 0 4 2 twenty-two");
    let err = decode(&broken).unwrap_err();

    assert_eq!(
        err,
        DecodeError::NumberParse {
            line: 19,
            field: "glyph index",
            token: "twenty-two".to_string(),
        }
    );
}

#[test]
fn test_decode_from_many_threads() {
    let expected = decode(SIMPLE).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| decode(SIMPLE)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(expected.clone()));
    }
}
