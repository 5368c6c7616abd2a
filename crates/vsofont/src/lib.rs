#![no_std]

//! `vector-text-vsofont` is a backend for the `vector-text` crates that
//! decodes stroke fonts in the VSO text format.
//!
//! A VSO font is a plain text file. Everything before the `JUMP!` marker is
//! free-form and skipped. After it come header directives and glyph lines:
//!
//! ```text
//! # comment lines start with '#'
//! JUMP!
//! GRID: 5 x 5
//! SPACING: 0.05
//! SCALING: 0.2 x 0.2
//! COLOR: 255 255 255 255
//! A 20 2 2 24 10 14
//! ```
//!
//! Glyph lines name the glyph, then list pairs of grid indices. Each pair is
//! one straight stroke. An index `i` lands on column `i % width` and row
//! `i / width` of the grid, multiplied by the scaling factors. Directives
//! only affect the glyph lines after them.
//!
//! ```
//! use vector_text_core::Vector;
//! use vector_text_vsofont::decode;
//!
//! let font = decode("JUMP!\nGRID: 2 x 2\nSCALING: 1.0 x 1.0\nA 0 3").unwrap();
//! let glyph = font.glyph("A").unwrap();
//!
//! assert_eq!(glyph.strokes(), [[Vector::new(0.0, 0.0), Vector::new(1.0, 1.0)]]);
//! ```

extern crate alloc;

mod error;

use alloc::{string::ToString, vec::Vec};
pub use error::{DecodeError, Result};
use vector_text_core::{Decoder, Font, Glyph, Vector};

const JUMP_MARKER: &str = "JUMP!";

/// A [Decoder] for VSO font descriptions.
pub struct VsoFont;

impl Decoder for VsoFont {
    type Error = DecodeError;

    fn decode(text: &str) -> Result<Font> {
        decode(text)
    }
}

/// Decode a VSO font description.
///
/// Decoding stops at the first malformed line; no partial font is returned.
pub fn decode(text: &str) -> Result<Font> {
    let mut parser = Parser::default();

    for (idx, line) in text.split('\n').enumerate() {
        parser.parse_line(idx + 1, line)?;
    }

    Ok(parser.font)
}

/// Decode a VSO font description which is known to be valid, such as one
/// bundled with the program.
///
/// # Panics
///
/// Panics if the description is malformed.
pub fn decode_or_fail(text: &str) -> Font {
    match decode(text) {
        Ok(font) => font,
        Err(err) => panic!("malformed VSO font: {err}"),
    }
}

/// Header state in effect for the glyph lines being read.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
struct GridContext {
    width: i32,
    // Parsed but not used for placement
    height: i32,
    scale_x: f32,
    scale_y: f32,
}

impl GridContext {
    fn point(&self, index: i32, line: usize) -> Result<Vector> {
        if self.width <= 0 {
            return Err(DecodeError::InvalidGrid {
                line,
                width: self.width,
            });
        }

        Ok(Vector::new(
            (index % self.width) as f32 * self.scale_x,
            (index / self.width) as f32 * self.scale_y,
        ))
    }
}

#[derive(Default)]
struct Parser {
    font: Font,
    grid: GridContext,
    active: bool,
}

impl Parser {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<()> {
        let text = text.trim();

        if text.is_empty() || text.starts_with('#') {
            return Ok(());
        }

        if text == JUMP_MARKER {
            if !self.active {
                log::debug!("found {JUMP_MARKER} on line {line}");
            }
            self.active = true;
            return Ok(());
        }

        if !self.active {
            return Ok(());
        }

        let tokens: Vec<&str> = text.split(' ').collect();

        match tokens[0] {
            "GRID:" => {
                // GRID: 5 x 5
                expect_tokens(&tokens, 4, line)?;
                self.grid.width = parse_int(tokens[1], "grid width", line)?;
                self.grid.height = parse_int(tokens[3], "grid height", line)?;
                log::debug!(
                    "line {line}: grid is {} x {}",
                    self.grid.width,
                    self.grid.height
                );
            }
            "SPACING:" => {
                // SPACING: 0.005
                expect_tokens(&tokens, 2, line)?;
                let spacing = parse_float(tokens[1], "spacing", line)?;
                self.font.set_spacing(spacing);
                log::debug!("line {line}: spacing is {spacing}");
            }
            "SCALING:" => {
                // SCALING: 0.2 x 0.2
                expect_tokens(&tokens, 4, line)?;
                self.grid.scale_x = parse_float(tokens[1], "horizontal scaling", line)?;
                self.grid.scale_y = parse_float(tokens[3], "vertical scaling", line)?;
                log::debug!(
                    "line {line}: scaling is {} x {}",
                    self.grid.scale_x,
                    self.grid.scale_y
                );
            }
            "COLOR:" => {}
            label => {
                let glyph = self.parse_glyph(label, &tokens[1..], line)?;
                log::trace!(
                    "line {line}: glyph {label:?} with {} strokes",
                    glyph.strokes().len()
                );
                self.font.insert(glyph);
            }
        }

        Ok(())
    }

    fn parse_glyph(&self, label: &str, indices: &[&str], line: usize) -> Result<Glyph> {
        let mut glyph = Glyph::new(label);

        let pairs = indices.chunks_exact(2);
        if let [leftover] = pairs.remainder() {
            log::warn!("line {line}: dropping unpaired index {leftover:?} in glyph {label:?}");
        }

        for pair in pairs {
            let start = parse_int(pair[0], "glyph index", line)?;
            let end = parse_int(pair[1], "glyph index", line)?;
            glyph.push_stroke(self.grid.point(start, line)?, self.grid.point(end, line)?);
        }

        Ok(glyph)
    }
}

fn expect_tokens(tokens: &[&str], expected: usize, line: usize) -> Result<()> {
    if tokens.len() != expected {
        return Err(DecodeError::TokenCount {
            line,
            directive: directive_name(tokens[0]),
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn directive_name(token: &str) -> &'static str {
    match token {
        "GRID:" => "GRID",
        "SPACING:" => "SPACING",
        "SCALING:" => "SCALING",
        _ => "directive",
    }
}

fn parse_int(token: &str, field: &'static str, line: usize) -> Result<i32> {
    token.parse().map_err(|_| DecodeError::NumberParse {
        line,
        field,
        token: token.to_string(),
    })
}

fn parse_float(token: &str, field: &'static str, line: usize) -> Result<f32> {
    token.parse().map_err(|_| DecodeError::NumberParse {
        line,
        field,
        token: token.to_string(),
    })
}
