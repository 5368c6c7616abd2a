#![no_std]

//! `vector-text-core` provides core primitives for the `vector-text` crates.
//!
//! A [Font] is a set of [Glyph]s, each of which is a list of straight line
//! segments in the font's final coordinate space.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

extern crate alloc;

/// A point in font coordinate space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector {
    /// X coordinate of this point
    pub x: f32,
    /// Y coordinate of this point
    pub y: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight stroke from the first point to the second.
pub type Segment = [Vector; 2];

/// A single glyph (character) contained within a font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    label: String,
    strokes: Vec<Segment>,
}

impl Glyph {
    /// Create a glyph with no strokes.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            strokes: Vec::new(),
        }
    }

    /// The token this glyph is drawn for, usually a single character.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Segments which make up this glyph, in drawing order.
    pub fn strokes(&self) -> &[Segment] {
        &self.strokes
    }

    pub fn push_stroke(&mut self, start: Vector, end: Vector) {
        self.strokes.push([start, end]);
    }

    /// True if the glyph draws nothing (e.g. a space).
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// A decoded stroke font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    spacing: f32,
    glyphs: BTreeMap<String, Glyph>,
}

impl Font {
    /// An empty font with zero spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra gap inserted between rendered characters.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    /// Add a glyph, replacing (and returning) any glyph with the same label.
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.label.clone(), glyph)
    }

    pub fn glyph(&self, label: &str) -> Option<&Glyph> {
        self.glyphs.get(label)
    }

    /// Look up the glyph for a single character.
    pub fn glyph_for_char(&self, character: char) -> Option<&Glyph> {
        let mut buf = [0; 4];
        self.glyph(character.encode_utf8(&mut buf))
    }

    /// All glyphs, ordered by label.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Allows decoding a textual font description into a [Font].
///
/// Implemented by each font format backend.
pub trait Decoder {
    /// Error reported for malformed input.
    type Error;

    /// Decode the given font description.
    fn decode(text: &str) -> Result<Font, Self::Error>;
}
