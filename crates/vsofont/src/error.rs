use alloc::string::String;
use thiserror::Error;

/// Reasons a VSO font description can be rejected.
///
/// Line numbers are 1-based positions in the input text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("line {line}: {directive} expects {expected} tokens, found {found}")]
    TokenCount {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: failed to read {field} from {token:?}")]
    NumberParse {
        line: usize,
        /// What was being read, e.g. "grid width" or "glyph index"
        field: &'static str,
        token: String,
    },

    #[error("line {line}: cannot convert grid index with grid width {width}")]
    InvalidGrid { line: usize, width: i32 },
}

impl DecodeError {
    /// Line on which decoding stopped.
    pub fn line(&self) -> usize {
        match self {
            Self::TokenCount { line, .. }
            | Self::NumberParse { line, .. }
            | Self::InvalidGrid { line, .. } => *line,
        }
    }
}

pub type Result<T> = core::result::Result<T, DecodeError>;
