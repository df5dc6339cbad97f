//! Error types for fretboard construction.

use std::fmt;

/// An error that occurred while building an instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct FretboardError {
    pub message: String,
    pub kind: ErrorKind,
    /// Display string number (1 = top row) and fret offset, when known.
    pub position: Option<(usize, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidNoteName,
    InvalidTuningLength,
    InvalidFretCount,
}

impl FretboardError {
    pub fn invalid_note(token: &str) -> Self {
        Self {
            message: format!("invalid note name: {token:?}"),
            kind: ErrorKind::InvalidNoteName,
            position: None,
        }
    }

    pub fn tuning_length(strings: usize, min: usize, max: usize) -> Self {
        Self {
            message: format!("tuning must have between {min} and {max} strings, got {strings}"),
            kind: ErrorKind::InvalidTuningLength,
            position: None,
        }
    }

    pub fn fret_count(frets: u32, min: u32, max: u32) -> Self {
        Self {
            message: format!("frets must be between {min} and {max}, got {frets}"),
            kind: ErrorKind::InvalidFretCount,
            position: None,
        }
    }

    /// Attach the string/fret where the error surfaced.
    pub fn at(mut self, string: usize, fret: u32) -> Self {
        self.position = Some((string, fret));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for FretboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((string, fret)) => write!(
                f,
                "{:?} (string {string}, fret {fret}): {}",
                self.kind, self.message
            ),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FretboardError {}
