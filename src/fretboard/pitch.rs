//! Pitch classes and note names: the fixed 12-tone table and fret arithmetic.

use std::fmt;
use std::str::FromStr;

use super::error::FretboardError;

/// Number of semitones in an octave.
pub const SEMITONES: u32 = 12;

/// A pitch modulo the octave, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class, wrapping values past the octave.
    pub fn new(value: u32) -> Self {
        Self((value % SEMITONES) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: u32) -> Self {
        Self::new(self.0 as u32 + semitones % SEMITONES)
    }
}

/// The twelve display labels. Altered pitches carry both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NoteName {
    C = 0,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    /// All names in pitch-class order (C = 0).
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// The label printed in the diagram.
    pub fn label(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#/Db",
            NoteName::D => "D",
            NoteName::DSharp => "D#/Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#/Gb",
            NoteName::G => "G",
            NoteName::GSharp => "G#/Ab",
            NoteName::A => "A",
            NoteName::ASharp => "A#/Bb",
            NoteName::B => "B",
        }
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass(self as u8)
    }

    /// Natural notes have single-character labels.
    pub fn is_natural(self) -> bool {
        self.label().len() == 1
    }

    /// The name sounding `semitones` above this one.
    pub fn transpose(self, semitones: u32) -> NoteName {
        PITCH_CLASSES.name_of(self.pitch_class().transpose(semitones))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NoteName {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PITCH_CLASSES
            .index_of(s)
            .map(|pc| PITCH_CLASSES.name_of(pc))
    }
}

/// Bidirectional name/pitch-class lookup.
#[derive(Debug)]
pub struct PitchClassTable {
    names: [NoteName; 12],
}

/// The process-wide table. Both directions come from the same array, so
/// nothing is rebuilt per lookup.
pub static PITCH_CLASSES: PitchClassTable = PitchClassTable {
    names: NoteName::ALL,
};

impl PitchClassTable {
    /// Resolve a label to its pitch class. Only the twelve labels match,
    /// ignoring ASCII case.
    pub fn index_of(&self, token: &str) -> Result<PitchClass, FretboardError> {
        self.names
            .iter()
            .find(|name| name.label().eq_ignore_ascii_case(token))
            .map(|name| name.pitch_class())
            .ok_or_else(|| FretboardError::invalid_note(token))
    }

    pub fn name_of(&self, pitch_class: PitchClass) -> NoteName {
        self.names[pitch_class.value() as usize]
    }
}

/// The note sounding at `fret` on a string tuned to `open_note`.
pub fn note_at(open_note: &str, fret: u32) -> Result<NoteName, FretboardError> {
    let open = PITCH_CLASSES.index_of(open_note)?;
    Ok(PITCH_CLASSES.name_of(open.transpose(fret)))
}
