//! Fretboard model: pitch arithmetic, note grid construction, and ASCII rendering.

pub mod builder;
pub mod error;
pub mod guitar;
pub mod note;
pub mod pitch;
pub mod render;

pub use builder::{FretboardBuilder, FRET_RANGE, STRING_RANGE};
pub use error::{ErrorKind, FretboardError};
pub use guitar::{Guitar, GuitarString};
pub use note::{Note, NoteState};
pub use pitch::{note_at, NoteName, PitchClass, PitchClassTable, PITCH_CLASSES};

/// Common interface for fretted instruments.
///
/// An instrument owns a grid of strings by frets and can draw itself as a
/// text diagram. Rendering never fails once the instrument exists.
pub trait Instrument: Send + Sync {
    /// Human-readable name for this instrument.
    fn name(&self) -> &str;

    fn frets(&self) -> u32;

    /// Strings top row first.
    fn strings(&self) -> &[GuitarString];

    /// Render the full diagram.
    fn render(&self) -> String;
}

/// Render any instrument.
pub fn render_instrument(instrument: &dyn Instrument) -> String {
    instrument.render()
}
