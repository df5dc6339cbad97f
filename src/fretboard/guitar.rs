//! The fretted-string instrument: tuning, fret count, and the note grid.

use super::builder::FretboardBuilder;
use super::error::FretboardError;
use super::note::{Note, NoteState};
use super::pitch::NoteName;
use super::render;
use super::Instrument;

/// One physical string: open note at index 0, fret `i` at index `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuitarString {
    pub(crate) notes: Vec<Note>,
}

impl GuitarString {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The open (unfretted) note.
    pub fn open(&self) -> &Note {
        &self.notes[0]
    }

    pub fn note_mut(&mut self, fret: usize) -> Option<&mut Note> {
        self.notes.get_mut(fret)
    }
}

/// A guitar with 6–8 strings and 12–24 frets.
///
/// `strings()` runs top row first: the first tuning entry is the last string.
#[derive(Debug, Clone, PartialEq)]
pub struct Guitar {
    pub(crate) tuning: Vec<NoteName>,
    pub(crate) frets: u32,
    pub(crate) strings: Vec<GuitarString>,
}

impl Guitar {
    /// Build a guitar from raw tuning tokens (lowest string first).
    pub fn new<S: AsRef<str>>(tuning: &[S], frets: u32) -> Result<Self, FretboardError> {
        FretboardBuilder::build(tuning, frets)
    }

    /// Open pitches in input order.
    pub fn tuning(&self) -> &[NoteName] {
        &self.tuning
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn strings(&self) -> &[GuitarString] {
        &self.strings
    }

    /// Mutable access to the note at display row `string` (0 = top) and `fret`.
    pub fn note_mut(&mut self, string: usize, fret: usize) -> Option<&mut Note> {
        self.strings.get_mut(string)?.note_mut(fret)
    }

    /// Put every note into `state`.
    pub fn set_all(&mut self, state: NoteState) {
        for note in self.strings.iter_mut().flat_map(|s| s.notes.iter_mut()) {
            note.state = state;
        }
    }

    pub fn reveal_all(&mut self) {
        self.set_all(NoteState::Visible);
    }

    pub fn hide_all(&mut self) {
        self.set_all(NoteState::Hidden);
    }

    /// True when no fretted note is hidden or highlighted. The open note is
    /// always labelled in the diagram, so its state is ignored.
    pub fn is_fully_revealed(&self) -> bool {
        self.strings
            .iter()
            .flat_map(|s| s.notes.iter().skip(1))
            .all(|n| n.state == NoteState::Visible)
    }
}

impl Instrument for Guitar {
    fn name(&self) -> &str {
        "Guitar"
    }

    fn frets(&self) -> u32 {
        self.frets
    }

    fn strings(&self) -> &[GuitarString] {
        &self.strings
    }

    fn render(&self) -> String {
        render::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

    #[test]
    fn note_mut_reaches_grid() {
        let mut guitar = Guitar::new(&STANDARD, 12).unwrap();
        guitar.note_mut(5, 5).unwrap().reveal();
        assert_eq!(guitar.strings()[5].notes()[5].state, NoteState::Visible);
        assert!(guitar.note_mut(6, 0).is_none());
        assert!(guitar.note_mut(0, 13).is_none());
    }

    #[test]
    fn reveal_and_hide_all() {
        let mut guitar = Guitar::new(&STANDARD, 12).unwrap();
        assert!(!guitar.is_fully_revealed());
        guitar.reveal_all();
        assert!(guitar.is_fully_revealed());
        guitar.hide_all();
        assert!(guitar.strings().iter().all(|s| s.notes().iter().all(Note::is_hidden)));
    }

    #[test]
    fn open_note_state_does_not_affect_reveal() {
        let mut guitar = Guitar::new(&STANDARD, 12).unwrap();
        guitar.reveal_all();
        guitar.note_mut(3, 0).unwrap().hide();
        assert!(guitar.is_fully_revealed());
        guitar.note_mut(3, 1).unwrap().highlight();
        assert!(!guitar.is_fully_revealed());
    }

    #[test]
    fn open_note_is_fret_zero() {
        let guitar = Guitar::new(&["D", "A", "D", "G", "A", "D"], 12).unwrap();
        assert_eq!(guitar.strings()[4].open().name(), NoteName::A);
        assert_eq!(guitar.strings()[5].open().name(), NoteName::D);
    }

    #[test]
    fn instrument_reports_name_and_frets() {
        let guitar = Guitar::new(&STANDARD, 22).unwrap();
        let instrument: &dyn Instrument = &guitar;
        assert_eq!(instrument.name(), "Guitar");
        assert_eq!(instrument.frets(), 22);
        assert_eq!(instrument.strings().len(), 6);
    }
}
