//! A single fret position and its display state.

use super::pitch::NoteName;

/// How a note cell is shown.
///
/// Every note starts `Hidden`. The host moves notes between states; nothing
/// in the fretboard core changes them after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteState {
    /// Blank cell.
    #[default]
    Hidden,
    /// Shows the note name.
    Visible,
    /// Masked placeholder marking a note to be identified.
    Highlighted,
}

/// One fret position on one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    name: NoteName,
    pub state: NoteState,
}

impl Note {
    pub fn new(name: NoteName) -> Self {
        Self {
            name,
            state: NoteState::Hidden,
        }
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn is_hidden(&self) -> bool {
        self.state == NoteState::Hidden
    }

    pub fn is_highlighted(&self) -> bool {
        self.state == NoteState::Highlighted
    }

    pub fn reveal(&mut self) {
        self.state = NoteState::Visible;
    }

    pub fn highlight(&mut self) {
        self.state = NoteState::Highlighted;
    }

    pub fn hide(&mut self) {
        self.state = NoteState::Hidden;
    }
}
