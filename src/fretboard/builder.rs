//! Fretboard construction: validate the tuning and fret count, then derive
//! every note on every string.

use std::ops::RangeInclusive;

use super::error::FretboardError;
use super::guitar::{Guitar, GuitarString};
use super::note::Note;
use super::pitch::note_at;

/// Accepted number of strings.
pub const STRING_RANGE: RangeInclusive<usize> = 6..=8;
/// Accepted number of frets.
pub const FRET_RANGE: RangeInclusive<u32> = 12..=24;

/// Builds a [`Guitar`] from raw tuning tokens.
pub struct FretboardBuilder;

impl FretboardBuilder {
    /// Validate `tuning` and `frets`, then materialize the note grid.
    ///
    /// `tuning` lists open notes lowest string first. The returned strings are
    /// stored top row first, so the first tuning entry ends up last. Nothing is
    /// returned unless every note resolves.
    pub fn build<S: AsRef<str>>(tuning: &[S], frets: u32) -> Result<Guitar, FretboardError> {
        let result = Self::try_build(tuning, frets);
        match &result {
            Ok(guitar) => log::info!(
                "built guitar: {} strings, {} frets",
                guitar.strings.len(),
                guitar.frets
            ),
            Err(e) => log::warn!("guitar construction failed: {e}"),
        }
        result
    }

    fn try_build<S: AsRef<str>>(tuning: &[S], frets: u32) -> Result<Guitar, FretboardError> {
        let count = tuning.len();
        if !STRING_RANGE.contains(&count) {
            return Err(FretboardError::tuning_length(
                count,
                *STRING_RANGE.start(),
                *STRING_RANGE.end(),
            ));
        }
        if !FRET_RANGE.contains(&frets) {
            return Err(FretboardError::fret_count(
                frets,
                *FRET_RANGE.start(),
                *FRET_RANGE.end(),
            ));
        }

        let mut open_notes = Vec::with_capacity(count);
        let mut strings = Vec::with_capacity(count);
        for (i, token) in tuning.iter().enumerate() {
            let token = token.as_ref();
            // Display row of this string, counted from the top (1-based).
            let row = count - i;
            let notes = (0..=frets)
                .map(|fret| {
                    note_at(token, fret)
                        .map(Note::new)
                        .map_err(|e| e.at(row, fret))
                })
                .collect::<Result<Vec<_>, _>>()?;
            log::debug!("string {row}: open {}", notes[0].name());
            open_notes.push(notes[0].name());
            strings.push(GuitarString { notes });
        }
        strings.reverse();

        Ok(Guitar {
            tuning: open_notes,
            frets,
            strings,
        })
    }
}
