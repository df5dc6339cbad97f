//! ASCII rendering: fret markers and note rows laid out in fixed-width columns.
//!
//! Every fretted cell is `CELL_WIDTH` characters: a `|` followed by five
//! characters of content. Natural names are padded (`|--E--`), dual labels
//! already fill the envelope (`|C#/Db`). The marker line places the last digit
//! of each fret number above the centre character of that fret's cell.

use super::guitar::{Guitar, GuitarString};
use super::note::NoteState;

/// Width of one fretted cell.
pub const CELL_WIDTH: usize = 6;

/// Frets carrying an inlay marker on a typical guitar neck.
pub const MARKER_FRETS: [u32; 11] = [1, 3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

const HIDDEN_CELL: &str = "|-----";
const HIGHLIGHTED_CELL: &str = "|-(?)-";

/// Open-cell width the marker line assumes (a natural name plus a space).
const BASE_GUTTER: usize = 2;

pub fn is_marker(fret: u32) -> bool {
    MARKER_FRETS.contains(&fret)
}

/// The fret-number line for frets `1..=frets`.
pub fn render_markers(frets: u32) -> String {
    let mut line = String::new();
    for fret in 1..=frets {
        match fret {
            // 13/14 and 22/23 follow without a marker; pad so they stay aligned.
            12 | 21 => line += &format!("     {fret} "),
            f if is_marker(f) => line += &format!("     {f}"),
            f if f < 11 => line.push_str("      "),
            _ => line.push_str("     "),
        }
    }
    line
}

/// One string row: open note, fretted cells, closing bar, newline.
pub fn render_string(string: &GuitarString) -> String {
    let mut row = String::new();
    write_string_row(&mut row, string, open_cell_width(string));
    row
}

/// The full diagram: summary line, marker line, then every string top to bottom.
pub fn render(guitar: &Guitar) -> String {
    let gutter = guitar
        .strings()
        .iter()
        .map(open_cell_width)
        .max()
        .unwrap_or(BASE_GUTTER)
        .max(BASE_GUTTER);

    let mut out = String::new();
    let tuning: Vec<&str> = guitar.tuning().iter().map(|n| n.label()).collect();
    out.push_str(&format!(
        "Guitar; tuning: [{}], frets: {}\n",
        tuning.join(" "),
        guitar.frets()
    ));
    out.push_str(&" ".repeat(gutter - BASE_GUTTER));
    out.push_str(&render_markers(guitar.frets()));
    out.push('\n');
    for string in guitar.strings() {
        write_string_row(&mut out, string, gutter);
    }
    out
}

fn open_cell_width(string: &GuitarString) -> usize {
    string.open().name().label().len() + 1
}

fn write_string_row(out: &mut String, string: &GuitarString, gutter: usize) {
    out.push_str(&format!("{:<gutter$}", string.open().name().label()));

    for note in string.notes().iter().skip(1) {
        match note.state {
            NoteState::Highlighted => out.push_str(HIGHLIGHTED_CELL),
            NoteState::Hidden => out.push_str(HIDDEN_CELL),
            NoteState::Visible => {
                let name = note.name();
                if name.is_natural() {
                    out.push_str(&format!("|--{name}--"));
                } else {
                    out.push_str(&format!("|{name}"));
                }
            }
        }
    }
    out.push_str("|\n");
}
