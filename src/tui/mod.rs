//! TUI interface: the rendered fretboard, a note input line, and a status bar.
//!
//! The App struct holds all TUI state and drives the event loop.

pub mod input;
pub mod keybindings;
pub mod status;

pub use input::TextInput;
pub use keybindings::{map_key, Action};
pub use status::StatusInfo;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::fretboard::{Guitar, Instrument};

/// Maximum characters accepted by the note input (fits "C#/Db").
const INPUT_CHAR_LIMIT: usize = 5;

/// The main TUI application state.
pub struct App {
    pub guitar: Guitar,
    pub input: TextInput,
    pub status: StatusInfo,
    pub should_quit: bool,
}

impl App {
    /// Create a new App around an already-built instrument.
    pub fn new(guitar: Guitar) -> Self {
        let status = StatusInfo {
            strings: guitar.strings().len(),
            frets: guitar.frets(),
            revealed: guitar.is_fully_revealed(),
        };
        Self {
            guitar,
            input: TextInput::new("E", INPUT_CHAR_LIMIT),
            status,
            should_quit: false,
        }
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("action: {action:?}");
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleReveal => {
                if self.status.revealed {
                    self.guitar.hide_all();
                } else {
                    self.guitar.reveal_all();
                }
                self.status.revealed = !self.status.revealed;
            }
            Action::InputInsert(c) => self.input.insert_char(c),
            Action::InputBackspace => self.input.backspace(),
            Action::InputDelete => self.input.delete(),
            Action::InputLeft => self.input.move_left(),
            Action::InputRight => self.input.move_right(),
            Action::InputHome => self.input.home(),
            Action::InputEnd => self.input.end(),
        }
    }

    /// The current diagram text.
    pub fn diagram(&self) -> String {
        Instrument::render(&self.guitar)
    }

    /// Draw the UI.
    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.area();
        let diagram = self.diagram();
        let diagram_height = diagram.lines().count() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(diagram_height), // Fretboard
                Constraint::Length(3),              // Input
                Constraint::Min(0),
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.draw_fretboard(frame, chunks[0], &diagram);
        self.draw_input(frame, chunks[1]);
        self.draw_status(frame, chunks[3]);
    }

    fn draw_fretboard(&self, frame: &mut Frame, area: Rect, diagram: &str) {
        let lines: Vec<Line> = diagram.lines().map(Line::raw).collect();
        let block = Block::default()
            .title(format!(" {} ", self.guitar.name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let content = if self.input.is_empty() {
            Span::styled(
                self.input.placeholder(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(self.input.value())
        };
        let block = Block::default().title(" Note ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

        let x = area.x + 1 + self.input.cursor() as u16;
        let y = area.y + 1;
        if x < area.x + area.width && y < area.y + area.height {
            frame.set_cursor_position((x, y));
        }
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status.reveal_display()),
                Style::default()
                    .fg(if self.status.revealed {
                        Color::Green
                    } else {
                        Color::Yellow
                    })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} ", self.status.size_display())),
            Span::styled(
                format!(" {} ", self.status.hint()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));
        frame.render_widget(paragraph, area);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(250))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = keybindings::map_key(key) {
                            self.handle_action(action);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::NoteState;

    fn standard() -> Guitar {
        Guitar::new(&["E", "A", "D", "G", "B", "E"], 12).unwrap()
    }

    #[test]
    fn app_creation() {
        let app = App::new(standard());
        assert!(!app.should_quit);
        assert!(!app.status.revealed);
        assert_eq!(app.status.strings, 6);
        assert_eq!(app.status.frets, 12);
        assert!(app.input.is_empty());
    }

    #[test]
    fn app_picks_up_revealed_guitar() {
        let mut guitar = standard();
        guitar.reveal_all();
        let app = App::new(guitar);
        assert!(app.status.revealed);
    }

    #[test]
    fn handle_quit() {
        let mut app = App::new(standard());
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_reveal_round_trip() {
        let mut app = App::new(standard());
        app.handle_action(Action::ToggleReveal);
        assert!(app.status.revealed);
        assert!(app.guitar.is_fully_revealed());
        assert!(app.diagram().contains("|--F--"));

        app.handle_action(Action::ToggleReveal);
        assert!(!app.status.revealed);
        assert!(app
            .guitar
            .strings()
            .iter()
            .flat_map(|s| s.notes())
            .all(|n| n.state == NoteState::Hidden));
    }

    #[test]
    fn typing_fills_input() {
        let mut app = App::new(standard());
        for c in "G#".chars() {
            app.handle_action(Action::InputInsert(c));
        }
        app.handle_action(Action::InputBackspace);
        assert_eq!(app.input.value(), "G");
    }

    #[test]
    fn diagram_is_stable() {
        let app = App::new(standard());
        assert_eq!(app.diagram(), app.diagram());
    }
}
