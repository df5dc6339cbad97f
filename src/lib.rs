//! Fremorizer: a terminal fretboard diagram for learning note positions.

pub mod cli;
pub mod config;
pub mod fretboard;
pub mod logging;
pub mod tui;
