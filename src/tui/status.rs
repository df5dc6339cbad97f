//! Status bar: reveal state, instrument summary, and key hints.

/// Status information for the TUI status bar.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub strings: usize,
    pub frets: u32,
    pub revealed: bool,
}

impl StatusInfo {
    /// Format the reveal indicator.
    pub fn reveal_display(&self) -> &str {
        if self.revealed {
            "SHOWN"
        } else {
            "HIDDEN"
        }
    }

    /// Format the instrument size as "strings x frets".
    pub fn size_display(&self) -> String {
        format!("{} strings x {} frets", self.strings, self.frets)
    }

    /// Key reminder for the current state.
    pub fn hint(&self) -> &str {
        if self.revealed {
            "Ctrl-R:hide notes  Esc:quit"
        } else {
            "Ctrl-R:show notes  Esc:quit"
        }
    }
}
