//! Console collaborator: line prompts, text rendering, screen clearing.

use std::io::{self, BufRead, Write};

use crossterm::{cursor, execute, terminal};

/// The narrow console surface the session drives.
///
/// Implementations over the process terminal run the real game; scripted
/// ones feed canned input in tests.
pub trait Console {
    /// Writes `message` as a prompt, then reads one line of input with the
    /// trailing newline removed.
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] when input is exhausted.
    fn prompt_line(&mut self, message: &str) -> io::Result<String>;

    /// Writes `text` to the display.
    fn render(&mut self, text: &str);

    /// Resets the visible surface and scrollback.
    fn clear_screen(&mut self);
}

/// Console over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Creates a terminal console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn render(&mut self, text: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn clear_screen(&mut self) {
        let _ = execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            terminal::Clear(terminal::ClearType::Purge),
            cursor::MoveTo(0, 0)
        );
    }
}
