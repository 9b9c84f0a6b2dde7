//! Raw-mode terminal session: full-screen text frames and blocking key reads.

use crossterm::{
    cursor::{self, MoveTo, MoveToNextLine},
    event::{self, Event, KeyEvent},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use log::warn;
use std::io::{self, Stdout, Write};

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct Session {
    out: Stdout,
}

impl Session {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    /// Clear the screen and write `text` from the top-left corner.
    pub fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in text.lines() {
            // Raw mode does not turn `\n` into a carriage return.
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        self.out.flush()
    }

    /// Block until the next key press.
    pub fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }

    /// Show a final message alone on screen and wait for any key.
    pub fn farewell(&mut self, message: &str) -> io::Result<()> {
        self.draw(message)?;
        self.read_key().map(|_| ())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}
