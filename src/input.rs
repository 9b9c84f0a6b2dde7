//! Maps terminal key events to game commands.
//!
//! | Key | Command |
//! |-----|---------|
//! | ← → ↑ ↓ | Move |
//! | h j k l (with `vim_keys`) | Move |
//! | q, Ctrl+C | Quit |
//! | anything else | Ignore |

use crate::engine::Move;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap {
    pub vim_keys: bool,
}

impl KeyMap {
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    pub fn command(&self, key: KeyEvent) -> Command {
        // Windows reports releases too; only presses count.
        if key.kind == KeyEventKind::Release {
            return Command::Ignore;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Command::Quit,
                _ => Command::Ignore,
            };
        }
        match key.code {
            KeyCode::Left => Command::Move(Move::Left),
            KeyCode::Right => Command::Move(Move::Right),
            KeyCode::Up => Command::Move(Move::Up),
            KeyCode::Down => Command::Move(Move::Down),
            KeyCode::Char('q') => Command::Quit,
            KeyCode::Char(c) if self.vim_keys => match c {
                'h' => Command::Move(Move::Left),
                'j' => Command::Move(Move::Down),
                'k' => Command::Move(Move::Up),
                'l' => Command::Move(Move::Right),
                _ => Command::Ignore,
            },
            _ => Command::Ignore,
        }
    }
}
