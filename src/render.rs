//! Fixed-width text layout of a board.
//!
//! ```text
//! **********************************
//! *                                *
//! *   2                       4    *
//! *                                *
//! ...
//! **********************************
//! ```
//!
//! Every tile takes an 8-column field; a row is a padding line, the tile
//! line and another padding line, all framed by `*`.

use crate::engine::{Board, SIZE};
use std::fmt;

const FIELD_WIDTH: usize = 8;
const INNER_WIDTH: usize = FIELD_WIDTH * SIZE;

/// Text of a single tile field. Empty tiles render as blanks.
///
/// Odd-length numbers get one trailing space first, then equal padding on
/// both sides, so `2` renders as `"   2    "`.
pub fn tile_field(value: u32) -> String {
    if value == 0 {
        return " ".repeat(FIELD_WIDTH);
    }
    let mut digits = value.to_string();
    if digits.len() % 2 != 0 {
        digits.push(' ');
    }
    let pad = " ".repeat(FIELD_WIDTH.saturating_sub(digits.len()) / 2);
    format!("{pad}{digits}{pad}")
}

fn border() -> String {
    "*".repeat(INNER_WIDTH + 2)
}

fn padding_line() -> String {
    format!("*{}*", " ".repeat(INNER_WIDTH))
}

/// Whole-board text, one `\n`-terminated line per screen row.
pub fn board_text(board: &Board) -> String {
    let bar = border();
    let pad = padding_line();
    let mut out = String::with_capacity((INNER_WIDTH + 3) * (SIZE * 3 + 2));
    out.push_str(&bar);
    out.push('\n');
    for row in board.tiles() {
        out.push_str(&pad);
        out.push('\n');
        out.push('*');
        for value in row {
            out.push_str(&tile_field(value));
        }
        out.push_str("*\n");
        out.push_str(&pad);
        out.push('\n');
    }
    out.push_str(&bar);
    out.push('\n');
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&board_text(self))
    }
}
