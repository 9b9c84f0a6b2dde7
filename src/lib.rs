//! term-2048: the 2048 sliding-tile puzzle in a terminal
//!
//! This crate provides:
//! - A 4x4 `Board` with in-place moves, random spawns and a fullness check (`engine` module)
//! - The fixed-width board text layout (`render` module)
//! - Key mapping and the move/spawn cycle (`input` and `game` modules)
//! - A raw-mode terminal session used by the binary (`terminal` module)
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Board, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut b = Board::new(&mut rng);
//! b.shift(Move::Left);
//! if !b.is_full() {
//!     b.spawn(&mut rng).unwrap();
//! }
//! println!("{b}");
//! ```
//!
//! Full loop without a terminal
//! ```
//! use term_2048::engine::Move;
//! use term_2048::game::{Game, GameConfig, Step};
//! use term_2048::input::Command;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut game = Game::new(StdRng::seed_from_u64(123), GameConfig::default());
//! let mut step = Step::Continue;
//! for dir in [Move::Left, Move::Up, Move::Right, Move::Down] {
//!     step = game.step(Command::Move(dir)).unwrap();
//!     if step != Step::Continue { break; }
//! }
//! assert!(game.moves() > 0);
//! ```
//!
pub mod engine;
pub mod game;
pub mod input;
pub mod render;
pub mod terminal;
