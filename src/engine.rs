use log::trace;
use rand::Rng;
use std::fmt;

/// Side length of the square grid.
pub const SIZE: usize = 4;

type Tile = u32;
type Grid = [[Tile; SIZE]; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in the order the input layer lists them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Grid coordinates of line `k`, ordered from the edge tiles slide towards.
    #[inline]
    fn line(self, k: usize) -> [(usize, usize); SIZE] {
        let mut cells = [(0, 0); SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            let far = SIZE - 1 - i;
            *cell = match self {
                Move::Left => (k, i),
                Move::Right => (k, far),
                Move::Up => (i, k),
                Move::Down => (far, k),
            };
        }
        cells
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot spawn a tile: every cell is occupied")]
    BoardFull,
}

/// What a single shift did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSummary {
    /// Number of tile pairs combined.
    pub merges: usize,
    /// False when no tile slid or merged.
    pub changed: bool,
}

/// Where a spawned tile landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// 4x4 2048 grid. `0` is an empty cell, anything else is a tile value.
///
/// The board is mutated in place by [`Board::shift`] and [`Board::spawn`];
/// [`Board::tiles`] hands out a read-only snapshot for rendering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(Grid);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Start a game: empty grid plus two spawned tiles.
    ///
    /// ```
    /// use term_2048::engine::Board;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let b = Board::new(&mut rng);
    /// assert_eq!(b.occupied(), 2);
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Board::EMPTY;
        // An empty 4x4 grid always has room for two tiles.
        for _ in 0..2 {
            let _ = board.spawn(rng);
        }
        board
    }

    /// Construct a `Board` from an explicit grid, row-major.
    #[inline]
    pub fn from_tiles(tiles: Grid) -> Self {
        Board(tiles)
    }

    /// Read-only snapshot of the grid, row-major.
    #[inline]
    pub fn tiles(&self) -> Grid {
        self.0
    }

    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.0[row][col]
    }

    /// Slide and merge every row (left/right) or column (up/down) in place.
    ///
    /// Each resulting tile takes part in at most one merge per call, so
    /// `[2, 2, 2, 2]` shifted left becomes `[4, 4, 0, 0]`.
    ///
    /// ```
    /// use term_2048::engine::{Board, Move};
    /// let mut b = Board::from_tiles([[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]);
    /// let summary = b.shift(Move::Left);
    /// assert_eq!(b.tiles()[0], [4, 4, 0, 0]);
    /// assert_eq!(summary.merges, 1);
    /// ```
    pub fn shift(&mut self, dir: Move) -> MoveSummary {
        let mut summary = MoveSummary::default();
        for k in 0..SIZE {
            let cells = dir.line(k);
            let mut line = cells.map(|(r, c)| self.0[r][c]);
            let before = line;
            summary.merges += compact_line(&mut line);
            summary.changed |= line != before;
            for ((r, c), value) in cells.into_iter().zip(line) {
                self.0[r][c] = value;
            }
        }
        summary
    }

    /// Put a 2 or a 4 (even odds) into a uniformly chosen empty cell.
    ///
    /// Fails with [`EngineError::BoardFull`] and leaves the grid untouched
    /// when there is no empty cell; callers should check [`Board::is_full`].
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Spawned, EngineError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(EngineError::BoardFull);
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(0.5) { 2 } else { 4 };
        self.0[row][col] = value;
        trace!("spawned {value} at ({row}, {col})");
        Ok(Spawned { row, col, value })
    }

    /// True iff no cell is empty. Says nothing about whether merges remain.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|&t| t != 0)
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.0.iter().flatten().filter(|&&t| t != 0).count()
    }

    #[inline]
    pub fn count_empty(&self) -> usize {
        SIZE * SIZE - self.occupied()
    }

    /// Return the highest tile value present on the board (0 when empty).
    pub fn highest_tile(&self) -> Tile {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Empty-cell coordinates in row-major order.
    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (r, row) in self.0.iter().enumerate() {
            for (c, &t) in row.iter().enumerate() {
                if t == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.0).finish()
    }
}

impl From<Grid> for Board {
    fn from(tiles: Grid) -> Self {
        Board::from_tiles(tiles)
    }
}

impl From<Board> for Grid {
    fn from(b: Board) -> Self {
        b.tiles()
    }
}

/// Slide/merge in the given direction, in place.
pub fn shift(board: &mut Board, direction: Move) -> MoveSummary {
    board.shift(direction)
}

/// True if every cell holds a tile.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Spawn a tile using thread-local RNG.
///
/// For reproducible behavior, prefer `Board::spawn(&mut impl Rng)`.
pub fn spawn(board: &mut Board) -> Result<Spawned, EngineError> {
    let mut rng = rand::thread_rng();
    board.spawn(&mut rng)
}

/// Compact one line towards index 0, merging equal neighbours once.
///
/// `last` is the most recently written output slot and `merged` records
/// whether that slot was produced by a merge during this pass.
/// Returns the number of merges performed.
fn compact_line(line: &mut [Tile; SIZE]) -> usize {
    let mut last: Option<usize> = None;
    let mut merged = false;
    let mut merges = 0;
    for idx in 0..SIZE {
        let val = line[idx];
        if val == 0 {
            continue;
        }
        match last {
            Some(slot) if line[slot] == val && !merged => {
                line[slot] += val;
                merged = true;
                merges += 1;
            }
            _ => {
                let slot = last.map_or(0, |s| s + 1);
                line[slot] = val;
                last = Some(slot);
                merged = false;
            }
        }
    }
    let tail = last.map_or(0, |s| s + 1);
    line[tail..].fill(0);
    merges
}
