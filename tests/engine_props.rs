#![forbid(unsafe_code)]

//! Property tests for the board transition kernel.
//!
//! Invariants covered:
//! - A shift never adds tiles: occupied count drops by exactly the merges.
//! - Shifts preserve the tile sum and merge each tile at most once.
//! - Repeating a shift can only change the grid through new merges.
//! - Right/down are the mirror images of left/up.
//! - `is_full` agrees with a direct zero count.
//! - A spawn fills exactly one empty cell with a 2 or a 4.
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use term_2048::engine::{Board, Move};

type Grid = [[u32; 4]; 4];

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![3 => Just(0u32), 5 => (1u32..11).prop_map(|e| 1 << e)]
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(tile()))
}

fn direction() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn sum(b: &Board) -> u64 {
    b.tiles().iter().flatten().map(|&t| t as u64).sum()
}

fn mirror(g: Grid) -> Grid {
    g.map(|mut row| {
        row.reverse();
        row
    })
}

fn transpose(g: Grid) -> Grid {
    let mut t = [[0; 4]; 4];
    for (r, row) in g.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            t[c][r] = v;
        }
    }
    t
}

fn shifted(g: Grid, dir: Move) -> Grid {
    let mut b = Board::from_tiles(g);
    b.shift(dir);
    b.tiles()
}

#[test]
fn concrete_lines() {
    assert_eq!(shifted([[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]], Move::Left)[0], [4, 4, 0, 0]);
    assert_eq!(shifted([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Move::Left)[0], [4, 4, 0, 0]);
    assert_eq!(shifted([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Move::Right)[0], [0, 0, 4, 4]);
    let up = shifted(transpose([[4, 4, 0, 4], [0; 4], [0; 4], [0; 4]]), Move::Up);
    assert_eq!(transpose(up)[0], [8, 4, 0, 0]);
}

proptest! {
    #[test]
    fn shift_conserves_tiles(g in grid(), dir in direction()) {
        let before = Board::from_tiles(g);
        let mut after = before;
        let summary = after.shift(dir);
        prop_assert_eq!(after.occupied() + summary.merges, before.occupied());
        prop_assert!(after.occupied() <= before.occupied());
        prop_assert_eq!(sum(&after), sum(&before));
        prop_assert_eq!(summary.changed, after != before);
    }

    #[test]
    fn tiles_merge_at_most_once(g in grid(), dir in direction()) {
        let before = Board::from_tiles(g);
        let mut after = before;
        after.shift(dir);
        // A tile born from a merge never doubles again within the same shift.
        prop_assert!(after.highest_tile() <= before.highest_tile() * 2);
        for row in after.tiles() {
            for t in row {
                prop_assert!(t == 0 || t.is_power_of_two());
            }
        }
    }

    #[test]
    fn equal_lines_merge_pairwise(exp in 1u32..11) {
        let v = 1u32 << exp;
        let mut b = Board::from_tiles([[v; 4]; 4]);
        let summary = b.shift(Move::Left);
        prop_assert_eq!(summary.merges, 8);
        prop_assert_eq!(b.tiles(), [[2 * v, 2 * v, 0, 0]; 4]);
    }

    #[test]
    fn repeated_shift_only_merges(g in grid(), dir in direction()) {
        let mut b = Board::from_tiles(g);
        b.shift(dir);
        let once = b;
        let second = b.shift(dir);
        if second.merges == 0 {
            prop_assert!(!second.changed);
            prop_assert_eq!(b, once);
        }
    }

    #[test]
    fn right_and_down_mirror_left_and_up(g in grid()) {
        prop_assert_eq!(mirror(shifted(g, Move::Right)), shifted(mirror(g), Move::Left));
        prop_assert_eq!(transpose(shifted(g, Move::Up)), shifted(transpose(g), Move::Left));
        prop_assert_eq!(
            transpose(shifted(g, Move::Down)),
            shifted(transpose(g), Move::Right)
        );
    }

    #[test]
    fn left_then_right_keeps_order_without_merges(g in grid()) {
        let mut b = Board::from_tiles(g);
        let left = b.shift(Move::Left);
        let packed = b.tiles();
        let right = b.shift(Move::Right);
        if left.merges == 0 && right.merges == 0 {
            for (l, r) in packed.iter().zip(b.tiles().iter()) {
                let lv: Vec<u32> = l.iter().copied().filter(|&t| t != 0).collect();
                let rv: Vec<u32> = r.iter().copied().filter(|&t| t != 0).collect();
                prop_assert_eq!(&lv, &rv);
                prop_assert!(r[..4 - rv.len()].iter().all(|&t| t == 0));
            }
        }
    }

    #[test]
    fn full_matches_zero_count(g in grid()) {
        let b = Board::from_tiles(g);
        let zeros = g.iter().flatten().filter(|&&t| t == 0).count();
        prop_assert_eq!(b.is_full(), zeros == 0);
        prop_assert_eq!(b.count_empty(), zeros);
    }

    #[test]
    fn spawn_fills_one_empty_cell(g in grid(), seed in any::<u64>()) {
        let before = Board::from_tiles(g);
        prop_assume!(!before.is_full());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut after = before;
        let spawned = after.spawn(&mut rng).unwrap();
        prop_assert_eq!(before.tile(spawned.row, spawned.col), 0);
        prop_assert!(spawned.value == 2 || spawned.value == 4);
        prop_assert_eq!(after.occupied(), before.occupied() + 1);
        for r in 0..4 {
            for c in 0..4 {
                if (r, c) != (spawned.row, spawned.col) {
                    prop_assert_eq!(after.tile(r, c), before.tile(r, c));
                }
            }
        }
    }
}
