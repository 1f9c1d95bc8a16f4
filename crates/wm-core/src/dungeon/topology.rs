//! Toroidal coordinates
//!
//! Both axes wrap: stepping off the east edge lands on column 0, stepping
//! off the north edge lands on the last row.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Tile coordinate, always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Fixed-size torus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torus {
    pub width: usize,
    pub height: usize,
}

impl Torus {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Map `x` into `0..width`
    ///
    /// `x` must lie within one period of the grid (`-width..2*width`).
    #[inline]
    pub fn wrap_x(&self, x: isize) -> usize {
        wrap_once(x, self.width)
    }

    /// Map `y` into `0..height`
    ///
    /// `y` must lie within one period of the grid (`-height..2*height`).
    #[inline]
    pub fn wrap_y(&self, y: isize) -> usize {
        wrap_once(y, self.height)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Neighbouring position one step in `dir`
    #[inline]
    pub fn step(&self, pos: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position {
            x: self.wrap_x(pos.x as isize + dx),
            y: self.wrap_y(pos.y as isize + dy),
        }
    }

    /// Position offset by `(dx, dy)`, each within one period
    #[inline]
    pub fn offset(&self, pos: Position, dx: isize, dy: isize) -> Position {
        Position {
            x: self.wrap_x(pos.x as isize + dx),
            y: self.wrap_y(pos.y as isize + dy),
        }
    }

    /// Every position, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Position { x, y }))
    }
}

#[inline]
fn wrap_once(v: isize, len: usize) -> usize {
    let len = len as isize;
    assert!(
        (-len..2 * len).contains(&v),
        "coordinate {v} is more than one period outside 0..{len}"
    );
    if v < 0 {
        (v + len) as usize
    } else if v >= len {
        (v - len) as usize
    } else {
        v as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_edges() {
        let torus = Torus::new(8, 6);
        assert_eq!(torus.wrap_x(-1), 7);
        assert_eq!(torus.wrap_x(8), 0);
        assert_eq!(torus.wrap_y(-1), 5);
        assert_eq!(torus.wrap_y(6), 0);
        assert_eq!(torus.wrap_x(-8), 0);
        assert_eq!(torus.wrap_y(11), 5);
    }

    #[test]
    fn test_step_wraps_both_axes() {
        let torus = Torus::new(8, 6);
        let corner = Position::new(0, 0);
        assert_eq!(torus.step(corner, Direction::North), Position::new(0, 5));
        assert_eq!(torus.step(corner, Direction::West), Position::new(7, 0));
        let far = Position::new(7, 5);
        assert_eq!(torus.step(far, Direction::East), Position::new(0, 5));
        assert_eq!(torus.step(far, Direction::South), Position::new(7, 0));
    }

    #[test]
    #[should_panic(expected = "more than one period")]
    fn test_wrap_rejects_far_coordinates() {
        Torus::new(8, 6).wrap_x(16);
    }

    #[test]
    fn test_positions_column_major() {
        let torus = Torus::new(2, 3);
        let all: Vec<Position> = torus.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[3], Position::new(1, 0));
    }

    proptest! {
        #[test]
        fn prop_wrap_is_identity_in_range(
            w in 2usize..40,
            h in 2usize..40,
            x in 0usize..40,
            y in 0usize..40,
        ) {
            let torus = Torus::new(w, h);
            let (x, y) = (x % w, y % h);
            prop_assert_eq!(torus.wrap_x(x as isize), x);
            prop_assert_eq!(torus.wrap_y(y as isize), y);
        }

        #[test]
        fn prop_wrap_agrees_with_rem_euclid(w in 2usize..40, raw in 0usize..120) {
            // Spread `raw` over one period either side of the grid
            let w_i = w as isize;
            let k = (raw % (3 * w)) as isize - w_i;
            let torus = Torus::new(w, w);
            prop_assert_eq!(torus.wrap_x(k), k.rem_euclid(w_i) as usize);
        }

        #[test]
        fn prop_step_then_back_returns(
            w in 2usize..20,
            h in 2usize..20,
            x in 0usize..20,
            y in 0usize..20,
            d in 0usize..4,
        ) {
            let torus = Torus::new(w, h);
            let pos = Position::new(x % w, y % h);
            let dir = Direction::ALL[d];
            prop_assert_eq!(torus.step(torus.step(pos, dir), dir.opposite()), pos);
        }
    }
}
