//! A turn-based snake simulation on a fixed-size grid.
//!
//! The host (renderer, terminal, whatever) calls [`SnakeGame::step`] once per
//! tick with the requested [`Direction`] and then re-reads the [`Board`].

#![deny(unsafe_code)]

use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::ops::Add;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// `(Δrow, Δcol)` for one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        use Direction::*;

        match self {
            Up => (-1, 0),
            Right => (0, 1),
            Down => (1, 0),
            Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        use Direction::*;

        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }
}

/// Decodes the wire-style encoding where `-1` means "no direction".
impl TryFrom<i8> for Direction {
    type Error = i8;

    fn try_from(raw: i8) -> Result<Self, i8> {
        use Direction::*;

        match raw {
            0 => Ok(Up),
            1 => Ok(Right),
            2 => Ok(Down),
            3 => Ok(Left),
            other => Err(other),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    pub fn new(row: u16, col: u16) -> Self {
        Coord { row, col }
    }

    /// Squared Euclidean distance; compared against `alpha²` so we never
    /// touch floats.
    pub fn distance_sq(self, other: Coord) -> u32 {
        let dr = (self.row as i32 - other.row as i32).abs() as u32;
        let dc = (self.col as i32 - other.col as i32).abs() as u32;

        dr * dr + dc * dc
    }

    /// The direction that takes `self` to `other`, if they're neighbours.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| self + *d == Some(other))
    }
}

impl From<(u16, u16)> for Coord {
    fn from((row, col): (u16, u16)) -> Self {
        Coord { row, col }
    }
}

impl Display for Coord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.row, self.col)
    }
}

/// Moving off the top or left edge gives `None`. The bottom and right edges
/// depend on the board, so callers check those with [`Grid::contains`].
impl Add<Direction> for Coord {
    type Output = Option<Coord>;

    fn add(self, rhs: Direction) -> Option<Coord> {
        let Coord { row, col } = self;
        let (dr, dc) = rhs.offset();

        Some(Coord {
            row: u16::try_from(row as i32 + dr).ok()?,
            col: u16::try_from(col as i32 + dc).ok()?,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ongoing,
    Win,
    Collision,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Ongoing
    }
}

pub trait SnakeGame: Display {
    fn status(&self) -> Status;
    fn head(&self) -> Coord;
    fn len(&self) -> usize;
    /// Apples eaten so far.
    fn score(&self) -> u32;
    fn apple(&self) -> Option<Coord>;
    fn board(&self) -> &Board;

    /// Head first.
    fn body(&self) -> Box<dyn Iterator<Item = Coord> + '_>;

    fn step(&mut self, dir: Direction) -> Status;
}

pub mod apple;
pub mod board;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod replay;
pub mod snake;

pub use board::{Board, Cell};
pub use config::Config;
pub use driver::Driver;
pub use error::{Error, Result};
pub use grid::Grid;
pub use replay::Game as ReplayGame;
pub use snake::Game;

/// Minimum apple spawn distance from the head unless configured otherwise.
pub const DEFAULT_ALPHA: u16 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_move_one_cell() {
        let c = Coord::new(3, 3);

        assert_eq!(c + Direction::Up, Some(Coord::new(2, 3)));
        assert_eq!(c + Direction::Right, Some(Coord::new(3, 4)));
        assert_eq!(c + Direction::Down, Some(Coord::new(4, 3)));
        assert_eq!(c + Direction::Left, Some(Coord::new(3, 2)));
    }

    #[test]
    fn top_left_edges_underflow_to_none() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin + Direction::Up, None);
        assert_eq!(origin + Direction::Left, None);
        assert!((origin + Direction::Down).is_some());
    }

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL.iter() {
            assert_ne!(*d, d.opposite());
            assert_eq!(*d, d.opposite().opposite());
        }
    }

    #[test]
    fn minus_one_is_not_a_direction() {
        assert_eq!(Direction::try_from(-1), Err(-1));
        assert_eq!(Direction::try_from(2), Ok(Direction::Down));
        for d in Direction::ALL.iter() {
            assert_eq!(Direction::try_from(*d as i8), Ok(*d));
        }
    }

    #[test]
    fn distance() {
        assert_eq!(Coord::new(0, 0).distance_sq(Coord::new(3, 4)), 25);
        assert_eq!(Coord::new(3, 4).distance_sq(Coord::new(0, 0)), 25);
        assert_eq!(Coord::new(7, 7).distance_sq(Coord::new(7, 7)), 0);
    }

    #[test]
    fn neighbours() {
        let c = Coord::new(1, 1);

        assert_eq!(c.direction_to(Coord::new(0, 1)), Some(Direction::Up));
        assert_eq!(c.direction_to(Coord::new(1, 0)), Some(Direction::Left));
        assert_eq!(c.direction_to(Coord::new(2, 2)), None);
        assert_eq!(c.direction_to(c), None);
    }
}
