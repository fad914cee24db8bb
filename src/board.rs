use super::{Coord, Direction, Grid};

use std::fmt::{self, Display};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Empty = 0,
    Snake = 1,
    Apple = 2,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl Display for Cell {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use Cell::*;

        write!(fmt, "{}", match self {
            Empty => "  ",
            Apple => "🍎",
            Snake => "⬛",
        })
    }
}

/// What the renderer gets to see.
pub type Board = Grid<Cell>;

impl Grid<Cell> {
    pub fn count(&self, kind: Cell) -> usize {
        self.iter().filter(|(_, c)| **c == kind).count()
    }

    pub fn positions(&self, kind: Cell) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(move |(_, c)| **c == kind).map(|(pos, _)| pos)
    }

    /// Draws the board in a box, with the head shown as an arrow pointing the
    /// way it last moved.
    pub fn draw(&self, fmt: &mut fmt::Formatter, head: Option<(Coord, Direction)>) -> fmt::Result {
        let border = "━━".repeat(self.width() as usize);

        writeln!(fmt, "┏{}┓", border)?;

        for (r, row) in self.rows().enumerate() {
            write!(fmt, "┃")?;
            for (c, cell) in row.iter().enumerate() {
                match head {
                    Some((pos, dir)) if pos == Coord::new(r as u16, c as u16) => write!(fmt, "{}", head_glyph(dir))?,
                    _ => write!(fmt, "{}", cell)?,
                }
            }
            writeln!(fmt, "┃")?;
        }

        writeln!(fmt, "┗{}┛", border)
    }
}

fn head_glyph(dir: Direction) -> &'static str {
    use Direction::*;

    match dir {
        Up => "🔺",
        Right => "▶️",
        Down => "🔻",
        Left => "◀️",
    }
}

impl Display for Grid<Cell> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.draw(fmt, None)
    }
}
