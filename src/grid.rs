//! Dense row-major 2D storage.

use super::Coord;

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: u16, height: u16, val: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![val; width as usize * height as usize],
        }
    }

    /// Resets every cell to `val` without reallocating.
    pub fn fill(&mut self, val: T) {
        for cell in self.cells.iter_mut() {
            *cell = val.clone();
        }
    }
}

impl<T: Default + Clone> Grid<T> {
    pub fn new(width: u16, height: u16) -> Self {
        Self::new_with(width, height, T::default())
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells; always `width * height`.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.cells[self.offset(pos)])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Every cell with its coordinate, top to bottom, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let width = self.width as usize;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new((i / width) as u16, (i % width) as u16), cell))
    }

    fn offset(&self, pos: Coord) -> usize {
        pos.row as usize * self.width as usize + pos.col as usize
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, idx: Coord) -> &T {
        assert!(self.contains(idx), "{} is outside a {}x{} grid", idx, self.width, self.height);

        &self.cells[self.offset(idx)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, idx: Coord) -> &mut T {
        assert!(self.contains(idx), "{} is outside a {}x{} grid", idx, self.width, self.height);

        let offset = self.offset(idx);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let mut grid = Grid::<u8>::new(3, 2);
        grid[Coord::new(1, 2)] = 7;

        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 0][..], &[0, 0, 7][..]]);
    }

    #[test]
    fn iter_yields_coords_in_order() {
        let grid = Grid::new_with(2, 2, ());
        let coords: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();

        assert_eq!(coords, vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
        ]);
    }

    #[test]
    fn bounds() {
        let grid = Grid::new_with(4, 3, 0u8);

        assert_eq!(grid.area(), 12);
        assert!(grid.contains(Coord::new(2, 3)));
        assert!(!grid.contains(Coord::new(3, 0)));
        assert!(!grid.contains(Coord::new(0, 4)));
        assert_eq!(grid.get(Coord::new(3, 3)), None);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let grid = Grid::new_with(2, 2, 0u8);
        let _ = grid[Coord::new(2, 0)];
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut grid = Grid::new_with(2, 2, 1u8);
        grid.fill(9);

        assert!(grid.iter().all(|(_, v)| *v == 9));
    }
}
