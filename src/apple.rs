//! Picking where the next apple goes.
//!
//! Random guessing is cheap while the board is mostly empty but degrades as
//! the snake fills it, and on a full board it never finishes. So we guess a
//! bounded number of times (about 78% of the cell count, which is where the
//! expected work of guessing stops improving) and then fall back to listing
//! the eligible cells and picking one of those uniformly.

use super::{Board, Cell, Coord};

use rand::Rng;

/// Marks a new apple on `board` and returns where it went.
///
/// The apple lands on an empty cell at least `alpha` away from `head`. If no
/// empty cell is that far away the distance requirement is dropped. Returns
/// `None` only when the board has no empty cell left.
pub fn spawn<R: Rng>(board: &mut Board, head: Coord, alpha: u16, rng: &mut R) -> Option<Coord> {
    let pos = pick(board, head, alpha, rng)?;
    board[pos] = Cell::Apple;

    log::trace!("apple spawned at {}", pos);
    Some(pos)
}

fn pick<R: Rng>(board: &Board, head: Coord, alpha: u16, rng: &mut R) -> Option<Coord> {
    let min_sq = alpha as u32 * alpha as u32;
    let far_enough = |pos: Coord| board[pos].is_empty() && pos.distance_sq(head) >= min_sq;

    let guesses = (0.78f32 * board.area() as f32).ceil() as usize;
    for _ in 0..guesses {
        let pos = Coord::new(rng.gen_range(0, board.height()), rng.gen_range(0, board.width()));
        if far_enough(pos) {
            return Some(pos);
        }
    }

    log::debug!("no apple spot after {} guesses, scanning the board", guesses);

    let candidates: Vec<Coord> = board.positions(Cell::Empty).filter(|p| far_enough(*p)).collect();
    if !candidates.is_empty() {
        return Some(candidates[rng.gen_range(0, candidates.len())]);
    }

    let free: Vec<Coord> = board.positions(Cell::Empty).collect();
    if free.is_empty() {
        return None;
    }

    log::warn!("no empty cell is {} away from {}; placing the apple closer", alpha, head);
    Some(free[rng.gen_range(0, free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn respects_alpha_on_an_open_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let head = Coord::new(5, 5);

        for _ in 0..200 {
            let mut board = Board::new(12, 12);
            board[head] = Cell::Snake;

            let pos = spawn(&mut board, head, 5, &mut rng).unwrap();
            assert!(pos.distance_sq(head) >= 25, "{} too close to {}", pos, head);
            assert_eq!(board[pos], Cell::Apple);
            assert_eq!(board.count(Cell::Apple), 1);
        }
    }

    #[test]
    fn never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::new(4, 4);

        // Everything but the last row is snake.
        for (pos, _) in Board::new(4, 3).iter() {
            board[pos] = Cell::Snake;
        }

        for _ in 0..50 {
            let mut b = board.clone();
            let pos = spawn(&mut b, Coord::new(0, 0), 0, &mut rng).unwrap();
            assert_eq!(pos.row, 3);
        }
    }

    #[test]
    fn relaxes_alpha_when_nothing_is_far_enough() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new(3, 3);
        let head = Coord::new(1, 1);
        board[head] = Cell::Snake;

        // Nothing on a 3x3 board is 5 away from the centre.
        let pos = spawn(&mut board, head, 5, &mut rng).unwrap();
        assert_ne!(pos, head);
        assert_eq!(board.count(Cell::Apple), 1);
    }

    #[test]
    fn finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = Board::new_with(5, 5, Cell::Snake);
        board[Coord::new(4, 4)] = Cell::Empty;

        assert_eq!(spawn(&mut board, Coord::new(0, 0), 5, &mut rng), Some(Coord::new(4, 4)));
    }

    #[test]
    fn full_board_has_no_spot() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new_with(3, 3, Cell::Snake);

        assert_eq!(spawn(&mut board, Coord::new(0, 0), 5, &mut rng), None);
        assert_eq!(board.count(Cell::Apple), 0);
    }
}
