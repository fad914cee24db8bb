//! The snake as a list of cells plus a direction grid.
//!
//! Segments don't carry their own velocity. Instead the head writes the
//! direction it leaves each cell in, and every following segment replays
//! whatever is written under it. Behaves exactly like [`snake::Game`] given
//! the same seed and inputs; kept around because it's the form renderers that
//! want a per-cell direction map can read straight off.
//!
//! [`snake::Game`]: crate::snake::Game

use super::snake::{check_dims, check_layout, random_cell, rng_for};
use super::{apple, Board, Cell, Config, Coord, Direction, Grid, Result, SnakeGame, Status};

use std::fmt::{self, Display};

use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// `None` is the `-1` "no direction" marker.
    directions: Grid<Option<Direction>>,

    body: Vec<Coord>,
    apple: Option<Coord>,

    alpha: u16,
    score: u32,
    rng: StdRng,

    state: Status,
}

impl SnakeGame for Game {
    fn status(&self) -> Status {
        self.state
    }

    fn head(&self) -> Coord {
        self.body[0]
    }

    fn len(&self) -> usize {
        self.body.len()
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn apple(&self) -> Option<Coord> {
        self.apple
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn body(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(self.body.iter().copied())
    }

    fn step(&mut self, dir: Direction) -> Status {
        Game::step(self, dir)
    }
}

impl Game {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::build(width, height, crate::DEFAULT_ALPHA, StdRng::from_entropy())
    }

    pub fn with_seed(width: u16, height: u16, seed: u64) -> Result<Self> {
        Self::build(width, height, crate::DEFAULT_ALPHA, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::build(cfg.width, cfg.height, cfg.alpha, rng_for(cfg.seed))
    }

    /// See [`snake::Game::restore`](crate::snake::Game::restore).
    pub fn restore(cfg: &Config, body: &[Coord], apple: Option<Coord>) -> Result<Self> {
        check_dims(cfg.width, cfg.height)?;
        check_layout(cfg.width, cfg.height, body, apple)?;

        let mut board = Board::new(cfg.width, cfg.height);
        let mut directions = Grid::new_with(cfg.width, cfg.height, None);

        for pos in body {
            board[*pos] = Cell::Snake;
        }
        for w in body.windows(2) {
            directions[w[1]] = w[1].direction_to(w[0]);
        }
        if let Some(pos) = apple {
            board[pos] = Cell::Apple;
        }

        Ok(Self {
            board,
            directions,
            body: body.to_vec(),
            apple,
            alpha: cfg.alpha,
            score: 0,
            rng: rng_for(cfg.seed),
            state: Status::Ongoing,
        })
    }

    fn build(width: u16, height: u16, alpha: u16, mut rng: StdRng) -> Result<Self> {
        check_dims(width, height)?;

        let mut board = Board::new(width, height);
        let directions = Grid::new_with(width, height, None);

        let head = random_cell(&board, &mut rng);
        board[head] = Cell::Snake;

        let apple = apple::spawn(&mut board, head, alpha, &mut rng);

        Ok(Self {
            board,
            directions,
            body: vec![head],
            apple,
            alpha,
            score: 0,
            rng,
            state: Status::Ongoing,
        })
    }

    pub fn directions(&self) -> &Grid<Option<Direction>> {
        &self.directions
    }

    pub fn step(&mut self, dir: Direction) -> Status {
        if self.state.is_over() {
            return self.state;
        }

        let head = self.body[0];
        let next = match head + dir {
            Some(p) if self.board.contains(p) && !self.body.contains(&p) => p,
            _ => {
                log::debug!("collision moving {:?} from {}", dir, head);
                self.state = Status::Collision;
                return self.state;
            }
        };

        self.directions[head] = Some(dir);

        if Some(next) == self.apple {
            self.body.insert(0, next);
            self.board[next] = Cell::Snake;
            self.directions[next] = Some(dir);
            self.score += 1;

            if self.body.len() == self.board.area() {
                self.apple = None;
                self.state = Status::Win;
                return self.state;
            }

            self.apple = apple::spawn(&mut self.board, next, self.alpha, &mut self.rng);
            return self.state;
        }

        let tail = self.body[self.body.len() - 1];
        for seg in self.body.iter_mut() {
            match self.directions[*seg].and_then(|d| *seg + d) {
                Some(to) => {
                    self.board[*seg] = Cell::Empty;
                    self.board[to] = Cell::Snake;
                    *seg = to;
                }
                None => log::error!("segment at {} has nowhere to go", seg),
            }
        }
        self.directions[tail] = None;

        self.state
    }
}

impl Display for Game {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let head = self.body[0];
        self.board.draw(fmt, self.directions[head].map(|dir| (head, dir)))
    }
}
