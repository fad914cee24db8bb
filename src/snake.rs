//! The snake as a deque of segments.
//!
//! Each tick pushes the new head on the front and, unless an apple was eaten,
//! pops the tail off the back. Every segment remembers the way it last moved
//! so a renderer can orient it.

use super::{apple, Board, Cell, Config, Coord, Direction, Error, Result, SnakeGame, Status};

use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Display};

use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub pos: Coord,
    /// `None` until the segment has moved at least once.
    pub heading: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,

    snake: VecDeque<Segment>,
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
        Game::head(self)
    }

    fn len(&self) -> usize {
        self.snake.len()
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
        Box::new(self.snake.iter().map(|s| s.pos))
    }

    fn step(&mut self, dir: Direction) -> Status {
        Game::step(self, dir)
    }
}

impl Game {
    /// A `width`×`height` game seeded from the OS.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::build(width, height, crate::DEFAULT_ALPHA, StdRng::from_entropy())
    }

    pub fn with_seed(width: u16, height: u16, seed: u64) -> Result<Self> {
        Self::build(width, height, crate::DEFAULT_ALPHA, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::build(cfg.width, cfg.height, cfg.alpha, rng_for(cfg.seed))
    }

    /// Sets up a game mid-play: `body` is head first and must be a connected,
    /// non-overlapping path on the board.
    pub fn restore(cfg: &Config, body: &[Coord], apple: Option<Coord>) -> Result<Self> {
        check_dims(cfg.width, cfg.height)?;
        check_layout(cfg.width, cfg.height, body, apple)?;

        let mut board = Board::new(cfg.width, cfg.height);
        let mut snake = VecDeque::with_capacity(board.area());

        for (i, pos) in body.iter().enumerate() {
            board[*pos] = Cell::Snake;
            snake.push_back(Segment {
                pos: *pos,
                heading: body.get(i + 1).and_then(|behind| behind.direction_to(*pos)),
            });
        }
        if let Some(pos) = apple {
            board[pos] = Cell::Apple;
        }

        Ok(Self {
            board,
            snake,
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
        let mut snake = VecDeque::with_capacity(board.area());

        let head = random_cell(&board, &mut rng);
        board[head] = Cell::Snake;
        snake.push_back(Segment { pos: head, heading: None });

        let apple = apple::spawn(&mut board, head, alpha, &mut rng);
        log::debug!("new {}x{} game, head at {}, apple at {:?}", width, height, head, apple);

        Ok(Self {
            board,
            snake,
            apple,
            alpha,
            score: 0,
            rng,
            state: Status::Ongoing,
        })
    }

    pub fn head(&self) -> Coord {
        self.snake[0].pos
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.snake.iter()
    }

    pub fn alpha(&self) -> u16 {
        self.alpha
    }

    /// Advances one tick.
    ///
    /// Once the game has ended every call returns the final status and
    /// changes nothing.
    pub fn step(&mut self, dir: Direction) -> Status {
        if self.state.is_over() {
            return self.state;
        }

        let head = self.head();
        let new_pos = match head + dir {
            Some(p) if self.board.contains(p) && self.board[p] != Cell::Snake => p,
            _ => {
                log::debug!("collision moving {:?} from {}", dir, head);
                self.state = Status::Collision;
                return self.state;
            }
        };

        self.snake.push_front(Segment { pos: new_pos, heading: Some(dir) });
        self.board[new_pos] = Cell::Snake;

        if Some(new_pos) == self.apple {
            self.score += 1;
            log::debug!("ate the apple at {}, length {}", new_pos, self.snake.len());

            if self.snake.len() == self.board.area() {
                self.apple = None;
                self.state = Status::Win;
                return self.state;
            }

            self.apple = apple::spawn(&mut self.board, new_pos, self.alpha, &mut self.rng);
        } else if let Some(tail) = self.snake.pop_back() {
            // A one-segment snake pops the old head, which is what we want.
            self.board[tail.pos] = Cell::Empty;
        }

        self.state
    }
}

impl Display for Game {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let head = &self.snake[0];
        self.board.draw(fmt, head.heading.map(|dir| (head.pos, dir)))
    }
}

pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn random_cell(board: &Board, rng: &mut StdRng) -> Coord {
    Coord::new(rng.gen_range(0, board.height()), rng.gen_range(0, board.width()))
}

pub(crate) fn check_dims(width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        Err(Error::EmptyBoard { width, height })
    } else {
        Ok(())
    }
}

pub(crate) fn check_layout(width: u16, height: u16, body: &[Coord], apple: Option<Coord>) -> Result<()> {
    let inside = |p: &Coord| p.row < height && p.col < width;

    if body.is_empty() {
        return Err(Error::Layout("snake has no segments".into()));
    }
    if let Some(p) = body.iter().find(|p| !inside(*p)) {
        return Err(Error::Layout(format!("segment {} is off the board", p)));
    }

    let mut seen = HashSet::with_capacity(body.len());
    if let Some(p) = body.iter().find(|p| !seen.insert(**p)) {
        return Err(Error::Layout(format!("segment {} appears twice", p)));
    }
    if let Some(w) = body.windows(2).find(|w| w[1].direction_to(w[0]).is_none()) {
        return Err(Error::Layout(format!("segments {} and {} aren't adjacent", w[0], w[1])));
    }

    match apple {
        Some(p) if !inside(&p) => Err(Error::Layout(format!("apple {} is off the board", p))),
        Some(p) if seen.contains(&p) => Err(Error::Layout(format!("apple {} is under the snake", p))),
        None if body.len() < width as usize * height as usize => {
            Err(Error::Layout("no apple on a board with free cells".into()))
        }
        _ => Ok(()),
    }
}
