use grid_snake::{Config, Direction, Driver, Game, SnakeGame, Status};

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use simplelog::{LevelFilter, WriteLogger};

const CONFIG_FILE: &str = "grid_snake.yaml";
const LOG_FILE: &str = "grid_snake.log";

fn read_keys(tx: Sender<Direction>) {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();

    let mut buf = [0; 256];

    loop {
        let num = match handle.read(&mut buf) {
            Ok(0) => return,
            Ok(num) => num,
            Err(e) => {
                warn!("stdin: {}", e);
                return;
            }
        };

        for b in buf[0..num].iter() {
            let dir = match <char as From<u8>>::from(*b).to_ascii_lowercase() {
                'w' => Direction::Up,
                'a' => Direction::Left,
                's' => Direction::Down,
                'd' => Direction::Right,
                _ => continue,
            };

            if tx.send(dir).is_err() {
                return;
            }
        }
    }
}

fn play(cfg: &Config, rx: &Receiver<Direction>) -> grid_snake::Result<Status> {
    let mut game = Game::from_config(cfg)?;

    // Start off heading for the far side so the first tick can't hit a wall.
    let heading = if game.head().col < cfg.width / 2 { Direction::Right } else { Direction::Left };
    let mut driver = Driver::new(Duration::from_millis(cfg.tick_ms), heading);

    println!("{}", game);

    loop {
        while let Ok(dir) = rx.try_recv() {
            driver.press(dir);
        }

        let now = Instant::now();
        let dir = match driver.poll(now) {
            Some(dir) => dir,
            None => {
                thread::sleep(driver.until_next(now));
                continue;
            }
        };

        let status = game.step(dir);
        println!("{}\nScore: {:3}\nPosition: {}", game, game.score(), game.head());

        if status.is_over() {
            return Ok(status);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), File::create(LOG_FILE)?)?;

    let cfg = Config::load_or_default(CONFIG_FILE);
    info!("starting with {:?}", cfg);

    let (tx, rx) = channel();
    thread::spawn(move || read_keys(tx));

    loop {
        let status = play(&cfg, &rx)?;
        info!("game over: {:?}", status);
        println!("{:?}", status);

        thread::sleep(Duration::from_secs(1));
    }
}
