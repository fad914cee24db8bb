use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Things that can go wrong before a game exists. Once it does, every step
/// just reports a [`Status`](crate::Status).
#[derive(Debug, Error)]
pub enum Error {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u16, height: u16 },

    #[error("invalid snake layout: {0}")]
    Layout(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    ParseConfig(#[from] serde_yaml::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
