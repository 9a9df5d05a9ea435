use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Beatmap has no playable events")]
    NoEvents,

    #[error("Beatmap is missing a music reference")]
    MissingMusic,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
