use thiserror::Error;

/// Errors surfaced by the scoring side of the crate. Extraction never
/// fails: noisy résumé text resolves to safe defaults instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid job criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Empty candidate pool, nothing to rank")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, Error>;
