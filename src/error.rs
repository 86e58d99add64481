//! Errors surfaced by parsing and classification.
//!
//! Broken growth invariants are not listed here: they panic.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BisectError>;

/// Errors at the text parsing boundary.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `name: peer1 peer2 ...`")]
    MissingSeparator { line: usize },

    #[error("line {line}: hub name is empty")]
    EmptyName { line: usize },
}

#[derive(Error, Debug)]
pub enum BisectError {
    #[error("network has no hub named {0:?}")]
    UnknownHub(String),

    #[error("tree pair {from} -> {to} did not converge within {rounds} rounds")]
    NonConvergent {
        from: String,
        to: String,
        rounds: usize,
    },

    #[error(transparent)]
    Input(#[from] InputError),
}
