//! Crate-level error type

use crate::algo::RankError;
use crate::config::ConfigError;
use crate::input::InputError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkRankError {
    #[error(transparent)]
    Rank(#[from] RankError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;
