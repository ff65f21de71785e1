use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("A Wild card needs a declared color")]
    MissingColor,
    #[error("No round is in progress")]
    RoundNotInProgress,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("The match is over")]
    MatchOver,
}

/// Input from an external provider that could not be used. The provider is
/// asked again; these never leave the player's turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is neither a card number nor 'draw'")]
    NotANumber(String),
    #[error("there is no card number {index} in a hand of {hand_size}")]
    OutOfRange { index: usize, hand_size: usize },
    #[error("card number {0} cannot be played now")]
    IllegalCard(usize),
    #[error("'{0}' is not one of Red, Blue, Green or Yellow")]
    UnknownColor(String),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
