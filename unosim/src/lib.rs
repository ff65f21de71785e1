//! Rules engine and match driver for an UNO-style card game between robots
//! and externally driven players.

pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod human;
pub mod input;
pub mod pile;
pub mod player;
pub mod report;
pub mod robot;
pub mod rules;
pub mod turn;
pub mod uno;

pub use card::{Card, CardColor, CardValue, ColoredCard};
pub use config::MatchConfig;
pub use error::{InputError, Result, UnoError};
pub use input::{CardRequest, InputProvider, ScriptedInput};
pub use player::{Player, Policy};
pub use report::{
    MatchSummary, Reporter, RoundStart, RoundSummary, Silent, Standing, TracingReporter,
};
pub use turn::{PlayerTurn, TurnResult};
pub use uno::{GameState, TurnOutcome, Uno};
