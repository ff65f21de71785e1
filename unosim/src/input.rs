//! The boundary to whoever makes decisions for a human seat.

use std::collections::VecDeque;
use std::str::FromStr;

use crate::card::{Card, CardColor};
use crate::error::InputError;
use crate::turn::{PlayerTurn, TurnAction};

/// Everything a provider needs to show before asking for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest<'a> {
    pub position: usize,
    pub current: PlayerTurn,
    /// The hand in the order card numbers refer to.
    pub hand: &'a [Card],
    /// 1-based numbers of the cards that may be played.
    pub legal: Vec<usize>,
}

/// Supplies raw answers for an externally driven seat. Answers are parsed
/// and checked by the game; bad ones are reported through
/// [`InputProvider::rejected`] and asked for again.
pub trait InputProvider {
    /// A 1-based card number or `draw`.
    fn request_card(&mut self, request: &CardRequest<'_>) -> String;

    /// One of `Red`, `Blue`, `Green` or `Yellow`.
    fn request_color(&mut self) -> String;

    fn rejected(&mut self, _error: &InputError) {}
}

/// Parses a card answer against a hand of `hand_size` cards.
pub fn parse_card_choice(input: &str, hand_size: usize) -> Result<TurnAction, InputError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("draw") {
        return Ok(TurnAction::Draw);
    }

    let index = input
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    if index == 0 || index > hand_size {
        return Err(InputError::OutOfRange { index, hand_size });
    }

    Ok(TurnAction::Play(index - 1))
}

pub fn parse_color(input: &str) -> Result<CardColor, InputError> {
    let input = input.trim();
    CardColor::from_str(input).map_err(|_| InputError::UnknownColor(input.to_string()))
}

/// Answers from a fixed script, in order. Useful for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    rejections: Vec<InputError>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
        }
    }

    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every answer the game refused so far.
    pub fn rejections(&self) -> &[InputError] {
        &self.rejections
    }

    fn next_answer(&mut self) -> String {
        self.answers
            .pop_front()
            .expect("The input script ran out of answers.")
    }
}

impl InputProvider for ScriptedInput {
    fn request_card(&mut self, _request: &CardRequest<'_>) -> String {
        self.next_answer()
    }

    fn request_color(&mut self) -> String {
        self.next_answer()
    }

    fn rejected(&mut self, error: &InputError) {
        self.rejections.push(error.clone());
    }
}
