use crate::card::{Card, CardColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnResult {
    GameStart,
    PlayedCard,
    Skip,
    DrawTwo,
    Attacked,
    ForceDraw,
    ForceDrawPlay,
    WildCard,
    WildDrawFour,
    Reversed,
}

impl TurnResult {
    /// Results that take the next player's turn away from them.
    pub fn is_attack(&self) -> bool {
        matches!(
            self,
            TurnResult::Skip | TurnResult::DrawTwo | TurnResult::WildDrawFour
        )
    }

    /// Results whose card goes on top of the discard pile.
    pub fn places_card(&self) -> bool {
        matches!(
            self,
            TurnResult::PlayedCard
                | TurnResult::DrawTwo
                | TurnResult::Skip
                | TurnResult::WildCard
                | TurnResult::WildDrawFour
                | TurnResult::Reversed
                | TurnResult::ForceDrawPlay
        )
    }
}

/// What a turn left behind: the card that now defines the discard head, the
/// color in effect and how the turn went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTurn {
    pub card: Card,
    pub declared_color: CardColor,
    pub result: TurnResult,
}

impl PlayerTurn {
    pub fn game_start(first_card: Card) -> Self {
        let declared_color = first_card
            .color()
            .expect("A round never starts on a Wild card.");
        Self {
            card: first_card,
            declared_color,
            result: TurnResult::GameStart,
        }
    }

    /// The same discard state handed on with a new result.
    pub(crate) fn carried(&self, result: TurnResult) -> Self {
        Self { result, ..*self }
    }
}

/// A decision made by a policy before any rule is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Play the card at this 0-based hand index.
    Play(usize),
    Draw,
}
