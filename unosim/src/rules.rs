//! Legality and effects of cards, independent of who holds them.

use crate::card::{Card, CardColor, CardValue};
use crate::constants::{DRAW_FOUR_PENALTY, DRAW_TWO_PENALTY};
use crate::error::{Result, UnoError};
use crate::turn::{PlayerTurn, TurnResult};

/// Whether `candidate` may be played on top of `current`.
///
/// Checked against both the declared color and the literal head card, which
/// differ after a Wild play.
pub fn is_legal(candidate: &Card, current: &PlayerTurn) -> bool {
    match candidate.color() {
        None => true,
        Some(color) => {
            color == current.declared_color
                || Some(color) == current.card.color()
                || candidate.value() == current.card.value()
        }
    }
}

/// The record produced by playing `played`. Wild cards need `chosen_color`;
/// everything else declares its own color.
pub fn effect_of(played: Card, chosen_color: Option<CardColor>) -> Result<PlayerTurn> {
    let result = match played.value() {
        CardValue::DrawFour => TurnResult::WildDrawFour,
        CardValue::ChangeColor => TurnResult::WildCard,
        CardValue::Reverse => TurnResult::Reversed,
        CardValue::Skip => TurnResult::Skip,
        CardValue::DrawTwo => TurnResult::DrawTwo,
        CardValue::Number(_) => TurnResult::PlayedCard,
    };

    let declared_color = match played.color() {
        Some(color) => color,
        None => chosen_color.ok_or(UnoError::MissingColor)?,
    };

    Ok(PlayerTurn {
        card: played,
        declared_color,
        result,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attack {
    pub draw_count: usize,
    pub turn: PlayerTurn,
}

/// What an incoming attack does to the player it lands on.
///
/// A Wild Draw Four keeps `previous_color` in effect; Skip and Draw Two keep
/// their own color.
pub fn resolve_attack(current_card: Card, previous_color: CardColor) -> Attack {
    let draw_count = match current_card.value() {
        CardValue::DrawTwo => DRAW_TWO_PENALTY,
        CardValue::DrawFour => DRAW_FOUR_PENALTY,
        _ => 0,
    };
    let declared_color = current_card.color().unwrap_or(previous_color);

    Attack {
        draw_count,
        turn: PlayerTurn {
            card: current_card,
            declared_color,
            result: TurnResult::Attacked,
        },
    }
}
