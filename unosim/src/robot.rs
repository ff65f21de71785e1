//! The deterministic policy: pick a card from the hand by a fixed priority.

use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::card::{Card, CardColor, CardValue};
use crate::rules::is_legal;
use crate::turn::{PlayerTurn, TurnResult};

/// Index of the card the robot plays on `current`, or `None` when it has to draw.
///
/// After a Wild play, an attack or a forced draw the robot first tries to
/// follow the declared color; otherwise it looks at everything legal on the
/// discard head.
pub fn choose_card(hand: &[Card], current: &PlayerTurn) -> Option<usize> {
    let follows_color = matches!(
        current.result,
        TurnResult::WildCard | TurnResult::Attacked | TurnResult::ForceDraw
    );

    if follows_color {
        let on_color = matching(hand, |card| {
            card.is_wild() || card.color() == Some(current.declared_color)
        });
        if !on_color.is_empty() {
            return pick_on_color(hand, &on_color, current.declared_color);
        }
    }

    let legal = matching(hand, |card| is_legal(card, current));
    if legal.is_empty() {
        return None;
    }
    pick_on_card(hand, &legal, current)
}

/// The most common color in `hand`, ties going to the color seen first.
/// A hand of only Wild cards gets a random color.
pub fn dominant_color<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> CardColor {
    let mut counts: Vec<(CardColor, usize)> = Vec::new();
    for color in hand.iter().filter_map(Card::color) {
        match counts.iter_mut().find(|(seen, _)| *seen == color) {
            Some((_, count)) => *count += 1,
            None => counts.push((color, 1)),
        }
    }

    let mut best: Option<(CardColor, usize)> = None;
    for (color, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((color, count));
        }
    }

    match best {
        Some((color, _)) => color,
        None => *CardColor::iter()
            .collect::<Vec<_>>()
            .choose(rng)
            .expect("There are always four colors."),
    }
}

fn matching(hand: &[Card], predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| predicate(card))
        .map(|(index, _)| index)
        .collect()
}

fn first_with_value(hand: &[Card], candidates: &[usize], value: CardValue) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|index| hand[*index].value() == value)
}

/// Draw Four, then Draw Two, Skip and Reverse, in that order.
fn pick_attack(hand: &[Card], candidates: &[usize]) -> Option<usize> {
    [
        CardValue::DrawFour,
        CardValue::DrawTwo,
        CardValue::Skip,
        CardValue::Reverse,
    ]
    .into_iter()
    .find_map(|value| first_with_value(hand, candidates, value))
}

fn pick_on_color(hand: &[Card], candidates: &[usize], color: CardColor) -> Option<usize> {
    pick_attack(hand, candidates)
        .or_else(|| {
            candidates
                .iter()
                .copied()
                .find(|index| hand[*index].color() == Some(color))
        })
        .or_else(|| first_with_value(hand, candidates, CardValue::ChangeColor))
}

fn pick_on_card(hand: &[Card], candidates: &[usize], current: &PlayerTurn) -> Option<usize> {
    if let Some(index) = pick_attack(hand, candidates) {
        return Some(index);
    }

    let on_color = candidates.iter().copied().find(|index| {
        hand[*index].color().map_or(false, |color| {
            color == current.declared_color || Some(color) == current.card.color()
        })
    });
    let on_value = candidates.iter().copied().find(|index| {
        !hand[*index].is_wild() && hand[*index].value() == current.card.value()
    });

    match (on_color, on_value) {
        (Some(color_index), Some(value_index)) => {
            let color = hand[color_index].color();
            let value = hand[value_index].value();
            let same_color = hand.iter().filter(|card| card.color() == color).count();
            let same_value = hand.iter().filter(|card| card.value() == value).count();
            if same_color >= same_value {
                Some(color_index)
            } else {
                Some(value_index)
            }
        }
        (Some(index), None) | (None, Some(index)) => Some(index),
        (None, None) => first_with_value(hand, candidates, CardValue::ChangeColor),
    }
}
