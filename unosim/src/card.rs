use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_SCORE, WILD_CARD_SCORE};

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumCountMacro,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Yellow,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColoredCard {
    Number(u8),
    Reverse,
    Skip,
    DrawTwo,
}

/// A single card. Wild cards carry no color of their own; the color they
/// put in play is declared by whoever plays them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

/// The face value of a card regardless of its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Reverse,
    Skip,
    DrawTwo,
    DrawFour,
    ChangeColor,
}

impl Card {
    pub fn number(color: CardColor, number: u8) -> Self {
        debug_assert!(number <= 9, "number cards go from 0 to 9");
        Card::Colored(color, ColoredCard::Number(number))
    }

    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.color().is_none()
    }

    pub fn value(&self) -> CardValue {
        match self {
            Card::Colored(_, ColoredCard::Number(number)) => CardValue::Number(*number),
            Card::Colored(_, ColoredCard::Reverse) => CardValue::Reverse,
            Card::Colored(_, ColoredCard::Skip) => CardValue::Skip,
            Card::Colored(_, ColoredCard::DrawTwo) => CardValue::DrawTwo,
            Card::Wild => CardValue::ChangeColor,
            Card::WildDrawFour => CardValue::DrawFour,
        }
    }

    /// Points this card is worth to the round winner when left in an opponent's hand.
    pub fn score(&self) -> u32 {
        match self.value() {
            CardValue::Number(number) => number.into(),
            CardValue::Reverse | CardValue::Skip | CardValue::DrawTwo => ACTION_CARD_SCORE,
            CardValue::DrawFour | CardValue::ChangeColor => WILD_CARD_SCORE,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}
