use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
};

/// The draw pile. Index 0 is the top of the pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        Self(cards)
    }

    /// A deck holding exactly `cards`, top first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Removes the top `count` cards.
    ///
    /// # Panics
    ///
    /// If fewer than `count` cards remain. The game refills the pile before
    /// every turn, so this only fires on a broken reshuffle.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        assert!(
            count <= self.0.len(),
            "Tried to draw {count} cards from a draw pile of {}.",
            self.0.len()
        );
        self.0.drain(0..count).collect::<Vec<_>>()
    }

    pub fn draw_card(&mut self) -> Card {
        assert!(!self.0.is_empty(), "Tried to draw from an empty draw pile.");
        self.0.remove(0)
    }

    pub(crate) fn put_under(&mut self, card: Card) {
        self.0.push(card);
    }

    pub(crate) fn refill(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
