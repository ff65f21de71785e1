use crate::{card::Card, deck::Deck};

/// Played cards. The last element is the head of the pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    /// Turns over the first non-Wild card of `deck` to start a round. Wild
    /// cards turned over on the way go back under the deck in the order they
    /// came up.
    pub fn seed(deck: &mut Deck) -> Self {
        let mut rejected = Vec::new();
        let head = loop {
            let card = deck.draw_card();
            if !card.is_wild() {
                break card;
            }
            rejected.push(card);
        };

        for card in rejected {
            deck.put_under(card);
        }

        Self(vec![head])
    }

    pub fn head(&self) -> Card {
        *self
            .0
            .last()
            .expect("The discard pile is never empty during a round.")
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Takes every card under the head, leaving the head alone on the pile.
    pub fn take_buried(&mut self) -> Vec<Card> {
        let head = self
            .0
            .pop()
            .expect("The discard pile is never empty during a round.");
        std::mem::replace(&mut self.0, vec![head])
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}
