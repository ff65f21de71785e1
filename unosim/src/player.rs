use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, CardColor};
use crate::deck::Deck;
use crate::human;
use crate::input::InputProvider;
use crate::robot;
use crate::rules::{effect_of, is_legal, resolve_attack};
use crate::turn::{PlayerTurn, TurnAction, TurnResult};

/// Who makes the decisions for a seat.
pub enum Policy {
    External(Box<dyn InputProvider>),
    Robot,
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::External(_) => write!(f, "External"),
            Policy::Robot => write!(f, "Robot"),
        }
    }
}

#[derive(Debug)]
pub struct Player {
    position: usize,
    pub hand: Vec<Card>,
    points: u32,
    policy: Policy,
}

impl Player {
    pub fn new(position: usize, policy: Policy) -> Self {
        Self {
            position,
            hand: Vec::new(),
            points: 0,
            policy,
        }
    }

    pub fn robot(position: usize) -> Self {
        Self::new(position, Policy::Robot)
    }

    pub fn external(position: usize, provider: Box<dyn InputProvider>) -> Self {
        Self::new(position, Policy::External(provider))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_robot(&self) -> bool {
        matches!(self.policy, Policy::Robot)
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    /// The hand ordered by color, then value.
    pub fn sorted_hand(&self) -> Vec<Card> {
        let mut hand = self.hand.clone();
        hand.sort();
        hand
    }

    pub fn hand_score(&self) -> u32 {
        self.hand.iter().map(Card::score).sum()
    }

    pub fn has_match(&self, current: &PlayerTurn) -> bool {
        self.hand.iter().any(|card| is_legal(card, current))
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    pub(crate) fn add_cards(&mut self, cards: Vec<Card>) {
        self.hand.extend(cards);
    }

    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Takes this player's turn in response to `previous`.
    ///
    /// An incoming attack is taken instead of a turn. Otherwise the policy
    /// plays a card or draws one, playing the drawn card at once if it fits.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        previous: &PlayerTurn,
        deck: &mut Deck,
        rng: &mut R,
    ) -> PlayerTurn {
        if previous.result.is_attack() {
            return self.process_attack(previous, deck);
        }

        let action = match &mut self.policy {
            Policy::Robot => robot::choose_card(&self.hand, previous)
                .map_or(TurnAction::Draw, TurnAction::Play),
            Policy::External(provider) => {
                self.hand.sort();
                human::choose_card(self.position, &self.hand, previous, provider.as_mut())
            }
        };

        match action {
            TurnAction::Play(index) => {
                let card = self.hand.remove(index);
                self.play_card(card, rng)
            }
            TurnAction::Draw => self.draw_card(previous, deck, rng),
        }
    }

    fn process_attack(&mut self, previous: &PlayerTurn, deck: &mut Deck) -> PlayerTurn {
        let attack = resolve_attack(previous.card, previous.declared_color);
        debug!(
            position = self.position,
            card = %previous.card,
            draw_count = attack.draw_count,
            "Attacked"
        );
        self.add_cards(deck.draw_cards(attack.draw_count));
        attack.turn
    }

    fn draw_card<R: Rng + ?Sized>(
        &mut self,
        previous: &PlayerTurn,
        deck: &mut Deck,
        rng: &mut R,
    ) -> PlayerTurn {
        let card = deck.draw_card();
        if is_legal(&card, previous) {
            PlayerTurn {
                result: TurnResult::ForceDrawPlay,
                ..self.play_card(card, rng)
            }
        } else {
            self.hand.push(card);
            previous.carried(TurnResult::ForceDraw)
        }
    }

    fn play_card<R: Rng + ?Sized>(&mut self, card: Card, rng: &mut R) -> PlayerTurn {
        let chosen_color = card.is_wild().then(|| self.choose_color(rng));
        effect_of(card, chosen_color).expect("Wild cards are always given a color.")
    }

    fn choose_color<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CardColor {
        match &mut self.policy {
            Policy::Robot => robot::dominant_color(&self.hand, rng),
            Policy::External(provider) => human::choose_color(self.position, provider.as_mut()),
        }
    }
}
