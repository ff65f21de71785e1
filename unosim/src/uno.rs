use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::card::Card;
use crate::config::MatchConfig;
use crate::constants::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, RESHUFFLE_THRESHOLD};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::pile::DiscardPile;
use crate::player::{Player, Policy};
use crate::report::{MatchSummary, Reporter, RoundStart, RoundSummary, Standing};
use crate::turn::{PlayerTurn, TurnResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    RoundInProgress,
    RoundOver,
    MatchOver,
}

/// Piles and turn order of the round being played.
#[derive(Debug)]
struct Table {
    draw_pile: Deck,
    discard_pile: DiscardPile,
    current_turn: PlayerTurn,
    current_player_index: usize,
    ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub position: usize,
    pub turn: PlayerTurn,
    pub round_over: Option<RoundSummary>,
    pub match_over: Option<MatchSummary>,
}

#[derive(Debug)]
pub struct Uno {
    config: MatchConfig,
    rng: StdRng,
    players: Vec<Player>,
    table: Option<Table>,
    state: GameState,
    round: u32,
    match_summary: Option<MatchSummary>,
}

impl Uno {
    /// Seats one player per policy, in order, at positions 1, 2, ...
    pub fn new(policies: Vec<Policy>, config: MatchConfig) -> Result<Self> {
        if policies.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if policies.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let players = policies
            .into_iter()
            .enumerate()
            .map(|(index, policy)| Player::new(index + 1, policy))
            .collect();

        Ok(Uno {
            rng: config.rng(),
            config,
            players,
            table: None,
            state: GameState::NotStarted,
            round: 0,
            match_summary: None,
        })
    }

    pub fn robots(count: usize, config: MatchConfig) -> Result<Self> {
        Self::new((0..count).map(|_| Policy::Robot).collect(), config)
    }

    /// Deals a new round from a freshly shuffled deck.
    pub fn start_round(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        self.check_can_start()?;
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal(deck, reporter);
        Ok(())
    }

    /// Deals a new round from `deck` as given, without shuffling.
    ///
    /// # Panics
    ///
    /// If `deck` is too small to deal every hand and turn over a first card.
    pub fn start_round_from(&mut self, deck: Deck, reporter: &mut dyn Reporter) -> Result<()> {
        self.check_can_start()?;
        self.deal(deck, reporter);
        Ok(())
    }

    /// Plays the current player's turn and moves play on.
    pub fn play_turn(&mut self, reporter: &mut dyn Reporter) -> Result<TurnOutcome> {
        match self.state {
            GameState::RoundInProgress => {}
            GameState::MatchOver => return Err(UnoError::MatchOver),
            GameState::NotStarted | GameState::RoundOver => {
                return Err(UnoError::RoundNotInProgress)
            }
        }

        let player_count = self.players.len();
        let table = self
            .table
            .as_mut()
            .expect("A round in progress always has a table.");

        if table.draw_pile.cards_count() < RESHUFFLE_THRESHOLD {
            Self::reshuffle(table, &mut self.rng);
            reporter.reshuffled(table.draw_pile.cards_count());
        }

        let player = &mut self.players[table.current_player_index];
        let turn = player.play_turn(&table.current_turn, &mut table.draw_pile, &mut self.rng);
        let position = player.position();
        let cards_left = player.cards_count();

        debug!(position, card = %turn.card, result = ?turn.result, cards_left, "Turn played");
        reporter.turn_played(position, &turn, cards_left);

        if turn.result.places_card() {
            table.discard_pile.push(turn.card);
        }
        table.current_turn = turn;

        if cards_left == 0 {
            let index = table.current_player_index;
            let (round_over, match_over) = self.finish_round(index, reporter);
            return Ok(TurnOutcome {
                position,
                turn,
                round_over: Some(round_over),
                match_over,
            });
        }

        if turn.result == TurnResult::Reversed {
            // With two players a Reverse hands the turn straight back.
            if player_count == 2 {
                return Ok(TurnOutcome {
                    position,
                    turn,
                    round_over: None,
                    match_over: None,
                });
            }
            table.ascending = !table.ascending;
        }
        Self::advance(table, player_count);

        Ok(TurnOutcome {
            position,
            turn,
            round_over: None,
            match_over: None,
        })
    }

    /// Plays turns until someone empties their hand, dealing first if needed.
    pub fn play_round(&mut self, reporter: &mut dyn Reporter) -> Result<RoundSummary> {
        if matches!(self.state, GameState::NotStarted | GameState::RoundOver) {
            self.start_round(reporter)?;
        }

        loop {
            if let Some(summary) = self.play_turn(reporter)?.round_over {
                return Ok(summary);
            }
        }
    }

    /// Plays rounds until a player reaches the target score.
    pub fn play_match(&mut self, reporter: &mut dyn Reporter) -> Result<MatchSummary> {
        loop {
            self.play_round(reporter)?;
            if let Some(summary) = &self.match_summary {
                return Ok(summary.clone());
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, position: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.position() == position)
    }

    pub fn player_mut(&mut self, position: usize) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.position() == position)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn current_turn(&self) -> Option<&PlayerTurn> {
        self.table.as_ref().map(|table| &table.current_turn)
    }

    pub fn current_player_position(&self) -> Option<usize> {
        self.table
            .as_ref()
            .map(|table| self.players[table.current_player_index].position())
    }

    pub fn discard_head(&self) -> Option<Card> {
        self.table.as_ref().map(|table| table.discard_pile.head())
    }

    pub fn is_ascending(&self) -> bool {
        self.table.as_ref().map_or(true, |table| table.ascending)
    }

    /// The draw pile, top first. Empty before the first deal.
    pub fn draw_pile(&self) -> &[Card] {
        self.table
            .as_ref()
            .map(|table| table.draw_pile.cards())
            .unwrap_or_default()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.table
            .as_ref()
            .map_or(0, |table| table.draw_pile.cards_count())
    }

    pub fn discard_len(&self) -> usize {
        self.table
            .as_ref()
            .map_or(0, |table| table.discard_pile.cards_count())
    }

    pub fn winner(&self) -> Option<usize> {
        self.match_summary.as_ref().map(|summary| summary.winner)
    }

    fn check_can_start(&self) -> Result<()> {
        match self.state {
            GameState::NotStarted | GameState::RoundOver => Ok(()),
            GameState::RoundInProgress => Err(UnoError::RoundInProgress),
            GameState::MatchOver => Err(UnoError::MatchOver),
        }
    }

    fn deal(&mut self, mut deck: Deck, reporter: &mut dyn Reporter) {
        for player in &mut self.players {
            player.clear_hand();
        }

        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                player.add_cards(vec![deck.draw_card()]);
            }
        }

        let discard_pile = DiscardPile::seed(&mut deck);
        let first_card = discard_pile.head();

        self.table = Some(Table {
            draw_pile: deck,
            discard_pile,
            current_turn: PlayerTurn::game_start(first_card),
            current_player_index: 0,
            ascending: true,
        });
        self.round += 1;
        self.state = GameState::RoundInProgress;

        info!(round = self.round, first_card = %first_card, "Dealt a new round");
        reporter.round_started(&RoundStart {
            round: self.round,
            first_card,
            hands: self
                .players
                .iter()
                .map(|p| (p.position(), p.sorted_hand()))
                .collect(),
        });
    }

    /// Folds everything under the discard head back into the draw pile.
    fn reshuffle(table: &mut Table, rng: &mut StdRng) {
        let buried = table.discard_pile.take_buried();
        debug!(
            returned = buried.len(),
            draw_pile = table.draw_pile.cards_count(),
            "Reshuffling the discard pile"
        );
        table.draw_pile.refill(buried);
        table.draw_pile.shuffle(rng);
    }

    fn advance(table: &mut Table, player_count: usize) {
        table.current_player_index = if table.ascending {
            (table.current_player_index + 1) % player_count
        } else if table.current_player_index == 0 {
            player_count - 1
        } else {
            table.current_player_index - 1
        };
    }

    fn finish_round(
        &mut self,
        winner_index: usize,
        reporter: &mut dyn Reporter,
    ) -> (RoundSummary, Option<MatchSummary>) {
        let points_earned = round_points(&self.players, winner_index);
        let winner = &mut self.players[winner_index];
        winner.add_points(points_earned);

        let round_over = RoundSummary {
            round: self.round,
            winner: winner.position(),
            points_earned,
            standings: self.standings(),
        };
        info!(
            round = self.round,
            winner = round_over.winner,
            points_earned,
            "Round over"
        );
        self.state = GameState::RoundOver;
        reporter.round_over(&round_over);

        // Lowest position first if more than one player is over the target.
        let match_winner = self
            .players
            .iter()
            .find(|p| p.points() >= self.config.target_points)
            .map(Player::position);

        let match_over = match_winner.map(|winner| MatchSummary {
            winner,
            rounds: self.round,
            standings: self.standings(),
        });
        if let Some(summary) = &match_over {
            info!(winner = summary.winner, rounds = summary.rounds, "Match over");
            self.state = GameState::MatchOver;
            self.match_summary = Some(summary.clone());
            reporter.match_over(summary);
        }

        (round_over, match_over)
    }

    fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                position: p.position(),
                points: p.points(),
            })
            .collect()
    }
}

/// What the round winner collects: the score of every other hand.
pub(crate) fn round_points(players: &[Player], winner_index: usize) -> u32 {
    players
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != winner_index)
        .map(|(_, p)| p.hand_score())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};
    use crate::constants::TOTAL_CARDS_IN_DECK;
    use crate::report::Silent;

    fn robots(count: usize) -> Uno {
        Uno::robots(count, MatchConfig::seeded(5)).unwrap()
    }

    fn started(count: usize) -> Uno {
        let mut uno = robots(count);
        uno.start_round(&mut Silent).unwrap();
        uno
    }

    fn table(uno: &mut Uno) -> &mut Table {
        uno.table.as_mut().unwrap()
    }

    fn cards_in_play(uno: &Uno) -> usize {
        uno.draw_pile_len()
            + uno.discard_len()
            + uno.players.iter().map(Player::cards_count).sum::<usize>()
    }

    #[test]
    fn return_ok_if_enough_players() {
        assert!(Uno::robots(2, MatchConfig::default()).is_ok());
        assert!(Uno::robots(10, MatchConfig::default()).is_ok());
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Uno::robots(1, MatchConfig::default()).unwrap_err();
        assert_eq!(error, UnoError::NotEnoughPlayers);
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Uno::robots(11, MatchConfig::default()).unwrap_err();
        assert_eq!(error, UnoError::TooManyPlayers);
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let uno = started(4);
        for player in &uno.players {
            assert_eq!(player.cards_count(), 7);
        }
        assert_eq!(uno.draw_pile_len(), 108 - 28 - 1);
        assert_eq!(uno.discard_len(), 1);
    }

    #[test]
    fn first_card_is_never_wild() {
        for seed in 0..50 {
            let mut uno = Uno::robots(3, MatchConfig::seeded(seed)).unwrap();
            uno.start_round(&mut Silent).unwrap();
            assert!(!uno.discard_head().unwrap().is_wild());
            assert_eq!(uno.current_turn().unwrap().result, TurnResult::GameStart);
        }
    }

    #[test]
    fn next_player_turn_works_when_last_player() {
        let mut uno = started(4);
        table(&mut uno).current_player_index = 3;

        Uno::advance(table(&mut uno), 4);

        assert_eq!(uno.current_player_position(), Some(1));
    }

    #[test]
    fn next_player_turn_works_when_descending() {
        let mut uno = started(4);
        table(&mut uno).ascending = false;

        Uno::advance(table(&mut uno), 4);

        assert_eq!(uno.current_player_position(), Some(4));
    }

    fn force_turn(uno: &mut Uno, card: Card) {
        // Hand the current player an unbeatable reason to play `card`.
        let index = table(uno).current_player_index;
        uno.players[index].hand = vec![card, card];
        table(uno).current_turn = PlayerTurn::game_start(Card::number(
            card.color().unwrap_or(CardColor::Red),
            9,
        ));
    }

    #[test]
    fn reverse_flips_direction_with_three_or_more() {
        for count in 3..=5 {
            let mut uno = started(count);
            force_turn(&mut uno, Card::Colored(CardColor::Red, ColoredCard::Reverse));

            let outcome = uno.play_turn(&mut Silent).unwrap();

            assert_eq!(outcome.turn.result, TurnResult::Reversed);
            assert!(!uno.is_ascending());
            assert_eq!(uno.current_player_position(), Some(count));
        }
    }

    #[test]
    fn reverse_with_two_players_keeps_direction_and_player() {
        let mut uno = started(2);
        force_turn(&mut uno, Card::Colored(CardColor::Green, ColoredCard::Reverse));

        let outcome = uno.play_turn(&mut Silent).unwrap();

        assert_eq!(outcome.turn.result, TurnResult::Reversed);
        assert!(uno.is_ascending());
        assert_eq!(uno.current_player_position(), Some(1));
    }

    #[test]
    fn played_cards_go_on_the_discard_pile() {
        let mut uno = started(3);
        let blue_skip = Card::Colored(CardColor::Blue, ColoredCard::Skip);
        force_turn(&mut uno, blue_skip);

        uno.play_turn(&mut Silent).unwrap();

        assert_eq!(uno.discard_head(), Some(blue_skip));
        assert_eq!(uno.discard_len(), 2);
    }

    #[test]
    fn attacked_player_keeps_the_discard_head() {
        let mut uno = started(3);
        let blue_draw = Card::Colored(CardColor::Blue, ColoredCard::DrawTwo);
        force_turn(&mut uno, blue_draw);
        uno.play_turn(&mut Silent).unwrap();
        let before = uno.player(2).unwrap().cards_count();

        let outcome = uno.play_turn(&mut Silent).unwrap();

        assert_eq!(outcome.position, 2);
        assert_eq!(outcome.turn.result, TurnResult::Attacked);
        assert_eq!(uno.player(2).unwrap().cards_count(), before + 2);
        assert_eq!(uno.discard_head(), Some(blue_draw));
        assert_eq!(uno.current_player_position(), Some(3));
    }

    #[test]
    fn low_draw_pile_is_refilled_from_the_discard_pile() {
        let mut uno = started(3);
        {
            let table = table(&mut uno);
            let moved = table.draw_pile.draw_cards(table.draw_pile.cards_count() - 2);
            for card in moved {
                table.discard_pile.push(card);
            }
        }
        let head = uno.discard_head().unwrap();
        // Keep the head playable state consistent with what is on the pile.
        table(&mut uno).current_turn = PlayerTurn {
            card: head,
            declared_color: head.color().unwrap_or(CardColor::Red),
            result: TurnResult::PlayedCard,
        };

        struct Count(usize);
        impl Reporter for Count {
            fn reshuffled(&mut self, _draw_pile_len: usize) {
                self.0 += 1;
            }
        }
        let mut count = Count(0);
        uno.play_turn(&mut count).unwrap();

        assert_eq!(count.0, 1);
        assert!(uno.draw_pile_len() >= RESHUFFLE_THRESHOLD);
        assert!(uno.discard_len() <= 2);
        assert_eq!(cards_in_play(&uno), TOTAL_CARDS_IN_DECK as usize);
    }

    #[test]
    fn round_winner_scores_other_hands() {
        let mut players = vec![Player::robot(1), Player::robot(2), Player::robot(3)];
        players[1].hand = vec![
            Card::number(CardColor::Red, 7),
            Card::Colored(CardColor::Green, ColoredCard::Skip),
        ];
        players[2].hand = vec![Card::WildDrawFour];

        assert_eq!(round_points(&players, 0), 77);
    }

    #[test]
    fn emptying_a_hand_ends_the_round() {
        let mut uno = started(3);
        let red_1 = Card::number(CardColor::Red, 1);
        uno.players[0].hand = vec![red_1];
        uno.players[1].hand = vec![
            Card::number(CardColor::Red, 7),
            Card::Colored(CardColor::Green, ColoredCard::Skip),
        ];
        uno.players[2].hand = vec![Card::WildDrawFour];
        table(&mut uno).current_turn = PlayerTurn::game_start(Card::number(CardColor::Red, 4));

        let outcome = uno.play_turn(&mut Silent).unwrap();

        let summary = outcome.round_over.unwrap();
        assert_eq!(summary.winner, 1);
        assert_eq!(summary.points_earned, 77);
        assert_eq!(uno.players[0].points(), 77);
        assert_eq!(uno.state(), GameState::RoundOver);
        assert!(outcome.match_over.is_none());
        assert_eq!(uno.play_turn(&mut Silent), Err(UnoError::RoundNotInProgress));
    }

    #[test]
    fn reaching_the_target_ends_the_match() {
        let mut uno = started(2);
        uno.players[0].add_points(480);
        uno.players[0].hand = vec![Card::number(CardColor::Red, 1)];
        uno.players[1].hand = vec![Card::Wild];
        table(&mut uno).current_turn = PlayerTurn::game_start(Card::number(CardColor::Red, 4));

        let outcome = uno.play_turn(&mut Silent).unwrap();

        let summary = outcome.match_over.unwrap();
        assert_eq!(summary.winner, 1);
        assert_eq!(uno.players[0].points(), 530);
        assert_eq!(uno.state(), GameState::MatchOver);
        assert_eq!(uno.winner(), Some(1));
        assert_eq!(uno.start_round(&mut Silent), Err(UnoError::MatchOver));
        assert_eq!(uno.play_turn(&mut Silent), Err(UnoError::MatchOver));
    }

    #[test]
    fn cannot_start_a_round_twice() {
        let mut uno = started(2);
        assert_eq!(uno.start_round(&mut Silent), Err(UnoError::RoundInProgress));
    }

    #[test]
    fn cards_are_conserved_through_a_round() {
        for seed in 0..20 {
            let mut uno = Uno::robots(4, MatchConfig::seeded(seed)).unwrap();
            uno.start_round(&mut Silent).unwrap();
            loop {
                let outcome = uno.play_turn(&mut Silent).unwrap();
                assert_eq!(cards_in_play(&uno), TOTAL_CARDS_IN_DECK as usize);
                if outcome.round_over.is_some() {
                    break;
                }
            }
        }
    }
}
