//! Results the game hands out for narration. Nothing here feeds back into play.

use tracing::info;

use crate::card::Card;
use crate::turn::{PlayerTurn, TurnResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStart {
    pub round: u32,
    pub first_card: Card,
    /// Each player's position and sorted hand.
    pub hands: Vec<(usize, Vec<Card>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub winner: usize,
    pub points_earned: u32,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub winner: usize,
    pub rounds: u32,
    pub standings: Vec<Standing>,
}

pub trait Reporter {
    fn round_started(&mut self, _start: &RoundStart) {}

    fn turn_played(&mut self, _position: usize, _turn: &PlayerTurn, _cards_left: usize) {}

    fn reshuffled(&mut self, _draw_pile_len: usize) {}

    fn round_over(&mut self, _summary: &RoundSummary) {}

    fn match_over(&mut self, _summary: &MatchSummary) {}
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {}

/// Narrates the game as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn round_started(&mut self, start: &RoundStart) {
        info!(round = start.round, first_card = %start.first_card, "Round started");
    }

    fn turn_played(&mut self, position: usize, turn: &PlayerTurn, cards_left: usize) {
        match turn.result {
            TurnResult::Attacked => {
                info!(position, card = %turn.card, "Player was attacked");
            }
            TurnResult::ForceDraw => {
                info!(position, "Player is forced to draw");
            }
            TurnResult::GameStart => {}
            _ => {
                info!(
                    position,
                    card = %turn.card,
                    declared_color = %turn.declared_color,
                    result = ?turn.result,
                    "Player plays a card"
                );
            }
        }

        if cards_left == 1 {
            info!(position, "Uno!");
        }
    }

    fn reshuffled(&mut self, draw_pile_len: usize) {
        info!(draw_pile_len, "Shuffling cards");
    }

    fn round_over(&mut self, summary: &RoundSummary) {
        info!(
            round = summary.round,
            winner = summary.winner,
            points_earned = summary.points_earned,
            "Round over"
        );
    }

    fn match_over(&mut self, summary: &MatchSummary) {
        info!(
            winner = summary.winner,
            rounds = summary.rounds,
            "Match over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::uno::Uno;

    #[test]
    fn tracing_reporter_follows_a_whole_round() {
        let mut uno = Uno::robots(3, MatchConfig::seeded(12)).unwrap();
        let summary = uno.play_round(&mut TracingReporter).unwrap();
        assert_eq!(summary.round, 1);
        assert_eq!(summary.standings.len(), 3);
    }
}
