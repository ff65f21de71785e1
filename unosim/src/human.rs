//! The externally driven policy: every decision comes from an [`InputProvider`].

use tracing::warn;

use crate::card::{Card, CardColor};
use crate::error::InputError;
use crate::input::{parse_card_choice, parse_color, CardRequest, InputProvider};
use crate::rules::is_legal;
use crate::turn::{PlayerTurn, TurnAction};

/// Asks until the provider names a playable card or decides to draw.
pub fn choose_card(
    position: usize,
    hand: &[Card],
    current: &PlayerTurn,
    provider: &mut dyn InputProvider,
) -> TurnAction {
    let request = CardRequest {
        position,
        current: *current,
        hand,
        legal: hand
            .iter()
            .enumerate()
            .filter(|(_, card)| is_legal(card, current))
            .map(|(index, _)| index + 1)
            .collect(),
    };

    loop {
        let answer = provider.request_card(&request);
        let action = parse_card_choice(&answer, hand.len()).and_then(|action| match action {
            TurnAction::Play(index) if !is_legal(&hand[index], current) => {
                Err(InputError::IllegalCard(index + 1))
            }
            action => Ok(action),
        });

        match action {
            Ok(action) => return action,
            Err(error) => {
                warn!(position, %error, "Rejected card choice");
                provider.rejected(&error);
            }
        }
    }
}

pub fn choose_color(position: usize, provider: &mut dyn InputProvider) -> CardColor {
    loop {
        match parse_color(&provider.request_color()) {
            Ok(color) => return color,
            Err(error) => {
                warn!(position, %error, "Rejected color");
                provider.rejected(&error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColoredCard;
    use crate::input::ScriptedInput;
    use crate::turn::TurnResult;

    fn hand() -> Vec<Card> {
        vec![
            Card::number(CardColor::Red, 2),
            Card::number(CardColor::Blue, 6),
            Card::Colored(CardColor::Green, ColoredCard::Skip),
        ]
    }

    fn current() -> PlayerTurn {
        PlayerTurn::game_start(Card::number(CardColor::Blue, 9))
    }

    #[test]
    fn takes_a_legal_card_number() {
        let mut input = ScriptedInput::new(["2"]);
        let action = choose_card(1, &hand(), &current(), &mut input);
        assert_eq!(action, TurnAction::Play(1));
        assert!(input.rejections().is_empty());
    }

    #[test]
    fn asks_again_until_the_answer_is_usable() {
        let mut input = ScriptedInput::new(["abc", "7", "1", "draw"]);
        let action = choose_card(1, &hand(), &current(), &mut input);

        assert_eq!(action, TurnAction::Draw);
        assert_eq!(
            input.rejections(),
            &[
                InputError::NotANumber("abc".to_string()),
                InputError::OutOfRange {
                    index: 7,
                    hand_size: 3
                },
                InputError::IllegalCard(1),
            ]
        );
    }

    #[test]
    fn legal_numbers_are_offered_one_based() {
        struct Check;
        impl InputProvider for Check {
            fn request_card(&mut self, request: &CardRequest<'_>) -> String {
                assert_eq!(request.legal, vec![2]);
                assert_eq!(request.hand.len(), 3);
                assert_eq!(request.current.result, TurnResult::GameStart);
                "2".to_string()
            }
            fn request_color(&mut self) -> String {
                unreachable!()
            }
        }

        assert_eq!(
            choose_card(1, &hand(), &current(), &mut Check),
            TurnAction::Play(1)
        );
    }

    #[test]
    fn color_is_asked_again_until_known() {
        let mut input = ScriptedInput::new(["purple", "wild", "gReEn"]);
        assert_eq!(choose_color(1, &mut input), CardColor::Green);
        assert_eq!(input.rejections().len(), 2);
    }
}
