// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Five-card hands, their text notation, and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, ParseCardError};

use crate::eval::{self, HandValue};

/// Error parsing a hand from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHandError {
    /// The text does not split into exactly five card tokens.
    #[error("expected 5 cards, found {0}")]
    CardCount(usize),
    /// One of the tokens is not a valid card.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// Result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand is stronger.
    Win,
    /// The first hand is weaker.
    Loss,
    /// The hands have equal strength.
    Tie,
}

impl Outcome {
    /// The outcome seen from the other hand's side.
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        };

        write!(f, "{outcome}")
    }
}

/// A five-card hand with its value computed at construction.
///
/// Cards are kept sorted ascending by rank, with the wheel rotated so its
/// ace plays low; the hand never changes after construction. Hands parse
/// from the usual space-separated notation:
///
/// ```
/// # use showdown_eval::{Hand, Outcome};
/// let player = "2S AH 4H 5S 6C".parse::<Hand>().unwrap();
/// let villain = "AD 4C 5H 6H 2C".parse::<Hand>().unwrap();
/// assert_eq!(player.compare(&villain), Outcome::Tie);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
    value: HandValue,
}

impl Hand {
    /// Creates a hand from five cards in any order.
    pub fn new(cards: [Card; 5]) -> Hand {
        let cards = eval::arrange(cards);
        let value = HandValue::eval_arranged(&cards);
        Hand { cards, value }
    }

    /// The cards in arranged order, weakest first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand's value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }

    /// The canonical hand name, e.g. `"Full house, Twos over Threes"`.
    pub fn name(&self) -> String {
        self.value.to_string()
    }

    /// Compares this hand with another following Texas Hold'em rules.
    ///
    /// The category decides first, then the repeated-rank groups, then the
    /// cards rank by rank from the high end. The last step is what breaks
    /// ties between hands whose category carries no repeated ranks.
    pub fn compare(&self, other: &Hand) -> Outcome {
        match self.ranking_cmp(other) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }

    fn ranking_cmp(&self, other: &Hand) -> Ordering {
        self.value
            .rank()
            .cmp(&other.value.rank())
            .then_with(|| self.value.primary().cmp(&other.value.primary()))
            .then_with(|| self.value.secondary().cmp(&other.value.secondary()))
            .then_with(|| {
                self.cards
                    .iter()
                    .rev()
                    .zip(other.cards.iter().rev())
                    .map(|(a, b)| a.rank().cmp(&b.rank()))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != 5 {
            return Err(ParseHandError::CardCount(tokens.len()));
        }

        let mut cards = [tokens[0].parse::<Card>()?; 5];
        for (slot, token) in cards.iter_mut().zip(&tokens).skip(1) {
            *slot = token.parse()?;
        }

        Ok(Hand::new(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.cards.iter();
        if let Some(card) = cards.next() {
            write!(f, "{card}")?;
            for card in cards {
                write!(f, " {card}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandRank;
    use showdown_cards::Deck;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn every_hand_ties_itself() {
        for s in [
            "2S 5H 7D 9C KS",
            "JC 6H JS JD JH",
            "5H 4H 3H 2H AH",
            "KS AS TS QS JS",
        ] {
            let h = hand(s);
            assert_eq!(h.compare(&h), Outcome::Tie);
        }
    }

    #[test]
    fn category_order_beats_kickers() {
        // Weakest representative of each category going up; every hand
        // beats all the ones before it regardless of kickers.
        let hands = [
            hand("2S 5H 7D 9C AS"),  // ace high card
            hand("2S 2H 4D 5C 7S"),  // pair of twos
            hand("2S 2H 3D 3C 7S"),  // twos and threes
            hand("2S 2H 2D 4C 5S"),  // three twos
            hand("5H 4S 3H 2S AH"),  // wheel straight
            hand("2H 3H 4H 5H 7H"),  // seven high flush
            hand("2S 2H 2D 3C 3S"),  // twos over threes
            hand("2S 2H 2D 2C 3S"),  // four twos
            hand("5H 4H 3H 2H AH"),  // wheel straight flush
            hand("KS AS TS QS JS"),  // royal flush
        ];

        for (i, low) in hands.iter().enumerate() {
            for high in &hands[i + 1..] {
                assert_eq!(high.compare(low), Outcome::Win, "{high} vs {low}");
                assert_eq!(low.compare(high), Outcome::Loss, "{low} vs {high}");
            }
        }
    }

    #[test]
    fn antisymmetry() {
        let pairs = [
            ("2S 5H 7D 9C KS", "2S 5H 7D 9C AS"),
            ("JC 6H JS JD JH", "TC 6H TS TD TH"),
            ("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C"),
            ("5H 4H 3H 2H AH", "6H 5H 4H 3H 2H"),
        ];

        for (a, b) in pairs {
            let (a, b) = (hand(a), hand(b));
            assert_eq!(a.compare(&b), b.compare(&a).reversed());
        }
    }

    #[test]
    fn high_card_kickers_break_ties() {
        // Suits differ everywhere, ranks tie down to the last kicker.
        let a = hand("2S AH 4H 5S 6C");
        let b = hand("AD 4C 5H 6H 2C");
        assert_eq!(a.compare(&b), Outcome::Tie);

        let b = hand("AD 4C 5H 6H 3C");
        assert_eq!(a.compare(&b), Outcome::Loss);
    }

    #[test]
    fn pair_kickers_break_ties() {
        let a = hand("8S 8H AD TC 4S");
        let b = hand("8D 8C AH TS 3H");
        assert_eq!(a.compare(&b), Outcome::Win);

        let higher_pair = hand("9D 9C 2H 3S 4H");
        assert_eq!(a.compare(&higher_pair), Outcome::Loss);
    }

    #[test]
    fn two_pair_secondary_breaks_ties() {
        let a = hand("KS KH 7D 7C 2S");
        let b = hand("KD KC 6H 6S AH");
        assert_eq!(a.compare(&b), Outcome::Win);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = hand("5H 4S 3H 2S AH");
        let six_high = hand("6D 5C 4H 3S 2H");
        assert_eq!(wheel.compare(&six_high), Outcome::Loss);
        assert_eq!(wheel.value().rank(), HandRank::Straight);
    }

    #[test]
    fn wheel_flush_is_not_royal() {
        let wheel = hand("5H 4H 3H 2H AH");
        assert_eq!(wheel.value().rank(), HandRank::StraightFlush);
        let royal = hand("KS AS TS QS JS");
        assert_eq!(wheel.compare(&royal), Outcome::Loss);
    }

    #[test]
    fn parse_arranges_cards() {
        let h = hand("KS AS TS QS JS");
        assert_eq!(h.to_string(), "TS JS QS KS AS");

        let h = hand("5H 4H 3H 2H AH");
        assert_eq!(h.to_string(), "AH 2H 3H 4H 5H");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "this is a test".parse::<Hand>().unwrap_err(),
            ParseHandError::CardCount(4)
        );
        assert_eq!(
            "KS AS TS QS".parse::<Hand>().unwrap_err(),
            ParseHandError::CardCount(4)
        );
        assert_eq!(
            "KS AS TS QS JS 2D".parse::<Hand>().unwrap_err(),
            ParseHandError::CardCount(6)
        );
        assert_eq!(
            "".parse::<Hand>().unwrap_err(),
            ParseHandError::CardCount(0)
        );
        assert_eq!(
            "KS AS TS QS JX".parse::<Hand>().unwrap_err(),
            ParseHandError::Card(ParseCardError::UnknownSuit('X'))
        );
        assert_eq!(
            "KS AS TS QS 1S".parse::<Hand>().unwrap_err(),
            ParseHandError::Card(ParseCardError::UnknownRank('1'))
        );
        assert_eq!(
            "KS AS TS QS JSS".parse::<Hand>().unwrap_err(),
            ParseHandError::Card(ParseCardError::TokenLength("JSS".to_string()))
        );
    }

    #[test]
    fn sampled_hands_round_trip() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        deck.sample(&mut rng, 100, |cards| {
            let h = Hand::new(*cards);
            // Naming never panics and the notation parses back to a tie.
            assert!(!h.name().is_empty());
            let parsed = h.to_string().parse::<Hand>().unwrap();
            assert_eq!(h.compare(&parsed), Outcome::Tie);
        });
    }
}
