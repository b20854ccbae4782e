// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error parsing a card from its two-symbol text notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not made of exactly two symbols.
    #[error("expected a 2 symbol card token, found {0:?}")]
    TokenLength(String),
    /// The rank symbol is not one of `2 3 4 5 6 7 8 9 T J Q K A`.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// The suit symbol is not one of `S H D C`.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
}

/// A Poker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = s.chars();
        match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
            }
            _ => Err(ParseCardError::TokenLength(s.to_string())),
        }
    }
}

/// Card rank.
///
/// Discriminants are the rank values used by the hand evaluator, deuce is 2
/// and ace is 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns this rank value, 2 for deuce up to 14 for ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the cardinal word for this rank, used in hand names.
    pub fn cardinal(&self) -> &'static str {
        match self {
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        let rank = match symbol {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::UnknownRank(symbol)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits are unordered, only equality between them matters for hand
/// evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        let suit = match symbol {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::UnknownSuit(symbol)),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each five-card hand in the deck.
    pub fn for_each_five<F>(&self, mut f: F)
    where
        F: FnMut(&[Card; 5]),
    {
        let n = self.cards.len();
        if n < 5 {
            return;
        }

        let mut h = [self.cards[0]; 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }

    /// Calls the `f` closure for `hands` randomly sampled five-card hands.
    pub fn sample<R, F>(&self, rng: &mut R, hands: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card; 5]),
    {
        if self.cards.len() < 5 {
            return;
        }

        for _ in 0..hands {
            let mut h = [self.cards[0]; 5];
            for (slot, card) in h.iter_mut().zip(self.cards.choose_multiple(rng, 5)) {
                *slot = *card;
            }
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_parse_round_trip() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        while !deck.is_empty() {
            let card = deck.deal();
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::UnknownRank('1'))
        );
        assert_eq!(
            "TX".parse::<Card>(),
            Err(ParseCardError::UnknownSuit('X'))
        );
        // Symbols are uppercase only.
        assert_eq!(
            "kd".parse::<Card>(),
            Err(ParseCardError::UnknownRank('k'))
        );
        assert_eq!(
            "KDX".parse::<Card>(),
            Err(ParseCardError::TokenLength("KDX".to_string()))
        );
        assert_eq!(
            "K".parse::<Card>(),
            Err(ParseCardError::TokenLength("K".to_string()))
        );
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::TokenLength(String::new()))
        );
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn deck_uniqueness() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each_five() {
        let deck = Deck::default();

        let mut count = 0u32;
        deck.for_each_five(|cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_five_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0u32;
        deck.for_each_five(|_| count += 1);
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        let mut count = 0;
        deck.sample(&mut rng, 10, |cards| {
            let ids = cards.iter().collect::<HashSet<_>>();
            assert_eq!(ids.len(), 5);
            count += 1;
        });
        assert_eq!(count, 10);
    }
}
