// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Five-card hand classification.
//!
//! The classifier works on the five cards sorted ascending by rank. Flushes
//! and straights are checked first, everything else falls out of a single
//! adjacent-pair scan over the sorted ranks (see [HandValue::eval]).
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

/// Rank total of the wheel straight A-2-3-4-5.
const WHEEL_TOTAL: u8 = 28;

/// Rank total of the royal straight T-J-Q-K-A.
const ROYAL_TOTAL: u8 = 60;

/// A hand ranking category, ordered from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No two cards share a rank, not a straight, not a flush.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, ace playing low in the wheel A-2-3-4-5.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// The ace-high straight flush T-J-Q-K-A.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High card",
            HandRank::OnePair => "One pair",
            HandRank::TwoPair => "Two pairs",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::StraightFlush => "Straight flush",
            HandRank::RoyalFlush => "Royal flush",
        };

        write!(f, "{name}")
    }
}

/// A five-card hand's value, computed once at hand construction.
///
/// Holds the ranking category and the tie-break keys: the dominant and
/// secondary repeated-rank groups (`None` for categories without repeated
/// ranks) and the rank of the highest card in the arranged order. Ties not
/// resolved by these keys fall back to card-by-card comparison, which needs
/// the arranged cards and lives in [Hand::compare](crate::Hand::compare).
///
/// Its `Display` impl renders the canonical hand name:
///
/// ```
/// # use showdown_eval::{Card, HandValue};
/// let cards: [Card; 5] = ["3D", "2H", "3H", "2C", "2D"]
///     .map(|c| c.parse().unwrap());
/// let value = HandValue::eval(&cards);
/// assert_eq!(value.to_string(), "Full house, Twos over Threes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    primary: Option<Rank>,
    secondary: Option<Rank>,
    high_card: Rank,
    total: u8,
}

impl HandValue {
    /// Evaluates five cards in any order.
    pub fn eval(cards: &[Card; 5]) -> HandValue {
        Self::eval_arranged(&arrange(*cards))
    }

    /// Evaluates five cards already sorted and wheel-arranged by [arrange].
    pub(crate) fn eval_arranged(cards: &[Card; 5]) -> HandValue {
        let total = rank_total(cards);
        let high_card = cards[4].rank();
        let flush = is_flush(cards);
        let straight = is_wheel(cards) || is_straight(cards);

        let mut value = HandValue {
            rank: HandRank::HighCard,
            primary: None,
            secondary: None,
            high_card,
            total,
        };

        if flush && straight {
            value.rank = if total == ROYAL_TOTAL {
                HandRank::RoyalFlush
            } else {
                HandRank::StraightFlush
            };
        } else if flush {
            value.rank = HandRank::Flush;
        } else if straight {
            value.rank = HandRank::Straight;
        } else {
            let (kind, val1, val2) = repeats(cards);
            value.rank = kind_rank(kind);
            (value.primary, value.secondary) = match (val1, val2) {
                (Some(a), Some(b)) => (Some(a.max(b)), Some(a.min(b))),
                (val1, None) => (val1, None),
                (None, val2) => (val2, None),
            };

            // The triple decides a full house, not the numerically larger
            // group: AAKKK is Kings over Aces.
            if value.rank == HandRank::FullHouse {
                if let (Some(p), Some(s)) = (value.primary, value.secondary) {
                    let triples = cards.iter().filter(|c| c.rank() == p).count();
                    if triples != 3 {
                        (value.primary, value.secondary) = (Some(s), Some(p));
                    }
                }
            }
        }

        value
    }

    /// The ranking category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Rank of the dominant repeated group: the quads, the triple, the top
    /// pair. `None` for categories without repeated ranks.
    pub fn primary(&self) -> Option<Rank> {
        self.primary
    }

    /// Rank of the secondary repeated group: the full house pair, the bottom
    /// of two pairs. `None` elsewhere.
    pub fn secondary(&self) -> Option<Rank> {
        self.secondary
    }

    /// Rank of the highest card in the arranged order, Five for the wheel.
    pub fn high_card(&self) -> Rank {
        self.high_card
    }

    /// Sum of the five rank values.
    ///
    /// Only meaningful as an internal shortcut (28 gates the wheel check, 60
    /// picks the royal flush out of the straight flushes); it is not a
    /// strength indicator across categories.
    pub fn total_value(&self) -> u8 {
        self.total
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HandRank::*;

        let name = self.rank;
        let high = self.high_card.cardinal();
        match (self.rank, self.primary, self.secondary) {
            (RoyalFlush, ..) => write!(f, "{name}"),
            (StraightFlush | Flush | Straight, ..) => write!(f, "{name}, {high}-high"),
            (FourOfAKind | ThreeOfAKind | OnePair, Some(p), _) => {
                write!(f, "{name}, {}s", p.cardinal())
            }
            (FullHouse, Some(p), Some(s)) => {
                write!(f, "{name}, {}s over {}s", p.cardinal(), s.cardinal())
            }
            (TwoPair, Some(p), Some(s)) => {
                write!(f, "{name}, {}s and {}s", p.cardinal(), s.cardinal())
            }
            (HighCard, ..) => write!(f, "{name}, {high}"),
            _ => unreachable!("paired category without its pair ranks"),
        }
    }
}

/// Sorts five cards ascending by rank and rotates the wheel.
///
/// The sort is stable so cards of equal rank keep their encounter order; the
/// suit never participates. A wheel comes out of the sort as `[2,3,4,5,A]`
/// and is rotated to `[A,2,3,4,5]` so that the last card is the effective
/// high card for every hand.
pub(crate) fn arrange(mut cards: [Card; 5]) -> [Card; 5] {
    cards.sort_by_key(|c| c.rank());
    if is_wheel(&cards) {
        cards.rotate_right(1);
    }
    cards
}

fn rank_total(cards: &[Card; 5]) -> u8 {
    cards.iter().map(|c| c.rank().value()).sum()
}

fn is_flush(cards: &[Card; 5]) -> bool {
    let suit = cards[0].suit();
    cards.iter().all(|c| c.suit() == suit)
}

/// Five consecutive ranks in sorted order. False for the arranged wheel,
/// which [is_wheel] covers.
fn is_straight(cards: &[Card; 5]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[1].rank().value().wrapping_sub(pair[0].rank().value()) == 1)
}

/// The wheel straight A-2-3-4-5, in sorted or arranged order.
///
/// The rank total of 28 is only a shortcut: other hands reach the same total
/// (a 2-3-4-8-J flush among them), so every rank of the wheel is confirmed
/// before the hand is called one.
fn is_wheel(cards: &[Card; 5]) -> bool {
    const WHEEL: [Rank; 5] = [Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five, Rank::Ace];
    rank_total(cards) == WHEEL_TOTAL
        && WHEEL.iter().all(|r| cards.iter().any(|c| c.rank() == *r))
}

/// Adjacent-pair scan over the sorted ranks.
///
/// Returns the raw kind score along with the first and second repeated ranks
/// found. Equal ranks are adjacent after sorting, so one pass over the four
/// adjacent pairs sees every repeated group: a new group scores 1, each
/// further repeat of a known group scores 2.
fn repeats(cards: &[Card; 5]) -> (u8, Option<Rank>, Option<Rank>) {
    let mut kind = 0;
    let mut val1 = None;
    let mut val2 = None;

    for pair in cards.windows(2) {
        let rank = pair[0].rank();
        if rank != pair[1].rank() {
            continue;
        }

        if val1.is_none() {
            val1 = Some(rank);
            kind += 1;
        } else if val1 == Some(rank) {
            kind += 2;
        } else if val2.is_none() {
            val2 = Some(rank);
            kind += 1;
        } else if val2 == Some(rank) {
            kind += 2;
        }
    }

    (kind, val1, val2)
}

/// Maps a kind score from [repeats] to its category.
///
/// The scan scores a contiguous run of 3 equal ranks as 3 and of 4 as 5, so
/// a full house comes out as 3+1=4 and four of a kind as 5. Both collide
/// with nothing after adding 2, which lands them on the 6 and 7 anchors.
fn kind_rank(kind: u8) -> HandRank {
    let kind = if kind == 4 || kind == 5 { kind + 2 } else { kind };
    match kind {
        0 => HandRank::HighCard,
        1 => HandRank::OnePair,
        2 => HandRank::TwoPair,
        3 => HandRank::ThreeOfAKind,
        6 => HandRank::FullHouse,
        7 => HandRank::FourOfAKind,
        _ => unreachable!("kind score {kind} cannot come out of the repeats scan"),
    }
}
