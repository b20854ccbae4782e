// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! to parse them from their two-symbol text notation:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let card = "KD".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating five-card hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! // Iterate through all five-card hands (2.6M hands).
//! let mut counter = 0u32;
//! Deck::default().for_each_five(|hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
