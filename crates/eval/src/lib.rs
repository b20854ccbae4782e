// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker five-card hand evaluator.
//!
//! Classifies a five-card Texas Hold'em hand into its ranking category,
//! compares two hands resolving every tie-break rule, and renders the
//! canonical hand name.
//!
//! To use the evaluator parse a [Hand] from its text notation and use
//! [Hand::compare] and [Hand::name]:
//!
//! ```
//! # use showdown_eval::*;
//! let royal = "KS AS TS QS JS".parse::<Hand>().unwrap();
//! let quads = "JC 6H JS JD JH".parse::<Hand>().unwrap();
//!
//! assert_eq!(royal.name(), "Royal flush");
//! assert_eq!(quads.name(), "Four of a kind, Jacks");
//! assert_eq!(royal.compare(&quads), Outcome::Win);
//! ```
//!
//! Hands already built from typed cards can be evaluated directly with
//! [HandValue::eval].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod hand;

pub use eval::{HandRank, HandValue};
pub use hand::{Hand, Outcome, ParseHandError};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
