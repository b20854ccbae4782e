// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_all5
// ...
// Total hands      2598960
// Elapsed:         0.235s
// Hands/sec:       11059404
//
// High card:       1302540
// One pair:        1098240
// Two pairs:       123552
// Three of a kind: 54912
// Straight:        10200
// Flush:           5108
// Full house:      3744
// Four of a kind:  624
// Straight flush:  36
// Royal flush:     4
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandRank, HandValue};

#[rustfmt::skip]
fn main() {
    // Classify all 2.6M five-card hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    Deck::default().for_each_five(|hand| {
        let rank = HandValue::eval(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High card:       {}", counts[HandRank::HighCard as usize]);
    println!("One pair:        {}", counts[HandRank::OnePair as usize]);
    println!("Two pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full house:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight flush:  {}", counts[HandRank::StraightFlush as usize]);
    println!("Royal flush:     {}", counts[HandRank::RoyalFlush as usize]);
}
