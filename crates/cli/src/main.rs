// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown hand comparison CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use showdown_eval::{Hand, Outcome};

#[derive(Debug, Parser)]
struct Cli {
    /// The player best five cards, e.g. "KS AS TS QS JS".
    player: String,
    /// The opponent best five cards.
    opponent: String,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let player = cli
        .player
        .parse::<Hand>()
        .context("invalid player hand")?;
    let opponent = cli
        .opponent
        .parse::<Hand>()
        .context("invalid opponent hand")?;

    debug!("player {player} opponent {opponent}");

    println!("Player:   {} ({})", player.name(), player);
    println!("Opponent: {} ({})", opponent.name(), opponent);

    match player.compare(&opponent) {
        Outcome::Win => println!("Player wins"),
        Outcome::Loss => println!("Opponent wins"),
        Outcome::Tie => println!("Tie"),
    }

    Ok(())
}
