//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "crib",
    version,
    about = "Cribbage hand scorer: pairs, fifteens and runs"
)]
pub struct CribCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a hand, e.g. `crib score 5H 5C 5D JS`
    Score {
        /// Cards in short notation (rank A,2-9,T/10,J,Q,K then suit H,C,D,S)
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the best cards to keep from a hand
    Best {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Number of cards to keep (default from config)
        #[arg(long)]
        keep: Option<usize>,
    },
    /// Shuffle, deal one hand and show the best keep
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Cards to deal (default from config)
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        keep: Option<usize>,
    },
    /// Walk deals of an unshuffled deck in index order, scoring every keep
    Enumerate {
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        keep: Option<usize>,
        /// Stop after this many deals
        #[arg(long, default_value_t = 1)]
        limit: u64,
        /// Write one JSON line per deal to this file, replacing its contents
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Score { .. } => "score",
            Commands::Best { .. } => "best",
            Commands::Deal { .. } => "deal",
            Commands::Enumerate { .. } => "enumerate",
            Commands::Cfg => "cfg",
        }
    }
}
