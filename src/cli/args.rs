use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "friendrec", version, about = "Friend-of-a-friend recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging (overridden by FRIENDREC_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an edge list and save it as a graph snapshot
    Build {
        /// Tab/space separated edge list: `u1 u2 [timestamp]`
        #[arg(value_name = "EDGES")]
        input: PathBuf,
        /// Snapshot path (default from friendrec.toml, else graph.json)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Recommend friends for one user
    Recommend {
        /// Graph snapshot (.json) or raw edge list
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(value_name = "USER")]
        user: u64,
        /// count | weighted
        #[arg(long, short)]
        strategy: Option<String>,
        #[arg(long, short = 'k')]
        top_k: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Recommend friends for a group of users
    Group {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(value_name = "USERS", required = true, num_args = 1..)]
        users: Vec<u64>,
        /// rank-vote (alias: borda) | average
        #[arg(long, short)]
        method: Option<String>,
        /// Scoring strategy for each member's list: count | weighted
        #[arg(long, short)]
        strategy: Option<String>,
        /// Length of each member's list before aggregation
        #[arg(long)]
        member_top_k: Option<usize>,
        /// Length of the final group list
        #[arg(long, short = 'k')]
        top_k: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Print node and edge counts
    Stats {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
    },
}

/// Arguments for the recommend command (used by handlers)
#[derive(Debug, Clone)]
pub struct RecommendArgs {
    pub graph: PathBuf,
    pub user: u64,
    pub strategy: Option<String>,
    pub top_k: Option<usize>,
    pub json: bool,
}

/// Arguments for the group command (used by handlers)
#[derive(Debug, Clone)]
pub struct GroupArgs {
    pub graph: PathBuf,
    pub users: Vec<u64>,
    pub method: Option<String>,
    pub strategy: Option<String>,
    pub member_top_k: Option<usize>,
    pub top_k: Option<usize>,
    pub json: bool,
}
