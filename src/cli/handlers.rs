// src/cli/handlers.rs
use crate::cli::args::{GroupArgs, RecommendArgs};
use crate::config::Config;
use crate::exit::FriendrecExit;
use crate::graph::snapshot;
use crate::ingest;
use crate::recommend::{AggregationMethod, GroupQuery, Recommender, Strategy};
use crate::reporting::{self, QueryReport};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handles the build command.
///
/// # Errors
/// Returns error if the edge list cannot be parsed or the snapshot cannot be written.
pub fn handle_build(config: &Config, input: &Path, output: Option<PathBuf>) -> Result<FriendrecExit> {
    let output = output.unwrap_or_else(|| config.snapshot_path.clone());

    println!("Creating graph from {}...", input.display());
    let graph = ingest::load_graph(input)?;
    snapshot::save(&graph, &output)?;

    println!(
        "{} {} nodes, {} edges saved to {}",
        "[OK]".green().bold(),
        graph.node_count(),
        graph.edge_count(),
        output.display()
    );
    println!(
        "Re-run with the snapshot to get recommendations, e.g. `friendrec recommend {} <USER>`",
        output.display()
    );
    Ok(FriendrecExit::Success)
}

/// Handles the recommend command.
///
/// # Errors
/// Returns error if the graph is unavailable or the query is rejected.
pub fn handle_recommend(config: &Config, args: &RecommendArgs) -> Result<FriendrecExit> {
    let strategy = resolve_strategy(args.strategy.as_deref(), config.strategy)?;
    let top_k = args.top_k.unwrap_or(config.top_k);

    let recommender = Recommender::from_config(ingest::load_graph(&args.graph)?, config);
    debug!(user = args.user, %strategy, top_k, "individual query");
    let suggestions = recommender.recommend_individual(args.user, strategy, top_k)?;

    let report = QueryReport {
        users: vec![args.user],
        group: false,
        scoring: strategy.to_string(),
        suggestions,
    };
    reporting::print_report(&report, args.json)?;
    Ok(FriendrecExit::Success)
}

/// Handles the group command.
///
/// # Errors
/// Returns error if the graph is unavailable or the query is rejected.
pub fn handle_group(config: &Config, args: &GroupArgs) -> Result<FriendrecExit> {
    let method = match args.method.as_deref() {
        Some(raw) => raw.parse::<AggregationMethod>()?,
        None => config.method,
    };
    let query = GroupQuery {
        method,
        strategy: resolve_strategy(args.strategy.as_deref(), config.group_strategy)?,
        member_top_k: args.member_top_k.unwrap_or(config.member_top_k),
        top_k: args.top_k.unwrap_or(config.group_top_k),
    };

    let recommender = Recommender::from_config(ingest::load_graph(&args.graph)?, config);
    debug!(users = ?args.users, ?query, "group query");
    let suggestions = recommender.recommend_group_with(&args.users, &query)?;

    let report = QueryReport {
        users: args.users.clone(),
        group: true,
        scoring: method.to_string(),
        suggestions,
    };
    reporting::print_report(&report, args.json)?;
    Ok(FriendrecExit::Success)
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if the graph is unavailable.
pub fn handle_stats(graph: &Path) -> Result<FriendrecExit> {
    let graph = ingest::load_graph(graph)?;
    reporting::print_stats(&graph);
    Ok(FriendrecExit::Success)
}

fn resolve_strategy(flag: Option<&str>, fallback: Strategy) -> Result<Strategy> {
    match flag {
        Some(raw) => Ok(raw.parse::<Strategy>()?),
        None => Ok(fallback),
    }
}
