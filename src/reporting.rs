//! Console output for recommendation results.
//!
//! Human output lists the suggestions in rank order followed by their scores.
//! JSON output carries the same data plus the query parameters.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::graph::{Node, SocialGraph};
use crate::recommend::ScoredSuggestion;

/// A finished query, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub users: Vec<Node>,
    pub group: bool,
    /// `count`/`weighted` for individual queries, `rank-vote`/`average` for groups.
    pub scoring: String,
    pub suggestions: Vec<ScoredSuggestion>,
}

/// Prints `report` as colored text or pretty JSON.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &QueryReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    print!("{}", render_text(report));
    Ok(())
}

/// Formats `report` for a terminal.
#[must_use]
pub fn render_text(report: &QueryReport) -> String {
    let mut out = String::new();

    if report.group {
        out.push_str(&format!("\n{}\n", "User group:".bold()));
        out.push_str(&join(report.users.iter()));
        out.push('\n');
    }

    if report.suggestions.is_empty() {
        out.push_str(&format!("\n{}\n", "No friend-of-a-friend suggestions found.".yellow()));
        return out;
    }

    let heading = if report.group {
        "The recommended friendships to the group, in order, are:"
    } else {
        "The recommended friendships, in order, are:"
    };
    out.push_str(&format!("\n{}\n", heading.bold()));
    out.push_str(&join(report.suggestions.iter().map(|s| s.suggestion)).green().to_string());
    out.push('\n');

    out.push_str(&format!(
        "\n{} {}\n",
        "Scores".dimmed(),
        format!("({}):", report.scoring).dimmed()
    ));
    out.push_str(&join(report.suggestions.iter().map(|s| format_score(s.score))));
    out.push('\n');
    out
}

/// Prints node and edge totals.
pub fn print_stats(graph: &SocialGraph) {
    println!("{} {}", "Nodes:".bold(), graph.node_count());
    println!("{} {}", "Edges:".bold(), graph.edge_count());
}

/// Integral scores print without a fraction, weighted ones with four decimals.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.4}")
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
