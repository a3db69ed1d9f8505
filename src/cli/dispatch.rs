//! Routes parsed subcommands to their handlers.

use super::{
    args::{Commands, GroupArgs, RecommendArgs},
    handlers::{handle_build, handle_group, handle_recommend, handle_stats},
};
use crate::config::Config;
use crate::exit::FriendrecExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if config loading or the command handler fails.
pub fn execute(command: Commands) -> Result<FriendrecExit> {
    let config = Config::load()?;

    match command {
        Commands::Build { input, output } => handle_build(&config, &input, output),
        Commands::Recommend {
            graph,
            user,
            strategy,
            top_k,
            json,
        } => handle_recommend(
            &config,
            &RecommendArgs {
                graph,
                user,
                strategy,
                top_k,
                json,
            },
        ),
        Commands::Group {
            graph,
            users,
            method,
            strategy,
            member_top_k,
            top_k,
            json,
        } => handle_group(
            &config,
            &GroupArgs {
                graph,
                users,
                method,
                strategy,
                member_top_k,
                top_k,
                json,
            },
        ),
        Commands::Stats { graph } => handle_stats(&graph),
    }
}
