use clap::Parser;
use colored::Colorize;
use friendrec_core::cli::{self, Cli};
use friendrec_core::exit::FriendrecExit;
use friendrec_core::logging;

fn main() -> FriendrecExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(FriendrecExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            FriendrecExit::for_error(&e)
        }
    }
}
