mod fetch;
mod view;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Fetch(args) => fetch::run(args).await,
        Command::View(args) => view::run(args),
    }
}
