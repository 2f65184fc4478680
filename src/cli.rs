use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{ArnCommand, ConfigureCommand, ExploreCommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "akm", version, about = "Interactive explorer for the 7Park Data AKM API", long_about = None, arg_required_else_help = false)]
pub struct Cli {
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Walk through the AKM API with a numbered menu")]
    Explore(ExploreCommand),
    #[command(about = "Configure AKM API client credentials")]
    Configure(ConfigureCommand),
    #[command(about = "Look up the AWS Marketplace ARN for a published resource in a region")]
    Arn(ArnCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let command = self
            .command
            .unwrap_or(Commands::Explore(ExploreCommand::default()));

        match command {
            Commands::Explore(cmd) => cmd.execute().await,
            Commands::Configure(cmd) => cmd.execute().await,
            Commands::Arn(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_API_BASE_URL;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_explore() {
        let cli = Cli::try_parse_from(["akm"]).unwrap();
        assert!(cli.command.is_none());

        match cli
            .command
            .unwrap_or(Commands::Explore(ExploreCommand::default()))
        {
            Commands::Explore(cmd) => {
                assert_eq!(cmd.base_url.as_str(), DEFAULT_API_BASE_URL);
            }
            _ => panic!("Expected Explore command as default"),
        }
    }

    #[test]
    fn test_explore_with_base_url() {
        let cli =
            Cli::try_parse_from(["akm", "explore", "--base-url", "http://localhost:8080/"])
                .unwrap();
        match cli.command {
            Some(Commands::Explore(cmd)) => {
                assert_eq!(cmd.base_url.as_str(), "http://localhost:8080/");
            }
            _ => panic!("Expected Explore command"),
        }
    }

    #[test]
    fn test_arn_command_parses() {
        let cli = Cli::try_parse_from(["akm", "arn", "drug-ner", "us-east-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Arn(_))));
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["akm", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
