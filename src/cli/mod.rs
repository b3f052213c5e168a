//! Command-line interface.
//!
//! Without a subcommand the interactive reader starts. The subcommands
//! print the same resources the screens show, for scripts and pipes.

mod commands;
mod common;
mod completions;

pub use commands::{run_remote, write_category, write_categories, write_latest, write_topic};
pub use common::*;

use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// A read-only terminal reader for Discourse forums
#[derive(Parser, Debug)]
#[command(
    name = "forumdeck",
    version,
    about = "A read-only terminal reader for Discourse forums",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Send requests through a deployed gateway instead of the forum itself
    #[arg(long, global = true, value_name = "URL")]
    pub gateway: Option<String>,

    /// Write this file once the first screen has data
    #[arg(long, global = true, value_name = "PATH")]
    pub ready_file: Option<PathBuf>,

    /// Color theme: dark, light or nocolor
    #[arg(long, global = true, value_name = "THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the latest topics
    Latest,
    /// Print the categories in forum order
    Categories,
    /// Print the topics of one category
    Category {
        /// Category slug, e.g. "general"
        slug: String,
        /// Category id
        id: u64,
    },
    /// Print a topic with its posts
    Topic {
        /// Topic id
        id: u64,
    },
    /// Print the raw proxied JSON for a forum path (e.g. "latest.json")
    Fetch {
        path: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for; detected from $SHELL when omitted
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Command-line flags win over the file and the environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = self.gateway.as_ref().filter(|u| !u.trim().is_empty()) {
            config.forum.gateway_url = Some(url.clone());
        }
        if let Some(path) = &self.ready_file {
            config.ready_file = Some(path.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }

    /// Run a non-interactive subcommand.
    pub fn execute(command: Commands, config: &Config) -> Result<()> {
        match command {
            Commands::Completions { shell } => completions::generate(shell),
            other => commands::run(other, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        let cli = Cli::try_parse_from(["forumdeck", "category", "general", "4"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Category {
                slug: "general".to_string(),
                id: 4
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "forumdeck",
            "topic",
            "123",
            "--gateway",
            "https://reader.example.org",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(
            config.forum.gateway_url.as_deref(),
            Some("https://reader.example.org")
        );
    }

    #[test]
    fn test_no_subcommand_launches_reader() {
        let cli = Cli::try_parse_from(["forumdeck", "--theme", "light"]).unwrap();
        assert!(cli.command.is_none());
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_topic_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["forumdeck", "topic", "abc"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
