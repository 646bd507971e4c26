//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Sea region selector - Swap the world map bookmarks of a game config
#[derive(Parser, Debug)]
#[command(name = "sea")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json, data/ and the backup
    /// [default: the directory of the sea executable]
    #[arg(long, global = true, env = "SEA_SELECTOR_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the sea regions found in data/
    List {
        /// Only show regions whose name contains this keyword
        #[arg(short, long)]
        filter: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show or set the folder that holds gamevariable.xml
    ///
    /// Examples:
    ///   sea folder                          # Show the configured folder
    ///   sea folder "C:/Games/Sea/save"      # Remember a new folder
    Folder {
        /// New user folder; must be an existing directory
        path: Option<PathBuf>,
    },

    /// Apply a sea region to gamevariable.xml
    ///
    /// The current gamevariable.xml is copied to gamevariable.xml.bak first.
    ///
    /// Examples:
    ///   sea apply sea1             # Apply data/sea1.xml
    ///   sea apply sea1 --dry-run   # Show the change without writing
    Apply {
        /// Region name (file name in data/ without .xml)
        name: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Choose a sea region interactively, then apply it
    Pick {
        /// Only offer regions whose name contains this keyword
        #[arg(short, long)]
        filter: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Put gamevariable.xml.bak back over gamevariable.xml
    Restore,

    /// Show the current setup
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   sea completions bash > ~/.local/share/bash-completion/completions/sea
    ///   sea completions zsh > ~/.zfunc/_sea
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_requires_command() {
        assert!(Cli::try_parse_from(["sea"]).is_err());
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::try_parse_from(["sea", "-v", "status"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_home_after_command() {
        let cli = Cli::try_parse_from(["sea", "list", "--home", "/opt/sea"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/opt/sea")));
    }

    #[test]
    fn parse_list_command() {
        let cli = Cli::try_parse_from(["sea", "list", "-f", "east", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::List {
                filter: Some("east".into()),
                json: true
            }
        );
    }

    #[test]
    fn parse_folder_without_path() {
        let cli = Cli::try_parse_from(["sea", "folder"]).unwrap();
        assert_eq!(cli.command, Commands::Folder { path: None });
    }

    #[test]
    fn parse_folder_with_path() {
        let cli = Cli::try_parse_from(["sea", "folder", "/games/save"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Folder {
                path: Some(PathBuf::from("/games/save"))
            }
        );
    }

    #[test]
    fn parse_apply_command() {
        let cli = Cli::try_parse_from(["sea", "apply", "sea1"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Apply {
                name: "sea1".into(),
                dry_run: false
            }
        );
    }

    #[test]
    fn parse_apply_dry_run() {
        let cli = Cli::try_parse_from(["sea", "apply", "East Sea", "--dry-run"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Apply {
                name: "East Sea".into(),
                dry_run: true
            }
        );
    }

    #[test]
    fn parse_apply_requires_name() {
        assert!(Cli::try_parse_from(["sea", "apply"]).is_err());
    }

    #[test]
    fn parse_pick_command() {
        let cli = Cli::try_parse_from(["sea", "pick", "--filter", "sea", "--dry-run"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Pick {
                filter: Some("sea".into()),
                dry_run: true
            }
        );
    }

    #[test]
    fn parse_restore_command() {
        let cli = Cli::try_parse_from(["sea", "restore"]).unwrap();
        assert_eq!(cli.command, Commands::Restore);
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::try_parse_from(["sea", "completions", "bash"]).unwrap();
        assert_eq!(cli.command, Commands::Completions { shell: Shell::Bash });
    }
}
