//! CLI command definitions and handlers
//!
//! Each view of the catalog is a command. `libcat open <route>` reaches the
//! same views by path.

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod books;
pub mod context;
pub mod editor;
pub mod init;
pub mod login;
pub mod logout;
pub mod open;
pub mod prompt;
pub mod register;
pub mod status;

pub use args::{BookFilterArgs, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// libcat - terminal client for the library catalog
#[derive(Parser, Debug)]
#[command(name = "libcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "LIBCAT_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "LIBCAT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Session file holding the access token
    #[arg(long, global = true, env = "LIBCAT_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Catalog backend base URL
    #[arg(long, global = true, env = "LIBCAT_API_ROOT", hide_env = true)]
    pub api_root: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LIBCAT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the catalog backend
    Init,

    /// Show configuration and session status
    Status {
        /// Ask the backend whether the stored token is still accepted
        #[arg(long)]
        verify: bool,
    },

    /// Display version information
    Version,

    /// Sign in (/login, or /login/editor with --editor)
    Login {
        /// Sign in to the editor dashboard
        #[arg(long)]
        editor: bool,

        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, short = 'p', env = "LIBCAT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create a reader account (/register)
    Register {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,

        /// Password confirmation (prompted when omitted)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Sign out and forget the access token
    Logout,

    /// Browse and search the catalog (/)
    #[command(
        visible_alias = "search",
        after_help = "EXAMPLES:\n  \
            libcat books                       # Everything\n  \
            libcat books Tolkien               # Title search\n  \
            libcat books --genre fantasy --available\n  \
            libcat books --after 1900 --before 1950 --format json"
    )]
    Books(BookFilterArgs),

    /// Editor dashboard (/editor)
    Editor(EditorArgs),

    /// Navigate to a route by path, e.g. `/editor/add`
    Open {
        /// Route path: /, /editor, /login, /register, /login/editor, /editor/add
        route: String,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   libcat completion bash > /etc/bash_completion.d/libcat
  zsh:    libcat completion zsh > \"${fpath[1]}/_libcat\"
  fish:   libcat completion fish > ~/.config/fish/completions/libcat.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Editor dashboard: lists the catalog unless a subcommand is given
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct EditorArgs {
    #[command(subcommand)]
    pub command: Option<EditorCommands>,

    #[command(flatten)]
    pub filters: BookFilterArgs,
}

/// Editor subcommands
#[derive(Subcommand, Debug)]
pub enum EditorCommands {
    /// Add an edition to the catalog (/editor/add)
    #[command(after_help = "EXAMPLES:\n  \
            libcat editor add --title Dune --author \"Frank Herbert\" --year 1965 \\\n    \
            --genre fantasy --description \"Desert planet\"\n  \
            libcat editor add                  # Prompt for every field")]
    Add(AddBookArgs),
}

/// Fields of the add-edition form. Missing fields are prompted for on a
/// terminal.
#[derive(Args, Debug, Default, Clone)]
pub struct AddBookArgs {
    #[arg(long, short = 't')]
    pub title: Option<String>,

    #[arg(long, short = 'a')]
    pub author: Option<String>,

    #[arg(long, short = 'y')]
    pub year: Option<String>,

    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Publishing house
    #[arg(long)]
    pub publisher: Option<String>,

    /// Record the edition as not on the shelf
    #[arg(long)]
    pub unavailable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_editor_without_subcommand_lists() {
        let cli = Cli::parse_from(["libcat", "editor", "Tolkien"]);
        match cli.command {
            Commands::Editor(args) => {
                assert!(args.command.is_none());
                assert_eq!(args.filters.title.as_deref(), Some("Tolkien"));
            }
            other => panic!("Expected editor command, got {:?}", other),
        }
    }

    #[test]
    fn test_editor_add_parses_fields() {
        let cli = Cli::parse_from([
            "libcat", "editor", "add", "--title", "Dune", "--year", "1965", "--unavailable",
        ]);
        match cli.command {
            Commands::Editor(EditorArgs {
                command: Some(EditorCommands::Add(add)),
                ..
            }) => {
                assert_eq!(add.title.as_deref(), Some("Dune"));
                assert_eq!(add.year.as_deref(), Some("1965"));
                assert!(add.unavailable);
            }
            other => panic!("Expected editor add, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["libcat", "books", "--format", "json", "--api-root", "http://x"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.api_root.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_search_alias() {
        let cli = Cli::parse_from(["libcat", "search", "Hobbit"]);
        assert!(matches!(cli.command, Commands::Books(ref f) if f.title.as_deref() == Some("Hobbit")));
    }
}
