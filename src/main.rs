//! libcat - terminal client for a library catalog

use clap::{CommandFactory, Parser};
use log::debug;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod router;
mod session;
mod views;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;
use output::notify::{Notifier, TerminalNotifier, Toast};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        debug!("{:?}", err);
        TerminalNotifier.notify(Toast::error(err.to_string()));
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status { verify } => cli::status::run(&opts, verify).await,
        Commands::Version => {
            println!("libcat version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Login {
            editor,
            username,
            password,
        } => cli::login::run(&opts, editor, username, password).await,
        Commands::Register {
            username,
            password,
            confirm,
        } => cli::register::run(&opts, username, password, confirm).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Books(filters) => cli::books::run(&opts, &filters).await,
        Commands::Editor(args) => cli::editor::run(&opts, &args).await,
        Commands::Open { route } => cli::open::run(&opts, &route).await,
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "libcat", &mut std::io::stdout());
            Ok(())
        }
    }
}
