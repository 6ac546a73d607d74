use std::path::PathBuf;

use activity_board::{commands, web};
use anyhow::Result;
use clap::{Parser, Subcommand};

/// Activity sign-up board — browse activities and manage sign-ups.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print detailed API responses
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all activities with their participants
    List {
        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Override API base URL from config
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Sign an email up for an activity
    Signup {
        /// Activity name (e.g. "Chess Club")
        activity: String,

        /// Participant email address
        email: String,

        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Override API base URL from config
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Remove a participant from an activity
    Remove {
        /// Activity name
        activity: String,

        /// Participant email address
        email: String,

        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Override API base URL from config
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Start the sign-up board web server
    Serve {
        /// Path to config file
        #[arg(short = 'c', long, default_value = "config.toml")]
        config: PathBuf,

        /// Override API base URL from config
        #[arg(long)]
        api_url: Option<String>,

        /// Listen address (e.g. "0.0.0.0:3000")
        #[arg(short = 'a', long, default_value = "0.0.0.0:3010")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::List { config, api_url } => {
            let base_url = commands::resolve_base_url(api_url, config)?;
            commands::run_list(&base_url, cli.verbose).await?;
        }
        Command::Signup {
            activity,
            email,
            config,
            api_url,
        } => {
            let base_url = commands::resolve_base_url(api_url, config)?;
            commands::run_signup(&base_url, activity, email).await?;
        }
        Command::Remove {
            activity,
            email,
            config,
            api_url,
        } => {
            let base_url = commands::resolve_base_url(api_url, config)?;
            commands::run_remove(&base_url, activity, email).await?;
        }
        Command::Serve {
            config,
            api_url,
            addr,
        } => {
            let base_url = commands::resolve_base_url(api_url, config)?;
            web::serve(&base_url, addr).await?;
        }
    }

    Ok(())
}
