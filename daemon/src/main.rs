//! NewsGuard command line: the presentation layer over the service.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use newsguard_service::{NewsGuard, ServiceConfig};
use newsguard_types::{Timestamp, VerificationId};
use newsguard_utils::LogFormat;

#[derive(Parser)]
#[command(name = "newsguard", about = "Check news text for signs of misinformation")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "NEWSGUARD_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory for account and verification storage.
    #[arg(long, env = "NEWSGUARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "NEWSGUARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "NEWSGUARD_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create an account and log in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, env = "NEWSGUARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in to an existing account.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEWSGUARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out of the current session.
    Logout,
    /// Show the logged-in account.
    Whoami,
    /// Analyze news text.
    Verify {
        /// The news content to check.
        text: String,
        /// Where the content was found.
        #[arg(long)]
        url: Option<String>,
    },
    /// Show one verification.
    Show { id: String },
    /// List your verifications, most recent first.
    History,
}

fn load_config(cli: &Cli) -> anyhow::Result<ServiceConfig> {
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    newsguard_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    let mut guard = NewsGuard::open(&config)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let now = Timestamp::now();

    match cli.command {
        Command::Register {
            email,
            name,
            password,
        } => {
            let account = guard.register(&email, &password, &name)?;
            println!("Registered and logged in as {}", render::account(&account));
        }
        Command::Login { email, password } => {
            let account = guard.login(&email, &password)?;
            println!("Logged in as {}", render::account(&account));
        }
        Command::Logout => {
            guard.logout()?;
            println!("Logged out");
        }
        Command::Whoami => match guard.current_account() {
            Some(account) => println!("{}", render::account(account)),
            None => println!("Not logged in"),
        },
        Command::Verify { text, url } => {
            let record = guard.submit(&text, url.as_deref())?;
            print!("{}", render::record(&record, now));
        }
        Command::Show { id } => match guard.get_verification(&VerificationId::new(id.clone()))? {
            Some(record) => print!("{}", render::record(&record, now)),
            None => bail!("no verification with id {id}"),
        },
        Command::History => {
            let records = guard.history()?;
            if records.is_empty() {
                println!("No verifications yet");
            }
            for record in &records {
                println!("{}", render::summary_line(record, now));
            }
        }
    }
    Ok(())
}
