//! Journal Companion - Entry Point
//!
//! Parses the command line, loads configuration, and either answers a
//! one-shot query (`--assess`, `--route`, `--show-scale`) or runs an
//! interactive session on the terminal.

use clap::Parser;
use journal_companion::command::evaluate_command;
use journal_companion::core::config::{config, set_config, CompanionConfig};
use journal_companion::core::error::Result;
use journal_companion::mood::{display_scale, resolve_mood};
use journal_companion::session::{Session, SessionOutcome};
use journal_companion::ui::TerminalConsole;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Journal Companion - a private space for daily reflection
#[derive(Parser, Debug)]
#[command(name = "journal-companion", version)]
#[command(about = "Daily reflections, weekly check-ins and a listening companion")]
struct Args {
    /// Initial mood (1-5 or a keyword such as "happy" or "a bit sad")
    #[arg(long, short = 'm')]
    mood: Option<String>,

    /// Print the mood scale and exit
    #[arg(long, short = 's')]
    show_scale: bool,

    /// Go straight to chat mode after setup
    #[arg(long, short = 'c')]
    chat: bool,

    /// Name used to address you and to pick your journal file
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for journal files (overrides the config file)
    #[arg(long)]
    journal_dir: Option<PathBuf>,

    /// Random seed for reproducible companion replies
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Resolve a mood phrase, print the result and exit
    #[arg(long, value_name = "TEXT")]
    assess: Option<String>,

    /// Resolve a menu choice, print the matching rule and exit
    #[arg(long, value_name = "TEXT")]
    route: Option<String>,

    /// Output format for --assess and --route: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("journal_companion=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(raw) = &args.assess {
        return print_assessment(raw, &args.format);
    }
    if let Some(raw) = &args.route {
        return print_route(raw, &args.format);
    }
    if args.show_scale {
        println!("{}", display_scale());
        return Ok(());
    }

    let mut loaded = match &args.config {
        Some(path) => CompanionConfig::from_file(path)?,
        None => CompanionConfig::default(),
    };
    if let Some(dir) = args.journal_dir {
        loaded.journal_dir = dir;
    }
    if args.no_color {
        loaded.color = false;
    }
    loaded.validate()?;
    tracing::debug!(?loaded, "Configuration loaded");
    if set_config(loaded).is_err() {
        tracing::warn!("Configuration was already set; keeping the existing one");
    }
    let config = config().clone();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "Companion RNG seeded");
    let rng = StdRng::seed_from_u64(seed);

    let console = TerminalConsole::new(config.color);
    let mut session = Session::new(config, console, rng).start_in_chat(args.chat);

    if let Some(raw) = args.mood {
        match resolve_mood(&raw) {
            Some(mood) => session = session.with_initial_mood(mood),
            None => {
                tracing::warn!("Mood given on the command line was not recognized");
                eprintln!(
                    "Warning: could not understand mood '{raw}'. Let's check in interactively."
                );
            }
        }
    }
    if let Some(name) = args.name {
        session = session.with_name(name);
    }

    match session.run()? {
        SessionOutcome::Completed => {}
        SessionOutcome::TooManyInvalidAttempts => {
            tracing::info!("Session stopped after repeated invalid menu choices")
        }
        SessionOutcome::InputClosed => println!(),
    }
    Ok(())
}

fn print_assessment(raw: &str, format: &str) -> Result<()> {
    let assessment = resolve_mood(raw);
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&assessment)?),
        other => {
            if other != "text" {
                eprintln!("Unknown format '{other}', defaulting to text");
            }
            match assessment {
                Some(mood) => println!(
                    "Level {} - {} {}",
                    mood.level, mood.description, mood.emoji
                ),
                None => println!("Not recognized: use 1-5 or a mood keyword"),
            }
        }
    }
    Ok(())
}

fn print_route(raw: &str, format: &str) -> Result<()> {
    let outcome = evaluate_command(raw);
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        other => {
            if other != "text" {
                eprintln!("Unknown format '{other}', defaulting to text");
            }
            println!("{}: {}", outcome.rule_id, outcome.message);
        }
    }
    Ok(())
}
