use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roster::audit::EventLog;
use roster::cli::{handle_user_command, run_menu, UserCommands};
use roster::config::{paths::RosterPaths, settings::Settings};
use roster::services::RegistryService;
use roster::storage::{StorageFormat, UserStore};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Terminal-based user registry application",
    long_about = "roster-cli keeps a small registry of users (name and email) \
                  in a flat file, with validation, search, and an append-only \
                  event log. Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Storage format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    format: Option<StorageFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    User(UserCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RosterPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let format = cli.format.unwrap_or(settings.default_format);

    // Wire the store, event log, and service
    let store = UserStore::new(
        paths.data_file(&settings.data_file_csv),
        paths.data_file(&settings.data_file_json),
    );
    let events = EventLog::new(paths.event_log());
    let mut service = RegistryService::new(store, Box::new(events), format);

    // A broken data file degrades to an empty registry, not a crash
    if let Err(e) = service.load() {
        eprintln!("Warning: {}", e);
    }

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            run_menu(&mut service, &mut input, &mut out)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&mut service, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Event log:       {}", paths.event_log().display());
            println!(
                "CSV data file:   {}",
                paths.data_file(&settings.data_file_csv).display()
            );
            println!(
                "JSON data file:  {}",
                paths.data_file(&settings.data_file_json).display()
            );
            println!("Default format:  {}", settings.default_format);
            println!("Active format:   {}", format);
        }
    }

    Ok(())
}
