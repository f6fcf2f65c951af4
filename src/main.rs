mod api;
mod config;
mod todo;
mod tui;

use anyhow::Result;
use api::client::ApiClient;
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};
use tui::{app::App, ui};

/// How often the event loop wakes up to service the fetch result and the
/// error timer when no key is pressed.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "todoapp")]
#[command(about = "A TUI client for a remote todo list API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key ('user_id' or 'base_url')")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = match Config::load() {
                Ok(config) => config,
                Err(ConfigError::ConfigNotFound) => Config::default(),
                Err(e) => return Err(e),
            };

            match key.as_str() {
                "user_id" => {
                    let user_id = value.parse::<i64>().map_err(|_| {
                        ConfigError::InvalidValue(format!("'{}' is not a valid user id", value))
                    })?;
                    config.user_id = user_id;
                }
                "base_url" => {
                    config.base_url = value;
                }
                _ => {
                    eprintln!(
                        "Error: Unknown configuration key '{}'. Supported keys: user_id, base_url.",
                        key
                    );
                    std::process::exit(1);
                }
            }

            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match key.as_str() {
                "user_id" => println!("{}", config.user_id),
                "base_url" => println!("{}", config.base_url),
                _ => {
                    eprintln!(
                        "Error: Unknown configuration key '{}'. Supported keys: user_id, base_url.",
                        key
                    );
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("user_id = {}", config.user_id);
            println!("base_url = {}", config.base_url);
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    // A missing config behaves like an unset user id: fail closed into
    // the warning screen instead of issuing a request.
    let config = match Config::load() {
        Ok(config) => config,
        Err(ConfigError::ConfigNotFound) => Config::default(),
        Err(e) => return Err(anyhow::anyhow!("Configuration error: {}", e)),
    };

    let mut app = if config.has_valid_user_id() {
        let mut app = App::new();
        app.start_fetch(ApiClient::new(&config.base_url), config.user_id);
        app
    } else {
        App::with_user_warning()
    };

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key)?;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
