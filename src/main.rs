//! User-app front-end shell (headless driver).
//!
//! # Architecture Overview
//!
//! ```text
//!     navigation event            ┌──────────────┐     ┌─────────────┐
//!     ───────────────────────────▶│  dispatcher  │────▶│ route table │
//!                                 └──────┬───────┘     └─────────────┘
//!                                        │ view
//!                                        ▼
//!                                 ┌──────────────┐
//!                                 │ mount target │
//!                                 └──────┬───────┘
//!                                        │ view-initiated request
//!                                        ▼
//!     ┌─────────┐    ┌──────────────────────────────────┐    ┌───────────┐
//!     │ network │◀───│ transport ◀ interceptors ◀ client │◀───│   views   │
//!     └─────────┘    │ (cookie jar)  (request id,        │    └───────────┘
//!                    │                credentials)      │
//!                    └──────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use userapp_shell::config::{load_config, ShellConfig};
use userapp_shell::lifecycle::signals::shutdown_on_ctrl_c;
use userapp_shell::navigation::NavigationEvent;
use userapp_shell::observability::logging;
use userapp_shell::view::{MemoryMount, MountTarget};
use userapp_shell::{ShellBuilder, Shutdown};

#[derive(Parser)]
#[command(name = "userapp-shell")]
#[command(about = "Headless driver for the user-app front-end shell", long_about = None)]
struct Cli {
    /// TOML configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table and any unreachable routes
    Routes,
    /// Print the view each path resolves to
    Resolve { paths: Vec<String> },
    /// Navigate through the given paths in order
    Navigate { paths: Vec<String> },
    /// Issue a credentialed GET against the API base URL
    Fetch { path: String },
    /// Read navigation commands from stdin until EOF or Ctrl+C
    Run,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };
    logging::init(&config.observability);
    match &cli.config {
        Some(path) => tracing::info!(path = %path.display(), "Configuration loaded"),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    let mut shell = ShellBuilder::new(config).build(MemoryMount::new())?;

    match cli.command {
        Commands::Routes => {
            println!("precedence: {}", shell.routes.precedence());
            let shadowed = shell.routes.shadowed();
            for route in shell.routes.routes() {
                let note = if shadowed.contains(&route) { "  (unreachable)" } else { "" };
                println!("{:<12} -> {}{}", route.pattern.to_string(), route.view, note);
            }
        }
        Commands::Resolve { paths } => {
            for path in paths {
                match shell.routes.resolve(&path) {
                    Ok(m) => println!("{} -> {} (via '{}')", path, m.route.view, m.route.pattern),
                    Err(e) => println!("{} -> error: {}", path, e),
                }
            }
        }
        Commands::Navigate { paths } => {
            for path in paths {
                shell.dispatcher.navigate(&path)?;
                if let Some(rendered) = shell.dispatcher.mount().rendered() {
                    println!("{}", rendered.markup);
                }
            }
        }
        Commands::Fetch { path } => {
            let response = shell.http.get(&path).await?;
            if !response.status.is_success() {
                eprintln!("Error: server returned status {}", response.status);
                eprintln!("Response: {}", response.text());
                return Ok(());
            }
            match serde_json::from_slice::<serde_json::Value>(&response.body) {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", response.text()),
            }
        }
        Commands::Run => {
            let shutdown = Shutdown::new();
            let (tx, rx) = mpsc::channel(32);

            tokio::spawn(async move {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    let Some(event) = parse_command(&line) else {
                        continue;
                    };
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            });

            let stop = shutdown.subscribe();
            tokio::select! {
                _ = shell.dispatcher.run(rx, stop) => {}
                _ = shutdown_on_ctrl_c(&shutdown) => {}
            }

            if let Some(view) = shell.dispatcher.mount().current() {
                println!("last view: {}", view);
            }
        }
    }

    Ok(())
}

/// `back`, `forward`, `replace <path>`, or a bare path.
fn parse_command(line: &str) -> Option<NavigationEvent> {
    let line = line.trim();
    match line {
        "" => None,
        "back" => Some(NavigationEvent::Back),
        "forward" => Some(NavigationEvent::Forward),
        _ => match line.strip_prefix("replace ") {
            Some(path) => Some(NavigationEvent::Replace(path.trim().to_string())),
            None => Some(NavigationEvent::Push(line.to_string())),
        },
    }
}
