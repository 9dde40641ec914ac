//! Route table CLI.
//!
//! ```text
//! todo-routes [--config routes.toml] routes
//! todo-routes resolve '#/todos/7/edit' '/about'
//! todo-routes link create-edit-todo --param id=7
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use todo_routes::config::{read_config, validate_config, ConfigError, RouterConfig};
use todo_routes::observability::logging;
use todo_routes::routing::Params;
use todo_routes::{Navigator, View};

#[derive(Parser)]
#[command(name = "todo-routes")]
#[command(about = "Inspect and exercise the application's route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Defaults to the built-in routes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the installed routes in precedence order
    Routes,
    /// Resolve locations and print the resulting navigation state
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Render the path leading to a view
    Link {
        view: View,
        /// Path parameter as NAME=VALUE
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    // Validation and table construction log, so the subscriber goes first.
    logging::init(&config.observability)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    tracing::debug!(routes = config.routes.len(), "Configuration validated");

    let mut navigator = Navigator::from_config(&config)?;

    match cli.command {
        Commands::Routes => {
            let routes: Vec<_> = navigator
                .table()
                .routes()
                .iter()
                .map(|route| {
                    json!({
                        "path": route.pattern().as_str(),
                        "view": route.target(),
                        "params": route.pattern().param_names().collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Resolve { locations } => {
            for location in &locations {
                let state = navigator.navigate(location);
                println!("{}", serde_json::to_string(state)?);
            }
        }
        Commands::Link { view, params } => {
            let params: Params = params.into_iter().collect();
            println!("{}", navigator.table().link_to(&view, &params)?);
        }
    }

    Ok(())
}
