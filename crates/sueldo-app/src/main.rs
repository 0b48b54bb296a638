use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sueldo_app::config::DEFAULT_CONFIG_PATH;
use sueldo_app::{App, AppConfig};
use sueldo_router::HistoryMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sueldo")]
#[command(version, about = "Sueldo - route table and page shell for the salary calculator", long_about = None)]
struct Cli {
    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Base path override (takes precedence over BASE_URL and the config file)
    #[arg(long)]
    base: Option<String>,

    /// History strategy override
    #[arg(long)]
    history: Option<HistoryArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered routes
    Routes,

    /// Boot the application at a URL and print the rendered page
    Render {
        /// URL as it would appear in the address bar (defaults to the base path)
        url: Option<String>,
    },

    /// Print the URL for a named route
    Href {
        /// Route name
        name: String,

        /// Route parameter as key=value (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HistoryArg {
    /// History API (default)
    Web,
    /// Hash-based
    Hash,
}

impl From<HistoryArg> for HistoryMode {
    fn from(arg: HistoryArg) -> Self {
        match arg {
            HistoryArg::Web => HistoryMode::Web,
            HistoryArg::Hash => HistoryMode::Hash,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Routes => {
            let app = App::at(&config, config.routing.history.encode(&config.routing.base_path, "/"))?;
            let navigator = app.navigator();
            for route in navigator.table().routes() {
                println!(
                    "{:<22} {:<24} {:<28} {}",
                    route.name,
                    route.pattern,
                    route.component.title(),
                    navigator.href(&route.pattern)
                );
            }
        }
        Commands::Render { url } => {
            let url = url.unwrap_or_else(|| {
                config
                    .routing
                    .history
                    .encode(&config.routing.base_path, "/")
            });
            let app = App::at(&config, url)?;
            println!("{}", app.render().into_string());
        }
        Commands::Href { name, params } => {
            let params = parse_params(&params)?;
            let app = App::at(&config, config.routing.history.encode(&config.routing.base_path, "/"))?;
            let href = app
                .navigator()
                .href_for(&name, &params)
                .with_context(|| format!("Cannot build URL for route '{}'", name))?;
            println!("{}", href);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let base_url = std::env::var(sueldo_app::config::BASE_URL_ENV).ok();
    let mut config = AppConfig::load(&cli.config)?
        .with_base_url(base_url.as_deref())
        .with_base_url(cli.base.as_deref());

    if let Some(history) = cli.history {
        config.routing.history = history.into();
    }

    config.routing = config.routing.normalized();
    Ok(config)
}

fn parse_params(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => bail!("Invalid parameter '{}', expected key=value", pair),
        })
        .collect()
}
