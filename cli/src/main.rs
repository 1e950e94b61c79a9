//! typedex - look up a Pokemon's type matchups from PokeAPI
//!
//! Run with names to look them up and exit, or without to get a prompt.

mod input;
mod render;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use typedex_client::{Catalog, ClientConfig, PokeApiClient, lookup};

use crate::input::Input;

#[derive(Parser)]
#[command(version, about = "Pokémon type effectiveness checker")]
struct Cli {
    /// Pokémon to look up; omit for an interactive prompt
    names: Vec<String>,

    /// PokeAPI base URL (overrides TYPEDEX_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides TYPEDEX_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Log catalog requests to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "typedex=debug,typedex_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    let client = PokeApiClient::new(&config).context("Failed to build HTTP client")?;
    tracing::debug!(api_url = client.base_url(), "Catalog client ready");

    if cli.names.is_empty() {
        interactive(&client).await
    } else {
        for arg in &cli.names {
            match Input::parse_arg(arg) {
                Input::Lookup(name) => process(&client, &name).await,
                Input::Empty | Input::Quit => println!("{}", render::invalid_name()),
            }
        }
        Ok(())
    }
}

async fn interactive<C: Catalog>(catalog: &C) -> Result<()> {
    println!("{}", render::banner());

    let mut stdin = BufReader::new(tokio::io::stdin());
    loop {
        print!("\nEnter a Pokémon name (or 'exit' to quit): ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = input::read_line(&mut stdin)
            .await
            .context("Failed to read stdin")?
        else {
            println!();
            break;
        };

        match Input::parse(&line) {
            Input::Empty => println!("{}", render::invalid_name()),
            Input::Quit => {
                println!("\n{}", render::goodbye());
                break;
            }
            Input::Lookup(name) => process(catalog, &name).await,
        }
    }

    Ok(())
}

async fn process<C: Catalog>(catalog: &C, name: &str) {
    println!("\nFetching data for '{}'...\n", name);
    let result = lookup(catalog, name).await;
    println!("{}", render::outcome(name, &result));
}
