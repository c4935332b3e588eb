//! Drive-Thru CLI - Talk to the ordering gateway from a terminal
//!
//! Mirrors the calls the voice client makes: session bootstrap,
//! menu lookup, and order add/remove.

mod api;
mod config;
mod summary;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{GatewayClient, OrderLine};
use config::Config;
use summary::{parse_entry, Entry, OrderSummary};

#[derive(Parser)]
#[command(name = "drivethru")]
#[command(about = "Drive-thru CLI - Menu lookup, orders and realtime sessions", long_about = None)]
#[command(version)]
struct Cli {
    /// Gateway URL (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the gateway is up
    Health,

    /// Request an ephemeral realtime session
    Session {
        /// Voice (defaults to configured voice)
        #[arg(short, long)]
        voice: Option<String>,
    },

    /// Look up a menu item
    Menu {
        /// Item name (case-sensitive)
        item: String,
    },

    /// Add an item to the order
    Order {
        /// Item name
        item: String,
        /// Quantity
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove an item from the order
    Remove {
        /// Item name
        item: String,
        /// Quantity
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Build an order from several lines and print it (e.g. burger:2 coke fries coke:-1)
    Summary {
        /// Lines as item or item:quantity; a negative quantity removes
        #[arg(required = true)]
        lines: Vec<String>,
        /// Print the finalized-order message after the summary
        #[arg(long)]
        finalize: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the gateway URL
    SetUrl {
        /// e.g. http://localhost:8888
        url: String,
    },
    /// Set the default voice
    SetVoice {
        /// e.g. alloy, echo, sage
        voice: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = cli.url.clone().unwrap_or_else(|| config.base_url.clone());

    match cli.command {
        Commands::Health => cmd_health(&base_url).await,
        Commands::Session { voice } => {
            let voice = voice.unwrap_or_else(|| config.default_voice.clone());
            cmd_session(&base_url, &voice).await
        }
        Commands::Menu { item } => cmd_menu(&base_url, &item).await,
        Commands::Order { item, quantity } => cmd_order(&base_url, &item, quantity, false).await,
        Commands::Remove { item, quantity } => cmd_order(&base_url, &item, quantity, true).await,
        Commands::Summary { lines, finalize } => cmd_summary(&base_url, &lines, finalize).await,
        Commands::Config { action } => cmd_config(config, action),
    }
}

async fn cmd_health(base_url: &str) -> Result<()> {
    let client = GatewayClient::new(base_url);

    if client.health().await? {
        println!("{} Gateway is up at {}", "✓".green(), base_url.cyan());
        Ok(())
    } else {
        bail!("Gateway at {} is not healthy", base_url);
    }
}

async fn cmd_session(base_url: &str, voice: &str) -> Result<()> {
    let client = GatewayClient::new(base_url);
    let session = client.session(voice).await?;

    println!("{} Session created (voice: {})", "✓".green(), voice.cyan());
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

async fn cmd_menu(base_url: &str, item: &str) -> Result<()> {
    let client = GatewayClient::new(base_url);
    let found = client.menu_item(item).await?;

    println!("{}  ${:.2}", found.name.bold(), found.price);
    Ok(())
}

async fn cmd_order(base_url: &str, item: &str, quantity: i64, remove: bool) -> Result<()> {
    let client = GatewayClient::new(base_url);

    let line = if remove {
        client.remove_order(item, quantity).await?
    } else {
        client.take_order(item, quantity).await?
    };

    let verb = if remove { "Removed" } else { "Added" };
    println!("{} {} {}", "✓".green(), verb, format_line(&line));
    Ok(())
}

async fn cmd_summary(base_url: &str, entries: &[String], finalize: bool) -> Result<()> {
    let client = GatewayClient::new(base_url);
    let mut summary = OrderSummary::default();
    let mut priced = 0;

    for entry in entries {
        let result = match parse_entry(entry)? {
            Entry::Add { item, quantity } => client.take_order(&item, quantity).await.map(|line| {
                let message = format!("Added {} x {} to order.", line.quantity, line.name);
                summary.add(line);
                message
            }),
            Entry::Remove { item, quantity } => client
                .remove_order(&item, quantity)
                .await
                .map(|line| summary.remove(&line.name, line.quantity).to_string()),
        };

        match result {
            Ok(message) => {
                priced += 1;
                println!("{} {}", "✓".green(), message);
            }
            Err(e) => eprintln!("{} {}: {}", "✗".red(), entry, e),
        }
    }

    if priced == 0 {
        bail!("None of the {} order lines could be priced", entries.len());
    }

    println!();
    println!("{}", summary.render().bold());
    if finalize {
        println!("{}", summary.finalize());
    }
    Ok(())
}

fn format_line(line: &OrderLine) -> String {
    format!(
        "{} x {} - ${:.2}",
        line.quantity,
        line.name,
        OrderSummary::line_total(line)
    )
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Gateway URL set to {}", "✓".green(), config.base_url.cyan());
        }
        Some(ConfigAction::SetVoice { voice }) => {
            config.set_default_voice(voice);
            config.save()?;
            println!(
                "{} Default voice set to {}",
                "✓".green(),
                config.default_voice.cyan()
            );
        }
        None => {
            println!("{}", "Configuration".bold());
            println!("  Path:     {:?}", Config::config_path()?);
            println!("  Gateway:  {}", config.base_url);
            println!("  Voice:    {}", config.default_voice);
        }
    }
    Ok(())
}
