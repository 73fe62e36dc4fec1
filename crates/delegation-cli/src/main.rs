//! Delegation Dashboard CLI
//!
//! Thin wrapper around delegation-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch and print the five overview values
//! delegation overview
//!
//! # Same, as JSON
//! delegation overview --json
//!
//! # Format a raw amount
//! delegation denominate 1234560000000000000000
//!
//! # Parse a typed amount into its raw integer
//! delegation nominate 1,000.5
//!
//! # Build an owner transaction and print the wallet link
//! delegation action fee 12.5
//! delegation action cap 10000 --active-stake 2500250000000000000000
//! delegation action activation on
//!
//! # Inspect or create the config file
//! delegation config show
//! delegation config init
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use delegation_core::logging::LoggingBuilder;
use delegation_core::{
    denominate, nominate, AdminAction, ContractViews, DashboardConfig, OverviewState,
    ProxyProvider, TransactionRequest,
};

/// Delegation Dashboard - staking contract overview
#[derive(Parser)]
#[command(name = "delegation")]
#[command(version = "0.1.0")]
#[command(about = "Delegation Dashboard - staking contract overview")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/delegation-dashboard/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Delegation contract to use instead of the configured one
    #[arg(long, global = true)]
    contract: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch stake, nodes and contract config and print the overview cards
    Overview {
        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a raw integer amount
    Denominate {
        /// Raw amount, e.g. 1000000000000000000
        raw: String,

        /// Decimal places to show (default from config)
        #[arg(short, long)]
        decimals: Option<u32>,

        /// Keep every decimal up to the last non-zero one
        #[arg(long)]
        full: bool,
    },

    /// Parse a typed amount into its raw integer
    Nominate {
        /// Amount such as 1,000.5
        amount: String,
    },

    /// Build an owner transaction
    Action {
        #[command(subcommand)]
        action: ActionCommand,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ActionCommand {
    /// Change the service fee, in percent
    Fee { percent: String },

    /// Change the total delegation cap; 0 removes the cap
    Cap {
        amount: String,

        /// Current raw active stake; a non-zero cap below it is refused
        #[arg(long)]
        active_stake: Option<u128>,
    },

    /// Turn automatic activation on or off
    Activation { state: Toggle },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved config
    Show,

    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    LoggingBuilder::new("cli").with_filter(filter).init()?;
    Ok(())
}

/// Config file with the `--contract` override applied, not yet validated.
fn read_config(path: &Path, contract: Option<&str>) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::load_or_default(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(contract) = contract {
        config.delegation_contract = contract.to_string();
    }
    Ok(config)
}

fn load_config(path: &Path, contract: Option<&str>) -> Result<DashboardConfig> {
    let config = read_config(path, contract)?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        contract = %config.delegation_contract,
        "Loaded config"
    );
    Ok(config)
}

/// `config show` and `config init` skip validation so a broken file can be
/// inspected and replaced.
fn config_command(action: &ConfigAction, path: &Path, contract: Option<&str>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = read_config(path, contract)?;
            if let Err(e) = config.validate() {
                tracing::warn!(error = %e, "Config does not validate");
            }
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite", path.display());
            }
            DashboardConfig::default().save(path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}

fn print_transaction(config: &DashboardConfig, action: &AdminAction) -> Result<()> {
    let request = TransactionRequest::new(action, config.delegation_address()?, config.gas_limit);
    let url = request.wallet_hook_url(
        &config.network.wallet_address,
        &config.contract_explorer_url(),
    )?;

    println!("Transaction:");
    println!("  Receiver: {}", request.receiver);
    println!("  Value: {}", request.value);
    println!("  Gas limit: {}", request.gas_limit);
    println!("  Data: {}", request.data);
    println!();
    println!("Sign in wallet:");
    println!("  {}", url);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    let config_path = cli.config.clone().unwrap_or_else(DashboardConfig::default_path);
    let contract = cli.contract.as_deref();

    if let Commands::Config { action } = &cli.command {
        return config_command(action, &config_path, contract);
    }

    let config = load_config(&config_path, contract)?;

    match cli.command {
        Commands::Overview { json } => {
            let provider = Arc::new(ProxyProvider::new(&config)?);
            let views = ContractViews::new(provider, &config)?;
            let state = OverviewState::load(&views, &config).await;
            let cards = state.cards(&config);

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                println!("Contract: {}", config.delegation_contract);
                println!("Network: {}", config.network.name);
                println!();
                for card in &cards {
                    let unit = if card.value_unit.is_empty() {
                        String::new()
                    } else if card.value_unit == "%" {
                        "%".to_string()
                    } else {
                        format!(" {}", card.value_unit)
                    };
                    match &card.percentage {
                        Some(pct) => println!("{}: {}{} ({})", card.title, card.value, unit, pct),
                        None => println!("{}: {}{}", card.title, card.value, unit),
                    }
                }
            }
        }

        Commands::Denominate {
            raw,
            decimals,
            full,
        } => {
            let mut options = config.denominate_options();
            if let Some(decimals) = decimals {
                if decimals > options.denomination {
                    bail!(
                        "decimals must be at most {}, got {}",
                        options.denomination,
                        decimals
                    );
                }
                options.decimals = decimals;
            }
            let options = options.show_last_non_zero_decimal(full);
            println!("{}", denominate(&raw, &options)?);
        }

        Commands::Nominate { amount } => {
            println!("{}", nominate(&amount, config.denomination)?);
        }

        Commands::Action { action } => {
            let action = match action {
                ActionCommand::Fee { percent } => AdminAction::change_service_fee(&percent)?,
                ActionCommand::Cap {
                    amount,
                    active_stake,
                } => AdminAction::modify_delegation_cap(&amount, config.denomination, active_stake)?,
                ActionCommand::Activation { state } => {
                    AdminAction::set_automatic_activation(matches!(state, Toggle::On))
                }
            };
            print_transaction(&config, &action)?;
        }

        // handled before the config is validated
        Commands::Config { .. } => {}
    }

    Ok(())
}
