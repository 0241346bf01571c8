//! Currency CLI
//!
//! Command-line interface for the currency rate service.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use currency_client::RateServiceClient;
use currency_types::{CurrencyCode, RatesStatus};

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency rate service CLI client", long_about = None)]
struct Cli {
    /// Base URL of the rate service
    #[arg(
        long,
        env = "CURRENCY_SERVICE_URL",
        default_value = "http://localhost:9092"
    )]
    service_url: String,

    /// Deadline for each call, in milliseconds
    #[arg(long, env = "RATE_CALL_TIMEOUT_MS", default_value_t = 2000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the rate between two currencies
    Rate {
        /// Currency being sold (e.g. EUR)
        #[arg(long, value_parser = parse_currency)]
        base: CurrencyCode,
        /// Currency being bought (e.g. USD)
        #[arg(long, value_parser = parse_currency)]
        dest: CurrencyCode,
        /// Also print this amount converted at the returned rate
        #[arg(long)]
        amount: Option<f64>,
    },
    /// List the currency codes the service accepts
    Currencies,
    /// Show the service's method set
    Describe,
    /// Show the loaded rate table
    Rates,
    /// Check service health
    Health,
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    s.parse().map_err(|e| {
        format!(
            "{}. Supported: {}",
            e,
            CurrencyCode::all()
                .iter()
                .map(CurrencyCode::code)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = RateServiceClient::new(&cli.service_url)
        .with_timeout(Duration::from_millis(cli.timeout_ms));

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            match health.status {
                RatesStatus::Ready => println!(
                    "✓ Rate service is ready ({} currencies{})",
                    health.currencies,
                    health
                        .published
                        .map(|d| format!(", published {}", d))
                        .unwrap_or_default()
                ),
                RatesStatus::Degraded => {
                    println!("✗ Rate service is up but has no rates loaded");
                    std::process::exit(1);
                }
            }
        }

        Commands::Rate { base, dest, amount } => {
            let rate = client.get_rate(base, dest).await?;
            println!("1 {} = {} {}", base, rate, dest);
            if let Some(amount) = amount {
                println!("{} {} = {} {}", amount, base, amount * rate, dest);
            }
        }

        Commands::Currencies => {
            let describe = client.describe().await?;
            for code in describe.currencies {
                println!("{}  {}  {}", code, code.symbol(), code.name());
            }
        }

        Commands::Describe => {
            let describe = client.describe().await?;
            println!("{}", serde_json::to_string_pretty(&describe)?);
        }

        Commands::Rates => {
            let listing = client.list_rates().await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }

    Ok(())
}
