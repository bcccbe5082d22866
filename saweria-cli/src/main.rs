//! Saweria CLI
//!
//! Command-line interface for the Saweria gateway API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use saweria_client::SaweriaApiClient;
use saweria_types::Credentials;

#[derive(Parser)]
#[command(name = "saweria")]
#[command(author, version, about = "Saweria gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Saweria gateway
    #[arg(long, env = "SAWERIA_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct AccountArgs {
    /// Saweria username
    #[arg(long, env = "SAWERIA_USERNAME")]
    username: String,

    /// Saweria login email
    #[arg(long, env = "SAWERIA_EMAIL")]
    email: String,

    /// Saweria password
    #[arg(long, env = "SAWERIA_PASSWORD", hide_env_values = true)]
    password: String,
}

impl AccountArgs {
    fn credentials(self) -> Result<Credentials> {
        Ok(Credentials::new(self.username, self.email, self.password)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Create a QRIS payment
    Create {
        #[command(flatten)]
        account: AccountArgs,
        /// Amount in rupiah
        #[arg(long)]
        amount: u64,
    },
    /// Check the status of a transaction
    Status {
        #[command(flatten)]
        account: AccountArgs,
        /// Transaction id returned by `create`
        #[arg(long)]
        trx_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = SaweriaApiClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Create { account, amount } => {
            let payment = client
                .create_payment(&account.credentials()?, amount)
                .await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Status { account, trx_id } => {
            let status = client
                .check_status(&account.credentials()?, &trx_id)
                .await?;
            println!("{} {}", status.status_simbolic, status.trx_id);
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
