//! Provision the project's development wallet and print how to fund it
//!
//! Loads the wallet from `.x402/wallet.json` (or the configured path),
//! creating one on first run. Pass `--seed` to (re)create a deterministic
//! wallet instead. The private key is never printed.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use devkit_wallet::{DevKitConfig, NetworkConfig, WalletSession, WalletStore};

/// x402 DevKit - provision a local test-network wallet
#[derive(Parser, Debug)]
#[command(name = "provision")]
#[command(about = "Create or load the x402 development wallet")]
struct Args {
    /// Project config file
    #[arg(long, default_value = devkit_wallet::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the wallet file location
    #[arg(long, env = "X402_WALLET_PATH")]
    wallet: Option<PathBuf>,

    /// Recreate the wallet deterministically from this seed (overwrites the file)
    #[arg(long, env = "X402_WALLET_SEED", hide_env_values = true)]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut config = DevKitConfig::load(&args.config)?;
    if let Some(wallet) = args.wallet {
        config.wallet_path = wallet;
    }
    let network = NetworkConfig::by_name(&config.network)?;
    let store = WalletStore::from_config(&config);

    let account = match args.seed.as_deref() {
        Some(seed) => {
            info!("Recreating wallet from seed at {:?}", store.wallet_path());
            store.create_wallet(Some(seed)).await?
        }
        None => WalletSession::new(store).get_wallet().await?,
    };

    let instructions = network.funding_instructions(&account.address);
    println!("{}", serde_json::to_string_pretty(&instructions)?);

    Ok(())
}
