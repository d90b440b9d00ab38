use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cosmian_logger::log_init;
use cosmian_pkcs11_client::Pkcs11Client;
use tracing::{debug, info};

use crate::{
    actions::{
        constants::ConstantsAction,
        crypto::{CryptoAction, CryptoOperation},
        info::{MechanismsAction, SlotsAction, TokenInfoAction},
        key::KeyCommands,
        object::ObjectCommands,
    },
    config::{self, CKP11_CONF_ENV, ConnectionArgs},
    error::result::{CliResult, CliResultHelper},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file location (TOML)
    ///
    /// This is an alternative to the env variable `CKP11_CONF`.
    #[arg(short, long, env = CKP11_CONF_ENV, global = true)]
    pub conf: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    Slots(SlotsAction),
    TokenInfo(TokenInfoAction),
    Mechanisms(MechanismsAction),
    Constants(ConstantsAction),
    /// Show, create and destroy token objects
    #[command(subcommand)]
    Object(ObjectCommands),
    /// Generate keys
    #[command(subcommand)]
    Key(KeyCommands),
    /// Encrypt base64 data with a token key
    Encrypt(CryptoAction),
    /// Decrypt base64 data with a token key
    Decrypt(CryptoAction),
    /// Sign base64 data with a token key
    Sign(CryptoAction),
}

impl CliCommands {
    /// Run a command that needs a token.
    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        match self {
            Self::Slots(action) => action.process(client),
            Self::TokenInfo(action) => action.process(client),
            Self::Mechanisms(action) => action.process(client),
            Self::Constants(action) => action.process(),
            Self::Object(commands) => commands.process(client),
            Self::Key(commands) => commands.process(client),
            Self::Encrypt(action) => action.process(client, CryptoOperation::Encrypt),
            Self::Decrypt(action) => action.process(client, CryptoOperation::Decrypt),
            Self::Sign(action) => action.process(client, CryptoOperation::Sign),
        }
    }
}

/// Main function of the `ckp11` CLI.
///
/// Initializes logging, parses the command line, connects to the token unless the command
/// does not need one, and runs the command.
pub fn ckp11_main() -> CliResult<()> {
    log_init(None);
    let cli = Cli::parse();

    if let CliCommands::Constants(action) = &cli.command {
        return action.process();
    }

    let config = config::load(cli.conf.as_deref(), &cli.connection)?;
    info!("Connecting to the PKCS#11 module {}", config.module_path);
    let client = Pkcs11Client::new(config).context("Can't connect to the token")?;
    debug!("using slot {}", client.slot_id());
    cli.command.process(&client)?;
    client.close()?;
    Ok(())
}
