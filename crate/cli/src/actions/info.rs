use clap::Parser;
use cosmian_pkcs11_client::{Pkcs11Client, Slot, SupportedMechanism, Token};

use super::console;
use crate::error::result::{CliResult, CliResultHelper};

/// List the slots of the module
#[derive(Parser, Debug, Default)]
pub struct SlotsAction {
    /// Also list the slots without a token
    #[arg(long, default_value = "false")]
    pub all: bool,
}

impl SlotsAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<Vec<Slot>> {
        client
            .get_slot_list(!self.all)
            .with_context(|| "Can't list the slots")
    }

    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        console::write_json(&self.run(client)?)
    }
}

/// Show the information of the selected token
#[derive(Parser, Debug, Default)]
pub struct TokenInfoAction;

impl TokenInfoAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<Token> {
        client
            .get_token_info()
            .with_context(|| format!("Can't read the token of slot {}", client.slot_id()))
    }

    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        console::write_json(&self.run(client)?)
    }
}

/// List the mechanisms supported by the selected token
#[derive(Parser, Debug, Default)]
pub struct MechanismsAction;

impl MechanismsAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<Vec<SupportedMechanism>> {
        Ok(client.get_mechanism_list()?)
    }

    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        console::write_json(&self.run(client)?)
    }
}
