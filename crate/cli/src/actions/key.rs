use clap::{Parser, Subcommand};
use cosmian_pkcs11_client::{
    Pkcs11Client, consts::CKA_ID, context::Attribute, context::Mechanism, enums::MECHANISMS,
};
use uuid::Uuid;

use super::{
    console,
    object::{CreatedObject, parse_template},
};
use crate::error::result::CliResult;

/// Manage keys
#[derive(Subcommand)]
pub enum KeyCommands {
    Generate(GenerateKeyAction),
}

impl KeyCommands {
    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        match self {
            Self::Generate(action) => console::write_json(&action.run(client)?),
        }
    }
}

/// Generate a secret key on the token
///
/// A random UUID is used as the key identifier (`key_id`) when the attributes do not set one.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct GenerateKeyAction {
    /// The key generation mechanism, for instance `CKM_AES_KEY_GEN` or `AES_KEY_GEN`
    #[arg(long, short = 'm', default_value = "CKM_AES_KEY_GEN")]
    pub mechanism: String,

    /// The key attributes as a JSON object, for instance `{"label": "my-key", "value_len": 32}`
    #[arg(long, short = 'a', default_value = "{}")]
    pub attributes: String,
}

impl GenerateKeyAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<CreatedObject> {
        let mechanism = Mechanism::new(MECHANISMS.resolve(&self.mechanism)?);
        let mut template = parse_template(&self.attributes)?;
        if !template.iter().any(|a| a.attr_type == CKA_ID) {
            template.push(Attribute::new(CKA_ID, Uuid::new_v4().to_string()));
        }
        let handle = client.generate_symmetric_key(&mechanism, &template)?;
        CreatedObject::new(client, handle)
    }
}
