use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use cosmian_pkcs11_client::{
    Pkcs11Client,
    context::Mechanism,
    enums::{MECHANISMS, OBJECT_CLASSES},
};
use serde::Serialize;

use super::console;
use crate::error::result::{CliResult, CliResultHelper};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CryptoOperation {
    Encrypt,
    Decrypt,
    Sign,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CryptoOutput {
    /// base64 encoded
    pub data: String,
}

/// Run a single-part operation with a key found by label
#[derive(Parser, Debug)]
pub struct CryptoAction {
    /// The label of the key
    #[arg(long, required = true)]
    pub key_label: String,

    /// The class of the key
    #[arg(long, default_value = "CKO_SECRET_KEY")]
    pub key_class: String,

    /// The mechanism, for instance `CKM_AES_CBC_PAD`
    #[arg(long, short = 'm', required = true)]
    pub mechanism: String,

    /// The mechanism parameter (an IV for instance), base64 encoded
    #[arg(long, short = 'p')]
    pub parameter: Option<String>,

    /// The input data, base64 encoded
    #[arg(long, short = 'd', required = true)]
    pub data: String,
}

impl CryptoAction {
    fn mechanism(&self) -> CliResult<Mechanism> {
        let mechanism_type = MECHANISMS.resolve(&self.mechanism)?;
        Ok(match &self.parameter {
            Some(parameter) => Mechanism::with_parameter(
                mechanism_type,
                general_purpose::STANDARD.decode(parameter)?,
            ),
            None => Mechanism::new(mechanism_type),
        })
    }

    pub fn run(
        &self,
        client: &Pkcs11Client,
        operation: CryptoOperation,
    ) -> CliResult<CryptoOutput> {
        let mechanism = self.mechanism()?;
        let data = general_purpose::STANDARD.decode(&self.data)?;
        let class = OBJECT_CLASSES.resolve(&self.key_class)?;
        let key = client
            .find_object_by_label_and_class(&self.key_label, class)
            .with_context(|| format!("Can't find the key {:?}", self.key_label))?;
        let output = match operation {
            CryptoOperation::Encrypt => client.encrypt(&mechanism, key, &data)?,
            CryptoOperation::Decrypt => client.decrypt(&mechanism, key, &data)?,
            CryptoOperation::Sign => client.sign(&mechanism, key, &data)?,
        };
        Ok(CryptoOutput {
            data: general_purpose::STANDARD.encode(output),
        })
    }

    pub fn process(&self, client: &Pkcs11Client, operation: CryptoOperation) -> CliResult<()> {
        console::write_json(&self.run(client, operation)?)
    }
}
