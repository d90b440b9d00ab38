use clap::Parser;
use cosmian_pkcs11_client::enums::{Pkcs11Enum, all_enums, find_enum};
use serde::Serialize;

use super::console;
use crate::{cli_bail, error::result::CliResult};

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: &'static str,
    pub value: String,
}

#[derive(Serialize, Debug)]
pub struct ConstantFamily {
    pub domain: &'static str,
    pub prefix: &'static str,
    pub constants: Vec<Constant>,
}

impl From<&Pkcs11Enum> for ConstantFamily {
    fn from(family: &Pkcs11Enum) -> Self {
        Self {
            domain: family.domain(),
            prefix: family.prefix(),
            constants: family
                .names()
                .map(|(name, id)| Constant {
                    name,
                    value: format!("0x{id:08X}"),
                })
                .collect(),
        }
    }
}

/// List the PKCS#11 constants known to the client
///
/// No token is needed.
#[derive(Parser, Debug, Default)]
#[clap(verbatim_doc_comment)]
pub struct ConstantsAction {
    /// Only list one family: `mechanism`, `key_type`, `object_class`, `certificate_type`,
    /// `attribute_type`, `return_value`, or a prefix such as `CKM`
    #[arg(long)]
    pub domain: Option<String>,
}

impl ConstantsAction {
    pub fn run(&self) -> CliResult<Vec<ConstantFamily>> {
        match &self.domain {
            None => Ok(all_enums().into_iter().map(ConstantFamily::from).collect()),
            Some(domain) => match find_enum(domain) {
                Some(family) => Ok(vec![ConstantFamily::from(family)]),
                None => cli_bail!("unknown constant family: {domain}"),
            },
        }
    }

    pub fn process(&self) -> CliResult<()> {
        console::write_json(&self.run()?)
    }
}
