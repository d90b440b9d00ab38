use std::{fs, path::Path};

use clap::Args;
use cosmian_pkcs11_client::ClientConfig;
use tracing::debug;

use crate::error::result::{CliResult, CliResultHelper};

pub const CKP11_CONF_ENV: &str = "CKP11_CONF";

/// Token connection options. They override the configuration file, which overrides the
/// `PKCS11_*` environment variables.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Path to the PKCS#11 module shared library
    #[arg(long, global = true)]
    pub module_path: Option<String>,

    /// Label of the token to use
    #[arg(long, global = true)]
    pub token_label: Option<String>,

    /// Serial number of the token to use
    #[arg(long, global = true)]
    pub serial_number: Option<String>,

    /// Manufacturer of the token to use
    #[arg(long, global = true)]
    pub token_manufacturer: Option<String>,

    /// Model of the token to use
    #[arg(long, global = true)]
    pub token_model: Option<String>,

    /// Slot of the token to use, instead of the token filters
    #[arg(long, global = true)]
    pub slot_id: Option<u64>,

    /// User PIN
    #[arg(long, global = true)]
    pub pin: Option<String>,

    /// Number of idle sessions kept open
    #[arg(long, global = true)]
    pub pool_size: Option<i64>,
}

impl ConnectionArgs {
    fn apply(&self, config: &mut ClientConfig) {
        if let Some(module_path) = &self.module_path {
            module_path.clone_into(&mut config.module_path);
        }
        let overrides = [
            (&self.token_label, &mut config.token_label),
            (&self.serial_number, &mut config.serial_number),
            (&self.token_manufacturer, &mut config.token_manufacturer),
            (&self.token_model, &mut config.token_model),
            (&self.pin, &mut config.pin),
        ];
        for (flag, field) in overrides {
            if flag.is_some() {
                field.clone_from(flag);
            }
        }
        if self.slot_id.is_some() {
            config.slot_id = self.slot_id;
        }
        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
    }
}

/// Read a TOML client configuration file.
pub fn from_toml(path: &Path) -> CliResult<ClientConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Can't read the configuration file {}", path.display()))?;
    Ok(toml::from_str(&content)?)
}

/// Build the client configuration: flags first, then the file, then the environment.
pub fn load(conf: Option<&Path>, args: &ConnectionArgs) -> CliResult<ClientConfig> {
    let mut config = match conf {
        Some(path) => from_toml(path)?,
        None => ClientConfig::default(),
    };
    args.apply(&mut config);
    config.apply_env();
    debug!("Configuration: {config:?}");
    Ok(config)
}
