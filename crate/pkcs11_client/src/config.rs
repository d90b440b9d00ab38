use std::{env, fmt};

use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

pub const DEFAULT_POOL_SIZE: usize = 5;

const ENV_MODULE_PATH: &str = "PKCS11_MODULE_PATH";
const ENV_TOKEN_LABEL: &str = "PKCS11_TOKEN_LABEL";
const ENV_SLOT_ID: &str = "PKCS11_SLOT_ID";
const ENV_PIN: &str = "PKCS11_PIN";
const ENV_SO_PIN: &str = "PKCS11_SO_PIN";

/// Where the PKCS#11 module lives and which token to talk to.
///
/// A token is selected either by `slot_id` or by any combination of the label, serial number,
/// manufacturer and model filters; all non-empty filters must match.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub module_path: String,
    pub token_label: Option<String>,
    pub serial_number: Option<String>,
    pub token_manufacturer: Option<String>,
    pub token_model: Option<String>,
    pub slot_id: Option<u64>,
    pub pin: Option<String>,
    pub so_pin: Option<String>,
    pub pool_size: i64,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |pin: &Option<String>| pin.as_ref().map(|_| "****");
        f.debug_struct("ClientConfig")
            .field("module_path", &self.module_path)
            .field("token_label", &self.token_label)
            .field("serial_number", &self.serial_number)
            .field("token_manufacturer", &self.token_manufacturer)
            .field("token_model", &self.token_model)
            .field("slot_id", &self.slot_id)
            .field("pin", &redact(&self.pin))
            .field("so_pin", &redact(&self.so_pin))
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl ClientConfig {
    /// A configuration read from the `PKCS11_*` environment variables only.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Fill the fields still unset from the `PKCS11_*` environment variables.
    ///
    /// An unparsable `PKCS11_SLOT_ID` is ignored.
    pub fn apply_env(&mut self) {
        if self.module_path.is_empty() {
            if let Some(path) = env_var(ENV_MODULE_PATH) {
                self.module_path = path;
            }
        }
        if self.token_label.is_none() {
            self.token_label = env_var(ENV_TOKEN_LABEL);
        }
        if self.slot_id.is_none() {
            self.slot_id = env_var(ENV_SLOT_ID).and_then(|v| v.trim().parse().ok());
        }
        if self.pin.is_none() {
            self.pin = env_var(ENV_PIN);
        }
        if self.so_pin.is_none() {
            self.so_pin = env_var(ENV_SO_PIN);
        }
    }

    /// The non-empty token filters, as `(name, value)` pairs.
    #[must_use]
    pub fn token_filters(&self) -> Vec<(&'static str, &str)> {
        [
            ("label", non_empty(self.token_label.as_ref())),
            ("serial_number", non_empty(self.serial_number.as_ref())),
            ("manufacturer", non_empty(self.token_manufacturer.as_ref())),
            ("model", non_empty(self.token_model.as_ref())),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// The number of idle sessions kept by the pool.
    #[must_use]
    pub fn effective_pool_size(&self) -> usize {
        usize::try_from(self.pool_size)
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_SIZE)
    }

    /// Check the token selection rules.
    ///
    /// Loading the module additionally requires [`ClientConfig::validate`].
    pub fn validate_selection(&self) -> ClientResult<()> {
        let has_filters = !self.token_filters().is_empty();
        match (self.slot_id, has_filters) {
            (Some(_), true) => Err(ClientError::InvalidConfig(
                "slot_id cannot be combined with token filters".to_owned(),
            )),
            (None, false) => Err(ClientError::InvalidConfig(
                "either slot_id or one of token_label, serial_number, token_manufacturer, \
                 token_model is required"
                    .to_owned(),
            )),
            _ => Ok(()),
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.module_path.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "module_path is required".to_owned(),
            ));
        }
        self.validate_selection()
    }
}
