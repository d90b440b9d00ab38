//! Copyright 2024 Cosmian Tech SAS

//! A PKCS#11 token client.
//!
//! The crate maintains a pool of authenticated sessions on a single slot, retries an operation
//! once when the token invalidates its session, and marshals object attributes between their
//! native byte encoding and an external representation driven by a static catalog.

pub mod attributes;
mod client;
mod config;
pub mod consts;
pub mod context;
pub mod enums;
mod error;
mod session_pool;

pub use client::{Pkcs11Client, Slot, SupportedMechanism, Token};
pub use config::{ClientConfig, DEFAULT_POOL_SIZE};
pub use error::{ClientError, ClientResult};
pub use session_pool::SessionPool;

#[cfg(test)]
mod tests;
