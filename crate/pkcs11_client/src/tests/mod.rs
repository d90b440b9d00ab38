//! Client tests, run against the in-memory token.

use std::sync::Arc;

use cosmian_logger::log_init;

use crate::{ClientConfig, ClientResult, Pkcs11Client, context::MemoryContext};

mod keys;
mod retry;

const TOKEN_LABEL: &str = "test-token";
const PIN: &str = "1234";

fn config(token_label: &str) -> ClientConfig {
    ClientConfig {
        token_label: Some(token_label.to_owned()),
        pin: Some(PIN.to_owned()),
        ..ClientConfig::default()
    }
}

fn memory_client() -> ClientResult<(Arc<MemoryContext>, Pkcs11Client)> {
    log_init(None);
    let ctx = Arc::new(MemoryContext::new(TOKEN_LABEL).with_pin(PIN));
    let client = Pkcs11Client::with_context(ctx.clone(), config(TOKEN_LABEL))?;
    Ok((ctx, client))
}
