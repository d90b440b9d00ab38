use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::{
    ClientConfig, ClientError, ClientResult, SessionPool,
    context::{HsmLib, Pkcs11Context, SessionHandle, SlotId, TokenInfo},
};

mod crypto;
mod find;
mod info;
mod keys;
mod objects;

pub use info::{Slot, SupportedMechanism, Token};

/// A client bound to one token slot.
///
/// All token operations run on a session borrowed from an internal pool. An operation that
/// fails because its session went stale is retried once on a fresh session.
pub struct Pkcs11Client {
    context: Arc<dyn Pkcs11Context>,
    config: ClientConfig,
    slot_id: SlotId,
    pool: SessionPool,
    closed: Mutex<bool>,
}

impl Pkcs11Client {
    /// Load the module at `config.module_path` and connect to the configured token.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let library = HsmLib::instantiate(&config.module_path)?;
        Self::with_context(Arc::new(library), config)
    }

    /// Connect to the configured token through an already loaded `context`.
    ///
    /// The context is initialized here; it is finalized again if no slot matches.
    pub fn with_context(context: Arc<dyn Pkcs11Context>, config: ClientConfig) -> ClientResult<Self> {
        config.validate_selection()?;
        context.initialize()?;
        let slot_id = match resolve_slot(context.as_ref(), &config) {
            Ok(slot_id) => slot_id,
            Err(e) => {
                if let Err(fe) = context.finalize() {
                    warn!("failed finalizing the PKCS#11 context: {fe}");
                }
                return Err(e);
            }
        };
        let pool = SessionPool::new(
            context.clone(),
            slot_id,
            config.pin.as_deref(),
            config.effective_pool_size(),
        );
        info!(
            "PKCS#11 client ready on slot {slot_id} (pool size: {})",
            pool.capacity()
        );
        Ok(Self {
            context,
            config,
            slot_id,
            pool,
            closed: Mutex::new(false),
        })
    }

    #[must_use]
    pub const fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    #[must_use]
    pub fn context(&self) -> &Arc<dyn Pkcs11Context> {
        &self.context
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn pool(&self) -> &SessionPool {
        &self.pool
    }

    /// Run `op` on a pooled session.
    ///
    /// When `op` fails with a session error the session is discarded and `op` runs exactly
    /// once more on a fresh session. The session used last goes back to the pool unless that
    /// last run also failed with a session error.
    pub fn with_session<T, F>(&self, mut op: F) -> ClientResult<T>
    where
        F: FnMut(&dyn Pkcs11Context, SessionHandle) -> ClientResult<T>,
    {
        self.ensure_open()?;
        let session = self.pool.get()?;
        let result = op(self.context.as_ref(), session);
        let (session, result) = match result {
            Err(e) if e.is_session_error() => {
                debug!("session {session} is no longer usable ({e}), retrying on a new session");
                self.pool.discard(session);
                let session = self.pool.get()?;
                (session, op(self.context.as_ref(), session))
            }
            result => (session, result),
        };
        self.release(session, matches!(&result, Err(e) if e.is_session_error()));
        result
    }

    /// Hand a session back after use. The client state lock is held so that a concurrent
    /// `close` cannot drain the pool in between.
    fn release(&self, session: SessionHandle, stale: bool) {
        let closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            // finalizing the module closed it already
            debug!("client closed while session {session} was in use, dropping it");
        } else if stale {
            self.pool.discard(session);
        } else {
            self.pool.put(session);
        }
    }

    fn ensure_open(&self) -> ClientResult<()> {
        let closed = self.closed.lock().map_err(|e| {
            ClientError::Default(format!("failed acquiring a lock on the client state: {e:?}"))
        })?;
        if *closed {
            return Err(ClientError::Default("the PKCS#11 client is closed".to_owned()));
        }
        Ok(())
    }

    /// Close the pooled sessions and finalize the module. Later calls do nothing.
    pub fn close(&self) -> ClientResult<()> {
        let mut closed = self.closed.lock().map_err(|e| {
            ClientError::Default(format!("failed acquiring a lock on the client state: {e:?}"))
        })?;
        if *closed {
            return Ok(());
        }
        *closed = true;
        self.pool.close_all();
        self.context.finalize()?;
        debug!("PKCS#11 client on slot {} closed", self.slot_id);
        Ok(())
    }
}

impl Drop for Pkcs11Client {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("failed closing the PKCS#11 client: {e}");
        }
    }
}

fn token_matches(token: &TokenInfo, filters: &[(&'static str, &str)]) -> bool {
    filters.iter().all(|(name, expected)| {
        let actual = match *name {
            "label" => &token.label,
            "serial_number" => &token.serial_number,
            "manufacturer" => &token.manufacturer_id,
            "model" => &token.model,
            _ => return false,
        };
        actual == expected
    })
}

/// The explicit slot, or the first slot whose token matches every configured filter.
fn resolve_slot(context: &dyn Pkcs11Context, config: &ClientConfig) -> ClientResult<SlotId> {
    if let Some(slot_id) = config.slot_id {
        return Ok(slot_id);
    }
    let filters = config.token_filters();
    for slot_id in context.get_slot_list(true)? {
        let token = match context.get_token_info(slot_id) {
            Ok(token) => token,
            Err(e) => {
                debug!("skipping slot {slot_id}: {e}");
                continue;
            }
        };
        if token_matches(&token, &filters) {
            debug!("token {:?} found in slot {slot_id}", token.label);
            return Ok(slot_id);
        }
    }
    Err(ClientError::SlotNotFound(
        filters
            .iter()
            .map(|(name, value)| format!("{name}={value:?}"))
            .collect::<Vec<_>>()
            .join(", "),
    ))
}
