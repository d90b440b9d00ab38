use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{
    ClientError, ClientResult,
    consts::{CKF_RW_SESSION, CKF_SERIAL_SESSION, CKR_USER_ALREADY_LOGGED_IN, CKU_USER},
    context::{Pkcs11Context, SessionHandle, SlotId},
};

/// A bounded pool of authenticated read-write sessions on one slot.
///
/// Sessions are opened on demand and never waited for: [`SessionPool::get`] opens a new session
/// whenever no idle one is available. The capacity only bounds the number of idle sessions kept
/// for reuse. The pool lock is never held across a call into the module.
pub struct SessionPool {
    context: Arc<dyn Pkcs11Context>,
    slot_id: SlotId,
    pin: Option<Zeroizing<String>>,
    capacity: usize,
    idle: Mutex<Vec<SessionHandle>>,
}

impl SessionPool {
    #[must_use]
    pub fn new(
        context: Arc<dyn Pkcs11Context>,
        slot_id: SlotId,
        pin: Option<&str>,
        capacity: usize,
    ) -> Self {
        Self {
            context,
            slot_id,
            pin: pin
                .filter(|p| !p.is_empty())
                .map(|p| Zeroizing::new(p.to_owned())),
            capacity,
            idle: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    fn idle(&self) -> MutexGuard<'_, Vec<SessionHandle>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// An idle session, or a freshly opened and logged-in one.
    pub fn get(&self) -> ClientResult<SessionHandle> {
        let pooled = self.idle().pop();
        match pooled {
            Some(session) => Ok(session),
            None => self.open_session(),
        }
    }

    /// Return a session for reuse. It is closed instead when the pool is full.
    pub fn put(&self, session: SessionHandle) {
        {
            let mut idle = self.idle();
            if idle.len() < self.capacity {
                idle.push(session);
                return;
            }
        }
        debug!("session pool full, closing session {session}");
        self.close_session(session);
    }

    /// Close a session that must not be reused.
    pub fn discard(&self, session: SessionHandle) {
        debug!("discarding session {session}");
        self.close_session(session);
    }

    /// Close every idle session.
    pub fn close_all(&self) {
        let sessions = std::mem::take(&mut *self.idle());
        for session in sessions {
            self.close_session(session);
        }
    }

    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle().len()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub const fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    fn open_session(&self) -> ClientResult<SessionHandle> {
        let session = self
            .context
            .open_session(self.slot_id, CKF_RW_SESSION | CKF_SERIAL_SESSION)?;
        debug!("opened session {session} on slot {}", self.slot_id);
        let Some(pin) = self.pin.as_ref() else {
            return Ok(session);
        };
        match self.context.login(session, CKU_USER, pin) {
            Ok(()) => Ok(session),
            Err(e) if e.native_code() == Some(CKR_USER_ALREADY_LOGGED_IN) => {
                warn!("user already logged in, ignoring logging");
                Ok(session)
            }
            Err(e) => {
                self.close_session(session);
                Err(ClientError::PinIncorrect(Box::new(e)))
            }
        }
    }

    fn close_session(&self, session: SessionHandle) {
        if let Err(e) = self.context.close_session(session) {
            warn!("failed closing session {session}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::SessionPool;
    use crate::{
        ClientError,
        consts::{CKR_PIN_INCORRECT, CKR_USER_ALREADY_LOGGED_IN},
        context::{MemoryContext, Pkcs11Context},
    };

    fn context(pin: &str) -> Arc<MemoryContext> {
        let ctx = Arc::new(MemoryContext::new("pool").with_pin(pin));
        ctx.initialize().unwrap();
        ctx
    }

    #[test]
    fn sessions_are_opened_lazily_and_logged_in() {
        let ctx = context("1234");
        let pool = SessionPool::new(ctx.clone(), 0, Some("1234"), 2);
        assert_eq!(pool.idle_count(), 0);
        assert!(ctx.opened_sessions().is_empty());

        let session = pool.get().unwrap();
        assert!(ctx.is_logged_in(session));
        pool.put(session);
        assert_eq!(pool.idle_count(), 1);

        // reused, not reopened
        assert_eq!(pool.get().unwrap(), session);
        assert_eq!(ctx.opened_sessions(), vec![session]);
    }

    #[test]
    fn overflowing_puts_close_sessions() {
        let ctx = context("1234");
        let pool = SessionPool::new(ctx.clone(), 0, Some("1234"), 2);
        let sessions: Vec<_> = (0..3).map(|_| pool.get().unwrap()).collect();
        for session in &sessions {
            pool.put(*session);
        }
        assert_eq!(pool.idle_count(), 2);
        assert_eq!(pool.capacity(), 2);
        assert_eq!(ctx.closed_sessions(), vec![sessions[2]]);
        assert_eq!(ctx.live_sessions(), 2);
    }

    #[test]
    fn empty_pin_skips_login() {
        let ctx = context("1234");
        let pool = SessionPool::new(ctx.clone(), 0, Some(""), 1);
        let session = pool.get().unwrap();
        assert!(!ctx.is_logged_in(session));
        assert!(ctx.sessions_used_by("Login").is_empty());
    }

    #[test]
    fn wrong_pin_closes_the_session() {
        let ctx = context("1234");
        let pool = SessionPool::new(ctx.clone(), 0, Some("0000"), 1);
        let err = pool.get().unwrap_err();
        let ClientError::PinIncorrect(inner) = err else {
            panic!("expected PinIncorrect, got {err:?}");
        };
        assert_eq!(inner.native_code(), Some(CKR_PIN_INCORRECT));
        assert_eq!(ctx.opened_sessions(), ctx.closed_sessions());
        assert_eq!(ctx.live_sessions(), 0);
    }

    #[test]
    fn already_logged_in_is_accepted() {
        let ctx = context("1234");
        ctx.fail_next("Login", CKR_USER_ALREADY_LOGGED_IN);
        let pool = SessionPool::new(ctx.clone(), 0, Some("1234"), 1);
        let session = pool.get().unwrap();
        assert_eq!(ctx.live_sessions(), 1);
        pool.put(session);
        assert_eq!(pool.idle_count(), 1);
    }

    #[test]
    fn discard_and_close_all() {
        let ctx = context("1234");
        let pool = SessionPool::new(ctx.clone(), 0, Some("1234"), 4);
        let first = pool.get().unwrap();
        let second = pool.get().unwrap();
        let third = pool.get().unwrap();
        pool.discard(first);
        pool.put(second);
        pool.put(third);
        assert_eq!(ctx.closed_sessions(), vec![first]);

        pool.close_all();
        assert_eq!(pool.idle_count(), 0);
        assert_eq!(ctx.live_sessions(), 0);
        // closing an already closed session is only logged
        pool.discard(first);
    }
}
