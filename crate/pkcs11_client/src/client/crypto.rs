use super::Pkcs11Client;
use crate::{
    ClientResult,
    context::{Mechanism, ObjectHandle},
};

// Init and run share one session so a stale session found at init time is retried as a whole.
impl Pkcs11Client {
    pub fn encrypt(
        &self,
        mechanism: &Mechanism,
        key: ObjectHandle,
        data: &[u8],
    ) -> ClientResult<Vec<u8>> {
        self.with_session(|ctx, session| {
            ctx.encrypt_init(session, mechanism, key)?;
            ctx.encrypt(session, data)
        })
    }

    pub fn decrypt(
        &self,
        mechanism: &Mechanism,
        key: ObjectHandle,
        data: &[u8],
    ) -> ClientResult<Vec<u8>> {
        self.with_session(|ctx, session| {
            ctx.decrypt_init(session, mechanism, key)?;
            ctx.decrypt(session, data)
        })
    }

    pub fn sign(
        &self,
        mechanism: &Mechanism,
        key: ObjectHandle,
        data: &[u8],
    ) -> ClientResult<Vec<u8>> {
        self.with_session(|ctx, session| {
            ctx.sign_init(session, mechanism, key)?;
            ctx.sign(session, data)
        })
    }
}
