use super::Pkcs11Client;
use crate::{
    ClientResult,
    context::{Attribute, Mechanism, ObjectHandle},
};

impl Pkcs11Client {
    pub fn generate_symmetric_key(
        &self,
        mechanism: &Mechanism,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        self.with_session(|ctx, session| ctx.generate_key(session, mechanism, template))
    }

    /// Returns the `(public, private)` key handles.
    pub fn generate_key_pair(
        &self,
        mechanism: &Mechanism,
        public_template: &[Attribute],
        private_template: &[Attribute],
    ) -> ClientResult<(ObjectHandle, ObjectHandle)> {
        self.with_session(|ctx, session| {
            ctx.generate_key_pair(session, mechanism, public_template, private_template)
        })
    }

    pub fn wrap_key(
        &self,
        mechanism: &Mechanism,
        wrapping_key: ObjectHandle,
        key: ObjectHandle,
    ) -> ClientResult<Vec<u8>> {
        self.with_session(|ctx, session| ctx.wrap_key(session, mechanism, wrapping_key, key))
    }

    pub fn unwrap_key(
        &self,
        mechanism: &Mechanism,
        unwrapping_key: ObjectHandle,
        wrapped_key: &[u8],
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        self.with_session(|ctx, session| {
            ctx.unwrap_key(session, mechanism, unwrapping_key, wrapped_key, template)
        })
    }

    pub fn derive_key(
        &self,
        mechanism: &Mechanism,
        base_key: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        self.with_session(|ctx, session| ctx.derive_key(session, mechanism, base_key, template))
    }
}
