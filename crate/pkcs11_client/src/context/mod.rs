//! The native capability surface the client needs from a PKCS#11 module.
//!
//! [`Pkcs11Context`] is implemented by [`HsmLib`], which loads a vendor shared library, and by
//! `MemoryContext`, an in-memory token used to exercise the client without hardware. The
//! latter is only built for tests and with the `memory` feature.
//! Handles and identifiers are carried as `u64` on both sides of the boundary and are never
//! interpreted by the client beyond equality.

use std::fmt;

use serde::Serialize;

use crate::ClientResult;

mod hsm_lib;
#[cfg(any(test, feature = "memory"))]
mod memory;

pub use hsm_lib::HsmLib;
#[cfg(any(test, feature = "memory"))]
pub use memory::{MemoryContext, MockToken};

pub type SlotId = u64;
pub type SessionHandle = u64;
pub type ObjectHandle = u64;
pub type AttributeType = u64;
pub type MechanismType = u64;

/// A typed attribute as exchanged with the token: a `CKA_*` type and its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attr_type: AttributeType,
    pub value: Vec<u8>,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, value: impl Into<Vec<u8>>) -> Self {
        Self {
            attr_type,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn from_bool(attr_type: AttributeType, value: bool) -> Self {
        Self::new(attr_type, crate::attributes::bool_to_bytes(value))
    }

    pub fn from_ulong(attr_type: AttributeType, value: u64) -> ClientResult<Self> {
        Ok(Self::new(attr_type, crate::attributes::ulong_to_bytes(value)?))
    }
}

/// A mechanism invocation: the `CKM_*` type and an optional parameter blob (an IV for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mechanism {
    pub mechanism_type: MechanismType,
    pub parameter: Option<Vec<u8>>,
}

impl Mechanism {
    #[must_use]
    pub const fn new(mechanism_type: MechanismType) -> Self {
        Self {
            mechanism_type,
            parameter: None,
        }
    }

    #[must_use]
    pub fn with_parameter(mechanism_type: MechanismType, parameter: impl Into<Vec<u8>>) -> Self {
        Self {
            mechanism_type,
            parameter: Some(parameter.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotInfo {
    pub slot_description: String,
    pub manufacturer_id: String,
    pub flags: u64,
    pub hardware_version: Version,
    pub firmware_version: Version,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenInfo {
    pub label: String,
    pub manufacturer_id: String,
    pub model: String,
    pub serial_number: String,
    pub flags: u64,
    pub max_session_count: u64,
    pub session_count: u64,
    pub max_rw_session_count: u64,
    pub rw_session_count: u64,
    pub max_pin_len: u64,
    pub min_pin_len: u64,
    pub total_public_memory: u64,
    pub free_public_memory: u64,
    pub total_private_memory: u64,
    pub free_private_memory: u64,
    pub hardware_version: Version,
    pub firmware_version: Version,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MechanismInfo {
    pub min_key_size: u64,
    pub max_key_size: u64,
    pub flags: u64,
}

/// The subset of the PKCS#11 API used by the client.
///
/// Native failures are reported as [`crate::ClientError::NativeOperationFailed`] carrying the
/// function name without its `C_` prefix and the raw `CKR_*` value.
pub trait Pkcs11Context: Send + Sync {
    fn initialize(&self) -> ClientResult<()>;
    fn finalize(&self) -> ClientResult<()>;

    fn get_slot_list(&self, token_present: bool) -> ClientResult<Vec<SlotId>>;
    fn get_slot_info(&self, slot_id: SlotId) -> ClientResult<SlotInfo>;
    fn get_token_info(&self, slot_id: SlotId) -> ClientResult<TokenInfo>;
    fn get_mechanism_list(&self, slot_id: SlotId) -> ClientResult<Vec<MechanismType>>;
    fn get_mechanism_info(
        &self,
        slot_id: SlotId,
        mechanism_type: MechanismType,
    ) -> ClientResult<MechanismInfo>;

    fn open_session(&self, slot_id: SlotId, flags: u64) -> ClientResult<SessionHandle>;
    fn close_session(&self, session: SessionHandle) -> ClientResult<()>;
    fn login(&self, session: SessionHandle, user_type: u64, pin: &str) -> ClientResult<()>;
    fn logout(&self, session: SessionHandle) -> ClientResult<()>;

    fn create_object(
        &self,
        session: SessionHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle>;
    fn destroy_object(&self, session: SessionHandle, object: ObjectHandle) -> ClientResult<()>;
    fn find_objects_init(&self, session: SessionHandle, template: &[Attribute])
    -> ClientResult<()>;
    fn find_objects(
        &self,
        session: SessionHandle,
        max_count: usize,
    ) -> ClientResult<Vec<ObjectHandle>>;
    fn find_objects_final(&self, session: SessionHandle) -> ClientResult<()>;
    /// Read the requested attributes. Attributes the token reports as unavailable are
    /// left out of the result.
    fn get_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        attr_types: &[AttributeType],
    ) -> ClientResult<Vec<Attribute>>;
    fn set_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<()>;

    fn generate_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle>;
    fn generate_key_pair(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        public_template: &[Attribute],
        private_template: &[Attribute],
    ) -> ClientResult<(ObjectHandle, ObjectHandle)>;
    fn wrap_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        wrapping_key: ObjectHandle,
        key: ObjectHandle,
    ) -> ClientResult<Vec<u8>>;
    fn unwrap_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        unwrapping_key: ObjectHandle,
        wrapped_key: &[u8],
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle>;
    fn derive_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        base_key: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle>;

    fn encrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()>;
    fn encrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>>;
    fn decrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()>;
    fn decrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>>;
    fn sign_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()>;
    fn sign(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>>;
}
