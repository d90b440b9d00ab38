//! Copyright 2024 Cosmian Tech SAS

use thiserror::Error;

use crate::{
    consts::{
        CKR_DEVICE_REMOVED, CKR_SESSION_CLOSED, CKR_SESSION_HANDLE_INVALID, CKR_TOKEN_NOT_PRESENT,
        CKR_USER_NOT_LOGGED_IN,
    },
    enums::RETURN_VALUES,
};

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("pkcs11: object not found")]
    ObjectNotFound,

    #[error("pkcs11: multiple objects match: found {0} objects")]
    MultipleObjectsFound(usize),

    #[error("pkcs11: slot not found: no token matching {0}")]
    SlotNotFound(String),

    #[error("pkcs11: pin incorrect: {0}")]
    PinIncorrect(Box<ClientError>),

    #[error("unknown {domain}: {input:?}")]
    UnknownSymbol { domain: &'static str, input: String },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("malformed {kind} value: {reason}")]
    MalformedEncoding { kind: &'static str, reason: String },

    #[error("invalid object identifier {0:?}, expected label/key_id_hex/CKO_CLASS_NAME")]
    InvalidObjectId(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("attribute changes require a new object: {}", .0.join(", "))]
    ReplacementRequired(Vec<String>),

    #[error("pkcs11 {operation} failed: {} (0x{code:08X})", return_value_name(.code))]
    NativeOperationFailed { operation: &'static str, code: u64 },

    #[error("Error loading the library: {0}")]
    LibLoading(#[from] libloading::Error),

    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),

    #[error("{0}")]
    Default(String),
}

fn return_value_name(code: &u64) -> String {
    RETURN_VALUES.format(*code)
}

impl ClientError {
    pub(crate) const fn native(operation: &'static str, code: u64) -> Self {
        Self::NativeOperationFailed { operation, code }
    }

    pub(crate) fn malformed(kind: &'static str, reason: impl ToString) -> Self {
        Self::MalformedEncoding {
            kind,
            reason: reason.to_string(),
        }
    }

    /// The raw `CKR_*` value carried by a native failure, if any.
    #[must_use]
    pub const fn native_code(&self) -> Option<u64> {
        match self {
            Self::NativeOperationFailed { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the failure means the session is no longer usable and must be replaced.
    #[must_use]
    pub const fn is_session_error(&self) -> bool {
        matches!(
            self.native_code(),
            Some(
                CKR_SESSION_HANDLE_INVALID
                    | CKR_SESSION_CLOSED
                    | CKR_TOKEN_NOT_PRESENT
                    | CKR_DEVICE_REMOVED
                    | CKR_USER_NOT_LOGGED_IN
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ClientError;
    use crate::consts::{CKR_ATTRIBUTE_TYPE_INVALID, CKR_SESSION_HANDLE_INVALID};

    #[test]
    fn native_error_display() {
        let err = ClientError::native("OpenSession", CKR_SESSION_HANDLE_INVALID);
        assert_eq!(
            err.to_string(),
            "pkcs11 OpenSession failed: CKR_SESSION_HANDLE_INVALID (0x000000B3)"
        );
        let err = ClientError::native("Sign", 0x8000_0042);
        assert_eq!(err.to_string(), "pkcs11 Sign failed: 0x80000042 (0x80000042)");
    }

    #[test]
    fn session_error_classifier() {
        for code in [0xB3, 0xB0, 0xE0, 0x32, 0x101] {
            assert!(ClientError::native("FindObjects", code).is_session_error());
        }
        assert!(!ClientError::native("GetAttributeValue", CKR_ATTRIBUTE_TYPE_INVALID).is_session_error());
        assert!(!ClientError::ObjectNotFound.is_session_error());
        assert!(
            !ClientError::PinIncorrect(Box::new(ClientError::native("Login", 0xA0)))
                .is_session_error()
        );
    }
}
