//! PKCS#11 constants used by the client, widened to `u64`.
//!
//! The full symbolic tables live in [`crate::enums`]; these are the values the client
//! itself branches on.

use crate::context::{AttributeType, MechanismType};

pub const CKA_CLASS: AttributeType = 0x0000_0000;
pub const CKA_TOKEN: AttributeType = 0x0000_0001;
pub const CKA_PRIVATE: AttributeType = 0x0000_0002;
pub const CKA_LABEL: AttributeType = 0x0000_0003;
pub const CKA_VALUE: AttributeType = 0x0000_0011;
pub const CKA_KEY_TYPE: AttributeType = 0x0000_0100;
pub const CKA_ID: AttributeType = 0x0000_0102;
pub const CKA_SENSITIVE: AttributeType = 0x0000_0103;
pub const CKA_ENCRYPT: AttributeType = 0x0000_0104;
pub const CKA_DECRYPT: AttributeType = 0x0000_0105;
pub const CKA_SIGN: AttributeType = 0x0000_0108;
pub const CKA_MODULUS: AttributeType = 0x0000_0120;
pub const CKA_MODULUS_BITS: AttributeType = 0x0000_0121;
pub const CKA_VALUE_LEN: AttributeType = 0x0000_0161;
pub const CKA_EXTRACTABLE: AttributeType = 0x0000_0162;
pub const CKA_LOCAL: AttributeType = 0x0000_0163;
pub const CKA_KEY_GEN_MECHANISM: AttributeType = 0x0000_0166;

pub const CKO_DATA: u64 = 0x0000_0000;
pub const CKO_CERTIFICATE: u64 = 0x0000_0001;
pub const CKO_PUBLIC_KEY: u64 = 0x0000_0002;
pub const CKO_PRIVATE_KEY: u64 = 0x0000_0003;
pub const CKO_SECRET_KEY: u64 = 0x0000_0004;

pub const CKK_RSA: u64 = 0x0000_0000;
pub const CKK_AES: u64 = 0x0000_001F;

pub const CKM_RSA_PKCS_KEY_PAIR_GEN: MechanismType = 0x0000_0000;
pub const CKM_RSA_PKCS: MechanismType = 0x0000_0001;
pub const CKM_AES_KEY_GEN: MechanismType = 0x0000_1080;
pub const CKM_AES_ECB: MechanismType = 0x0000_1081;
pub const CKM_AES_CBC: MechanismType = 0x0000_1082;
pub const CKM_AES_KEY_WRAP: MechanismType = 0x0000_2109;

pub const CKF_TOKEN_PRESENT: u64 = 0x0000_0001;
pub const CKF_RW_SESSION: u64 = 0x0000_0002;
pub const CKF_SERIAL_SESSION: u64 = 0x0000_0004;

pub const CKU_USER: u64 = 1;

pub const CKR_OK: u64 = 0x0000_0000;
pub const CKR_GENERAL_ERROR: u64 = 0x0000_0005;
pub const CKR_ARGUMENTS_BAD: u64 = 0x0000_0007;
pub const CKR_ATTRIBUTE_SENSITIVE: u64 = 0x0000_0011;
pub const CKR_ATTRIBUTE_TYPE_INVALID: u64 = 0x0000_0012;
pub const CKR_DEVICE_REMOVED: u64 = 0x0000_0032;
pub const CKR_KEY_HANDLE_INVALID: u64 = 0x0000_0060;
pub const CKR_MECHANISM_INVALID: u64 = 0x0000_0070;
pub const CKR_OBJECT_HANDLE_INVALID: u64 = 0x0000_0082;
pub const CKR_OPERATION_ACTIVE: u64 = 0x0000_0090;
pub const CKR_OPERATION_NOT_INITIALIZED: u64 = 0x0000_0091;
pub const CKR_PIN_INCORRECT: u64 = 0x0000_00A0;
pub const CKR_SESSION_CLOSED: u64 = 0x0000_00B0;
pub const CKR_SESSION_HANDLE_INVALID: u64 = 0x0000_00B3;
pub const CKR_SLOT_ID_INVALID: u64 = 0x0000_0003;
pub const CKR_TEMPLATE_INCOMPLETE: u64 = 0x0000_00D0;
pub const CKR_TOKEN_NOT_PRESENT: u64 = 0x0000_00E0;
pub const CKR_USER_ALREADY_LOGGED_IN: u64 = 0x0000_0100;
pub const CKR_USER_NOT_LOGGED_IN: u64 = 0x0000_0101;
pub const CKR_CRYPTOKI_NOT_INITIALIZED: u64 = 0x0000_0190;
pub const CKR_CRYPTOKI_ALREADY_INITIALIZED: u64 = 0x0000_0191;
