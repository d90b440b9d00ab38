use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{AttrDef, AttrKind, AttributeValue, EnumKind};
use crate::{
    ClientError, ClientResult,
    context::{Attribute, AttributeType},
};

/// Every object attribute the client knows how to marshal.
pub static OBJECT_ATTRIBUTES: &[AttrDef] = &[
    AttrDef::new(0x0000_0000, "class", AttrKind::Ulong)
        .immutable()
        .computed()
        .with_enum(EnumKind::ObjectClass),
    AttrDef::new(0x0000_0001, "token", AttrKind::Bool).immutable().force_new(),
    AttrDef::new(0x0000_0002, "private_flag", AttrKind::Bool).immutable().force_new(),
    AttrDef::new(0x0000_0003, "label", AttrKind::String),
    AttrDef::new(0x0000_0010, "application", AttrKind::String),
    AttrDef::new(0x0000_0011, "value", AttrKind::Bytes).sensitive(),
    AttrDef::new(0x0000_0012, "object_id", AttrKind::Bytes),
    AttrDef::new(0x0000_0080, "certificate_type", AttrKind::Ulong)
        .with_enum(EnumKind::CertificateType),
    AttrDef::new(0x0000_0081, "issuer", AttrKind::Bytes),
    AttrDef::new(0x0000_0082, "serial_number", AttrKind::Bytes),
    AttrDef::new(0x0000_0083, "ac_issuer", AttrKind::Bytes),
    AttrDef::new(0x0000_0084, "owner", AttrKind::Bytes),
    AttrDef::new(0x0000_0085, "attr_types", AttrKind::Bytes),
    AttrDef::new(0x0000_0086, "trusted", AttrKind::Bool),
    AttrDef::new(0x0000_0087, "certificate_category", AttrKind::Ulong),
    AttrDef::new(0x0000_0088, "java_midp_security_domain", AttrKind::Ulong),
    AttrDef::new(0x0000_0089, "url", AttrKind::String),
    AttrDef::new(0x0000_008A, "hash_of_subject_public_key", AttrKind::Bytes),
    AttrDef::new(0x0000_008B, "hash_of_issuer_public_key", AttrKind::Bytes),
    AttrDef::new(0x0000_008C, "name_hash_algorithm", AttrKind::Ulong),
    AttrDef::new(0x0000_0090, "check_value", AttrKind::Bytes),
    AttrDef::new(0x0000_0100, "key_type", AttrKind::Ulong)
        .immutable()
        .computed()
        .with_enum(EnumKind::KeyType),
    AttrDef::new(0x0000_0101, "subject", AttrKind::Bytes),
    AttrDef::new(0x0000_0102, "key_id", AttrKind::Bytes),
    AttrDef::new(0x0000_0103, "sensitive", AttrKind::Bool),
    AttrDef::new(0x0000_0104, "encrypt", AttrKind::Bool),
    AttrDef::new(0x0000_0105, "decrypt", AttrKind::Bool),
    AttrDef::new(0x0000_0106, "wrap", AttrKind::Bool),
    AttrDef::new(0x0000_0107, "unwrap", AttrKind::Bool),
    AttrDef::new(0x0000_0108, "sign", AttrKind::Bool),
    AttrDef::new(0x0000_0109, "sign_recover", AttrKind::Bool),
    AttrDef::new(0x0000_010A, "verify", AttrKind::Bool),
    AttrDef::new(0x0000_010B, "verify_recover", AttrKind::Bool),
    AttrDef::new(0x0000_010C, "derive", AttrKind::Bool),
    AttrDef::new(0x0000_0110, "start_date", AttrKind::Bytes),
    AttrDef::new(0x0000_0111, "end_date", AttrKind::Bytes),
    AttrDef::new(0x0000_0120, "modulus", AttrKind::Hex),
    AttrDef::new(0x0000_0121, "modulus_bits", AttrKind::Ulong),
    AttrDef::new(0x0000_0122, "public_exponent", AttrKind::Hex),
    AttrDef::new(0x0000_0123, "private_exponent", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0124, "prime_1", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0125, "prime_2", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0126, "exponent_1", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0127, "exponent_2", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0128, "coefficient", AttrKind::Hex).sensitive(),
    AttrDef::new(0x0000_0129, "public_key_info", AttrKind::Bytes),
    AttrDef::new(0x0000_0130, "prime", AttrKind::Hex),
    AttrDef::new(0x0000_0131, "subprime", AttrKind::Hex),
    AttrDef::new(0x0000_0132, "base", AttrKind::Hex),
    AttrDef::new(0x0000_0133, "prime_bits", AttrKind::Ulong),
    AttrDef::new(0x0000_0134, "subprime_bits", AttrKind::Ulong),
    AttrDef::new(0x0000_0160, "value_bits", AttrKind::Ulong),
    AttrDef::new(0x0000_0161, "value_len", AttrKind::Ulong),
    AttrDef::new(0x0000_0162, "extractable", AttrKind::Bool),
    AttrDef::new(0x0000_0163, "local", AttrKind::Bool).computed(),
    AttrDef::new(0x0000_0164, "never_extractable", AttrKind::Bool).computed(),
    AttrDef::new(0x0000_0165, "always_sensitive", AttrKind::Bool).computed(),
    AttrDef::new(0x0000_0166, "key_gen_mechanism", AttrKind::Ulong)
        .computed()
        .with_enum(EnumKind::Mechanism),
    AttrDef::new(0x0000_0170, "modifiable", AttrKind::Bool),
    AttrDef::new(0x0000_0171, "copyable", AttrKind::Bool),
    AttrDef::new(0x0000_0172, "destroyable", AttrKind::Bool),
    AttrDef::new(0x0000_0180, "ec_params", AttrKind::Bytes),
    AttrDef::new(0x0000_0181, "ec_point", AttrKind::Bytes),
    AttrDef::new(0x0000_0202, "always_authenticate", AttrKind::Bool),
    AttrDef::new(0x0000_0210, "wrap_with_trusted", AttrKind::Bool),
    AttrDef::new(0x0000_0220, "otp_format", AttrKind::Ulong),
    AttrDef::new(0x0000_0221, "otp_length", AttrKind::Ulong),
    AttrDef::new(0x0000_0222, "otp_time_interval", AttrKind::Ulong),
    AttrDef::new(0x0000_0223, "otp_user_friendly_mode", AttrKind::Bool),
    AttrDef::new(0x0000_0224, "otp_challenge_requirement", AttrKind::Ulong),
    AttrDef::new(0x0000_0225, "otp_time_requirement", AttrKind::Ulong),
    AttrDef::new(0x0000_0226, "otp_counter_requirement", AttrKind::Ulong),
    AttrDef::new(0x0000_0227, "otp_pin_requirement", AttrKind::Ulong),
    AttrDef::new(0x0000_022E, "otp_counter", AttrKind::Bytes),
    AttrDef::new(0x0000_022F, "otp_time", AttrKind::Bytes),
    AttrDef::new(0x0000_022A, "otp_user_identifier", AttrKind::String),
    AttrDef::new(0x0000_022B, "otp_service_identifier", AttrKind::String),
    AttrDef::new(0x0000_022C, "otp_service_logo", AttrKind::Bytes),
    AttrDef::new(0x0000_022D, "otp_service_logo_type", AttrKind::String),
    AttrDef::new(0x0000_0250, "gostr3410_params", AttrKind::Bytes),
    AttrDef::new(0x0000_0251, "gostr3411_params", AttrKind::Bytes),
    AttrDef::new(0x0000_0252, "gost28147_params", AttrKind::Bytes),
    AttrDef::new(0x0000_0300, "hw_feature_type", AttrKind::Ulong),
    AttrDef::new(0x0000_0301, "reset_on_init", AttrKind::Bool),
    AttrDef::new(0x0000_0302, "has_reset", AttrKind::Bool).computed(),
    AttrDef::new(0x0000_0400, "pixel_x", AttrKind::Ulong),
    AttrDef::new(0x0000_0401, "pixel_y", AttrKind::Ulong),
    AttrDef::new(0x0000_0402, "resolution", AttrKind::Ulong),
    AttrDef::new(0x0000_0403, "char_rows", AttrKind::Ulong),
    AttrDef::new(0x0000_0404, "char_columns", AttrKind::Ulong),
    AttrDef::new(0x0000_0405, "color", AttrKind::Bool),
    AttrDef::new(0x0000_0406, "bits_per_pixel", AttrKind::Ulong),
    AttrDef::new(0x0000_0480, "char_sets", AttrKind::Bytes),
    AttrDef::new(0x0000_0481, "encoding_methods", AttrKind::Bytes),
    AttrDef::new(0x0000_0482, "mime_types", AttrKind::Bytes),
    AttrDef::new(0x0000_0500, "mechanism_type", AttrKind::Ulong).with_enum(EnumKind::Mechanism),
    AttrDef::new(0x0000_0501, "required_cms_attributes", AttrKind::Bytes),
    AttrDef::new(0x0000_0502, "default_cms_attributes", AttrKind::Bytes),
    AttrDef::new(0x0000_0503, "supported_cms_attributes", AttrKind::Bytes),
];

lazy_static! {
    static ref BY_TYPE: HashMap<AttributeType, &'static AttrDef> =
        OBJECT_ATTRIBUTES.iter().map(|d| (d.attr_type, d)).collect();
    static ref BY_KEY: HashMap<&'static str, &'static AttrDef> =
        OBJECT_ATTRIBUTES.iter().map(|d| (d.key, d)).collect();
}

#[must_use]
pub fn attr_def_by_type(attr_type: AttributeType) -> Option<&'static AttrDef> {
    BY_TYPE.get(&attr_type).copied()
}

#[must_use]
pub fn attr_def_by_key(key: &str) -> Option<&'static AttrDef> {
    BY_KEY.get(key).copied()
}

/// Encode a set of `key -> value` pairs, keyed by catalog key, to a native template.
pub fn build_template<'a>(
    values: impl IntoIterator<Item = (&'a str, &'a AttributeValue)>,
) -> ClientResult<Vec<Attribute>> {
    values
        .into_iter()
        .map(|(key, value)| {
            attr_def_by_key(key)
                .ok_or_else(|| ClientError::UnknownAttribute(key.to_owned()))?
                .attribute(value)
        })
        .collect()
}
