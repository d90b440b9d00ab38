//! Symbolic names for the PKCS#11 constant families.
//!
//! A [`Pkcs11Enum`] resolves human-readable constant names to the numeric identifiers used on
//! the native interface and formats identifiers back to their canonical names.
//! Resolution is case-insensitive and tolerates a missing family prefix, so `CKM_AES_ECB`,
//! `AES_ECB` and `aes_ecb` all resolve to the same mechanism.
//! Numeric literals (`4225`, `0x00001081`) are accepted as well so that the fallback output of
//! [`Pkcs11Enum::format`] always resolves back.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ClientError, ClientResult};

mod tables;

pub struct Pkcs11Enum {
    prefix: &'static str,
    domain: &'static str,
    entries: &'static [(&'static str, u64)],
    by_name: HashMap<String, u64>,
    by_id: HashMap<u64, &'static str>,
}

impl Pkcs11Enum {
    fn new(
        prefix: &'static str,
        domain: &'static str,
        entries: &'static [(&'static str, u64)],
    ) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        for (name, id) in entries {
            by_name.insert(name.to_ascii_uppercase(), *id);
            // aliases share an identifier: the first name listed is the canonical one
            by_id.entry(*id).or_insert(*name);
        }
        Self {
            prefix,
            domain,
            entries,
            by_name,
            by_id,
        }
    }

    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[must_use]
    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    /// Resolve a constant name, with or without prefix and in any case, to its identifier.
    pub fn resolve(&self, name: &str) -> ClientResult<u64> {
        let trimmed = name.trim();
        let upper = trimmed.to_ascii_uppercase();
        if let Some(id) = self.by_name.get(&upper) {
            return Ok(*id);
        }
        if let Some(id) = self.by_name.get(&format!("{}{upper}", self.prefix)) {
            return Ok(*id);
        }
        parse_numeric(trimmed).ok_or_else(|| ClientError::UnknownSymbol {
            domain: self.domain,
            input: name.to_owned(),
        })
    }

    /// The canonical prefixed name of `id`, or `0x%08X` when the identifier is not listed.
    #[must_use]
    pub fn format(&self, id: u64) -> String {
        self.by_id
            .get(&id)
            .map_or_else(|| format!("0x{id:08X}"), |name| (*name).to_owned())
    }

    /// The canonical name of `id` if it is listed.
    #[must_use]
    pub fn name(&self, id: u64) -> Option<&'static str> {
        self.by_id.get(&id).copied()
    }

    /// All `(name, id)` pairs, aliases included, in table order.
    pub fn names(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_numeric(value: &str) -> Option<u64> {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return u64::from_str_radix(&hex.replace('_', ""), 16).ok();
    }
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

lazy_static! {
    pub static ref MECHANISMS: Pkcs11Enum =
        Pkcs11Enum::new("CKM_", "mechanism", tables::MECHANISMS);
    pub static ref KEY_TYPES: Pkcs11Enum = Pkcs11Enum::new("CKK_", "key type", tables::KEY_TYPES);
    pub static ref OBJECT_CLASSES: Pkcs11Enum =
        Pkcs11Enum::new("CKO_", "object class", tables::OBJECT_CLASSES);
    pub static ref CERTIFICATE_TYPES: Pkcs11Enum =
        Pkcs11Enum::new("CKC_", "certificate type", tables::CERTIFICATE_TYPES);
    pub static ref ATTRIBUTE_TYPES: Pkcs11Enum =
        Pkcs11Enum::new("CKA_", "attribute type", tables::ATTRIBUTE_TYPES);
    pub static ref RETURN_VALUES: Pkcs11Enum =
        Pkcs11Enum::new("CKR_", "return value", tables::RETURN_VALUES);
}

/// Every constant family, in a stable order.
#[must_use]
pub fn all_enums() -> [&'static Pkcs11Enum; 6] {
    [
        &*MECHANISMS,
        &*KEY_TYPES,
        &*OBJECT_CLASSES,
        &*CERTIFICATE_TYPES,
        &*ATTRIBUTE_TYPES,
        &*RETURN_VALUES,
    ]
}

/// Look up a constant family by its domain (`"mechanism"`), its prefix (`"CKM_"`, `"ckm"`)
/// or its snake-cased domain (`"key_type"`).
#[must_use]
pub fn find_enum(selector: &str) -> Option<&'static Pkcs11Enum> {
    let wanted = selector.trim().to_ascii_lowercase().replace('_', " ");
    all_enums().into_iter().find(|e| {
        e.domain == wanted || e.prefix.trim_end_matches('_').eq_ignore_ascii_case(wanted.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::{KEY_TYPES, MECHANISMS, OBJECT_CLASSES, RETURN_VALUES, find_enum};
    use crate::{
        ClientError,
        consts::{CKK_AES, CKM_AES_ECB, CKO_SECRET_KEY, CKR_SESSION_CLOSED},
    };

    #[test]
    fn resolve_accepts_prefixed_unprefixed_and_lowercase() {
        assert_eq!(MECHANISMS.resolve("CKM_AES_ECB").unwrap(), CKM_AES_ECB);
        assert_eq!(MECHANISMS.resolve("AES_ECB").unwrap(), CKM_AES_ECB);
        assert_eq!(MECHANISMS.resolve("aes_ecb").unwrap(), CKM_AES_ECB);
        assert_eq!(MECHANISMS.resolve(" ckm_aes_ecb ").unwrap(), CKM_AES_ECB);
        assert_eq!(OBJECT_CLASSES.resolve("secret_key").unwrap(), CKO_SECRET_KEY);
        assert_eq!(KEY_TYPES.resolve("CKK_AES").unwrap(), CKK_AES);
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let err = MECHANISMS.resolve("NOT_A_MECH").unwrap_err();
        match err {
            ClientError::UnknownSymbol { domain, input } => {
                assert_eq!(domain, "mechanism");
                assert_eq!(input, "NOT_A_MECH");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            MECHANISMS.resolve("NOT_A_MECH").unwrap_err().to_string(),
            "unknown mechanism: \"NOT_A_MECH\""
        );
        assert!(OBJECT_CLASSES.resolve("").is_err());
    }

    #[test]
    fn format_round_trips_known_names() {
        for enumeration in super::all_enums() {
            for (name, id) in enumeration.names() {
                let canonical = enumeration.format(id);
                assert_eq!(enumeration.resolve(&canonical).unwrap(), id);
                assert_eq!(enumeration.resolve(name).unwrap(), id);
            }
        }
        assert_eq!(MECHANISMS.format(MECHANISMS.resolve("aes_cbc").unwrap()), "CKM_AES_CBC");
    }

    #[test]
    fn aliases_format_to_the_first_name() {
        assert_eq!(KEY_TYPES.format(3), "CKK_EC");
        assert_eq!(KEY_TYPES.resolve("ECDSA").unwrap(), 3);
        let cast = MECHANISMS.resolve("CKM_CAST128_ECB").unwrap();
        assert_eq!(MECHANISMS.format(cast), "CKM_CAST5_ECB");
    }

    #[test]
    fn unknown_ids_use_a_stable_fallback() {
        assert_eq!(MECHANISMS.format(0x8000_1234), "0x80001234");
        assert_eq!(OBJECT_CLASSES.format(42), "0x0000002A");
        assert_eq!(MECHANISMS.resolve("0x80001234").unwrap(), 0x8000_1234);
        assert_eq!(OBJECT_CLASSES.resolve("42").unwrap(), 42);
        assert_eq!(RETURN_VALUES.format(CKR_SESSION_CLOSED), "CKR_SESSION_CLOSED");
    }

    #[test]
    fn enum_lookup_by_selector() {
        assert_eq!(find_enum("mechanism").unwrap().prefix(), "CKM_");
        assert_eq!(find_enum("key_type").unwrap().prefix(), "CKK_");
        assert_eq!(find_enum("CKO_").unwrap().domain(), "object class");
        assert_eq!(find_enum("cka").unwrap().domain(), "attribute type");
        assert!(find_enum("colour").is_none());
    }
}
