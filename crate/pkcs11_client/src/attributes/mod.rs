//! Marshaling between the token's typed attribute values and their external representation.
//!
//! Every attribute known to the client is described by an [`AttrDef`] in the
//! [`OBJECT_ATTRIBUTES`] catalog. The definition fixes the value encoding ([`AttrKind`]) and the
//! policy flags that drive reads and update planning.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::{
    ClientError, ClientResult,
    context::{Attribute, AttributeType},
    enums::{CERTIFICATE_TYPES, KEY_TYPES, MECHANISMS, OBJECT_CLASSES, Pkcs11Enum},
};

mod catalog;
mod codec;
mod object_id;
mod update;

pub use catalog::{OBJECT_ATTRIBUTES, attr_def_by_key, attr_def_by_type, build_template};
pub use codec::{
    CK_ULONG_SIZE, bool_to_bytes, bytes_to_bool, bytes_to_ulong, decode_base64, decode_hex,
    encode_base64, encode_hex, ulong_to_bytes,
};
pub use object_id::ObjectId;
pub use update::{UpdatePlan, plan_update};

/// How the native bytes of an attribute map to an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AttrKind {
    /// `CK_BBOOL`, a single byte
    Bool,
    /// UTF-8 text
    String,
    /// opaque bytes, base64 externally
    Bytes,
    /// big-endian big integer, lowercase hex externally
    Hex,
    /// `CK_ULONG`, a number or a symbolic name externally
    Ulong,
}

/// The constant family an enum-typed ulong attribute draws its names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum EnumKind {
    ObjectClass,
    KeyType,
    CertificateType,
    Mechanism,
}

impl EnumKind {
    #[must_use]
    pub fn table(self) -> &'static Pkcs11Enum {
        match self {
            Self::ObjectClass => &*OBJECT_CLASSES,
            Self::KeyType => &*KEY_TYPES,
            Self::CertificateType => &*CERTIFICATE_TYPES,
            Self::Mechanism => &*MECHANISMS,
        }
    }
}

/// External attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(u64),
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrDef {
    pub attr_type: AttributeType,
    pub key: &'static str,
    pub kind: AttrKind,
    /// changing it requires a new object
    pub immutable: bool,
    /// never read back from the token
    pub sensitive: bool,
    /// set by the token, never written by an update
    pub computed: bool,
    /// changing it requires a new object
    pub force_new: bool,
    pub enum_kind: Option<EnumKind>,
}

impl AttrDef {
    #[must_use]
    pub const fn new(attr_type: AttributeType, key: &'static str, kind: AttrKind) -> Self {
        Self {
            attr_type,
            key,
            kind,
            immutable: false,
            sensitive: false,
            computed: false,
            force_new: false,
            enum_kind: None,
        }
    }

    #[must_use]
    pub const fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    #[must_use]
    pub const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    #[must_use]
    pub const fn with_enum(mut self, enum_kind: EnumKind) -> Self {
        self.enum_kind = Some(enum_kind);
        self
    }

    /// Whether a change to this attribute can only be applied by recreating the object.
    #[must_use]
    pub const fn requires_replacement(&self) -> bool {
        self.immutable || self.force_new
    }

    /// Encode an external value to the native bytes of this attribute.
    pub fn encode(&self, value: &AttributeValue) -> ClientResult<Vec<u8>> {
        match (self.kind, value) {
            (AttrKind::Bool, AttributeValue::Bool(b)) => Ok(bool_to_bytes(*b)),
            (AttrKind::String, AttributeValue::Text(s)) => Ok(s.as_bytes().to_vec()),
            (AttrKind::Bytes, AttributeValue::Text(s)) => decode_base64(s),
            (AttrKind::Hex, AttributeValue::Text(s)) => decode_hex(s),
            (AttrKind::Ulong, AttributeValue::Number(n)) => ulong_to_bytes(*n),
            (AttrKind::Ulong, AttributeValue::Text(s)) => {
                let n = match self.enum_kind {
                    Some(enum_kind) => enum_kind.table().resolve(s)?,
                    None => s.trim().parse().map_err(|e| {
                        ClientError::malformed("ulong", format!("{}: {e}", self.key))
                    })?,
                };
                ulong_to_bytes(n)
            }
            (kind, other) => Err(ClientError::malformed(
                kind.into(),
                format!("{}: unexpected value {other:?}", self.key),
            )),
        }
    }

    /// Decode the native bytes of this attribute to its external value.
    pub fn decode(&self, bytes: &[u8]) -> ClientResult<AttributeValue> {
        Ok(match self.kind {
            AttrKind::Bool => AttributeValue::Bool(bytes_to_bool(bytes)?),
            AttrKind::String => AttributeValue::Text(
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| ClientError::malformed("utf-8", format!("{}: {e}", self.key)))?,
            ),
            AttrKind::Bytes => AttributeValue::Text(encode_base64(bytes)),
            AttrKind::Hex => AttributeValue::Text(encode_hex(bytes)),
            AttrKind::Ulong => {
                let n = bytes_to_ulong(bytes)?;
                match self.enum_kind {
                    Some(enum_kind) => AttributeValue::Text(enum_kind.table().format(n)),
                    None => AttributeValue::Number(n),
                }
            }
        })
    }

    /// Build the native attribute for an external value.
    pub fn attribute(&self, value: &AttributeValue) -> ClientResult<Attribute> {
        Ok(Attribute::new(self.attr_type, self.encode(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::{AttrDef, AttrKind, AttributeValue, EnumKind, attr_def_by_key, ulong_to_bytes};
    use crate::{
        ClientError,
        consts::{CKA_CLASS, CKO_SECRET_KEY},
    };

    #[test]
    fn bool_and_string_kinds() {
        let token = attr_def_by_key("token").unwrap();
        assert_eq!(token.encode(&AttributeValue::Bool(true)).unwrap(), vec![1]);
        assert_eq!(token.decode(&[0]).unwrap(), AttributeValue::Bool(false));
        assert!(token.encode(&AttributeValue::from("true")).is_err());

        let label = attr_def_by_key("label").unwrap();
        assert_eq!(label.encode(&"my key".into()).unwrap(), b"my key");
        assert_eq!(label.decode(b"my key").unwrap(), AttributeValue::from("my key"));
        assert!(matches!(
            label.decode(&[0xFF, 0xFE]),
            Err(ClientError::MalformedEncoding { kind: "utf-8", .. })
        ));
    }

    #[test]
    fn values_survive_a_native_round_trip() {
        let label = attr_def_by_key("label").unwrap();
        let value = attr_def_by_key("value").unwrap();
        let modulus = attr_def_by_key("modulus").unwrap();
        let value_len = attr_def_by_key("value_len").unwrap();
        let token = attr_def_by_key("token").unwrap();

        // a 2048-bit big integer
        let big: Vec<u8> = (0..=255_u8).collect();
        let big_hex = super::encode_hex(&big);
        assert_eq!(big_hex.len(), 512);

        let cases: Vec<(&AttrDef, AttributeValue)> = vec![
            (label, AttributeValue::from("clé de chiffrement ✓")),
            (label, AttributeValue::from("")),
            (value, AttributeValue::from("")),
            (value, AttributeValue::from("aGVsbG8=")),
            (modulus, AttributeValue::from(big_hex.as_str())),
            (value_len, AttributeValue::Number(0)),
            (value_len, AttributeValue::Number(u64::from(u32::MAX))),
            (token, AttributeValue::Bool(true)),
        ];
        for (def, external) in cases {
            let native = def.encode(&external).unwrap();
            assert_eq!(def.decode(&native).unwrap(), external, "{}", def.key);
        }
        assert!(value.encode(&"".into()).unwrap().is_empty());
        assert_eq!(modulus.encode(&big_hex.as_str().into()).unwrap(), big);

        // both native widths decode, whatever the platform width
        for native in [vec![0xFF, 0xFF, 0xFF, 0xFF], vec![0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]] {
            assert_eq!(
                value_len.decode(&native).unwrap(),
                AttributeValue::Number(u64::from(u32::MAX))
            );
        }
        assert_eq!(
            value_len.decode(&[0, 0, 0, 0, 0, 1, 0, 0]).unwrap(),
            AttributeValue::Number(1 << 40)
        );
        for len in [3_usize, 9] {
            assert!(matches!(
                value_len.decode(&vec![0; len]),
                Err(ClientError::MalformedEncoding { kind: "ulong", .. })
            ));
        }
        for invalid in ["xyz", "abc", "0x10"] {
            assert!(matches!(
                modulus.encode(&invalid.into()),
                Err(ClientError::MalformedEncoding { kind: "hex", .. })
            ));
        }
    }

    #[test]
    fn bytes_and_hex_kinds() {
        let value = attr_def_by_key("value").unwrap();
        assert_eq!(value.decode(&[1, 2, 3]).unwrap(), AttributeValue::from("AQID"));
        assert_eq!(value.encode(&"AQID".into()).unwrap(), vec![1, 2, 3]);
        assert!(value.encode(&"%%%".into()).is_err());

        let modulus = attr_def_by_key("modulus").unwrap();
        assert_eq!(modulus.decode(&[0x00, 0xC3, 0x5F]).unwrap(), AttributeValue::from("00c35f"));
        assert_eq!(modulus.encode(&"00C35F".into()).unwrap(), vec![0x00, 0xC3, 0x5F]);
        assert!(modulus.encode(&AttributeValue::Number(3)).is_err());
    }

    #[test]
    fn ulong_kinds_with_and_without_enum() {
        let class = attr_def_by_key("class").unwrap();
        assert_eq!(class.attr_type, CKA_CLASS);
        assert_eq!(class.enum_kind, Some(EnumKind::ObjectClass));
        assert_eq!(
            class.decode(&ulong_to_bytes(CKO_SECRET_KEY).unwrap()).unwrap(),
            AttributeValue::from("CKO_SECRET_KEY")
        );
        assert_eq!(
            class.encode(&"secret_key".into()).unwrap(),
            ulong_to_bytes(CKO_SECRET_KEY).unwrap()
        );
        assert_eq!(
            class.encode(&AttributeValue::Number(4)).unwrap(),
            ulong_to_bytes(CKO_SECRET_KEY).unwrap()
        );
        assert!(matches!(
            class.encode(&"CKO_NOTHING".into()),
            Err(ClientError::UnknownSymbol { .. })
        ));
        // an unlisted class still decodes, to its numeric fallback
        assert_eq!(
            class.decode(&ulong_to_bytes(0x8000_0001).unwrap()).unwrap(),
            AttributeValue::from("0x80000001")
        );

        let value_len = attr_def_by_key("value_len").unwrap();
        assert_eq!(value_len.decode(&[32, 0, 0, 0]).unwrap(), AttributeValue::Number(32));
        assert_eq!(value_len.encode(&"32".into()).unwrap(), ulong_to_bytes(32).unwrap());
        assert!(value_len.encode(&"thirty-two".into()).is_err());
        assert!(value_len.decode(&[1, 2, 3]).is_err());
    }

    #[test]
    fn builder_flags() {
        let def = AttrDef::new(0x42, "custom", AttrKind::Bytes)
            .sensitive()
            .force_new();
        assert!(def.sensitive && def.force_new && def.requires_replacement());
        assert!(!def.immutable && !def.computed);
        assert_eq!(AttrKind::Hex.to_string(), "hex");
    }

    #[test]
    fn untagged_serde_representation() {
        let values: Vec<AttributeValue> =
            serde_json::from_str(r#"[true, 42, "CKO_DATA"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                AttributeValue::Bool(true),
                AttributeValue::Number(42),
                AttributeValue::from("CKO_DATA")
            ]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[true,42,"CKO_DATA"]"#);
    }
}
