use std::{fmt, str::FromStr};

use super::{decode_hex, encode_hex, ulong_to_bytes};
use crate::{
    ClientError, ClientResult,
    consts::{CKA_CLASS, CKA_ID, CKA_LABEL},
    context::Attribute,
    enums::OBJECT_CLASSES,
};

/// The durable identity of a token object: `label/hex(CKA_ID)/CKO_CLASS_NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectId {
    pub label: String,
    pub id: Vec<u8>,
    pub class: u64,
}

impl ObjectId {
    pub fn new(label: impl Into<String>, id: impl Into<Vec<u8>>, class: u64) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            class,
        }
    }

    /// The search template matching this identity.
    pub fn to_template(&self) -> ClientResult<Vec<Attribute>> {
        Ok(vec![
            Attribute::new(CKA_LABEL, self.label.as_bytes()),
            Attribute::new(CKA_ID, self.id.clone()),
            Attribute::new(CKA_CLASS, ulong_to_bytes(self.class)?),
        ])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.label,
            encode_hex(&self.id),
            OBJECT_CLASSES.format(self.class)
        )
    }
}

impl FromStr for ObjectId {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<Self> {
        let mut parts = s.splitn(3, '/');
        let (Some(label), Some(id), Some(class)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ClientError::InvalidObjectId(s.to_owned()));
        };
        Ok(Self {
            label: label.to_owned(),
            id: decode_hex(id)?,
            class: OBJECT_CLASSES.resolve(class)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectId;
    use crate::{
        ClientError,
        attributes::ulong_to_bytes,
        consts::{CKA_CLASS, CKA_ID, CKA_LABEL, CKO_PRIVATE_KEY, CKO_SECRET_KEY},
    };

    #[test]
    fn display_and_parse() {
        let id = ObjectId::new("my-key", vec![0x01, 0xAB], CKO_SECRET_KEY);
        assert_eq!(id.to_string(), "my-key/01ab/CKO_SECRET_KEY");
        assert_eq!("my-key/01ab/CKO_SECRET_KEY".parse::<ObjectId>().unwrap(), id);
        assert_eq!("my-key/01AB/secret_key".parse::<ObjectId>().unwrap(), id);

        let empty = ObjectId::new("", Vec::new(), CKO_PRIVATE_KEY);
        assert_eq!(empty.to_string(), "//CKO_PRIVATE_KEY");
        assert_eq!(empty.to_string().parse::<ObjectId>().unwrap(), empty);
    }

    #[test]
    fn unknown_class_uses_numeric_fallback() {
        let id = ObjectId::new("vendor", vec![0xFF], 0x8000_0001);
        assert_eq!(id.to_string(), "vendor/ff/0x80000001");
        assert_eq!(id.to_string().parse::<ObjectId>().unwrap(), id);
    }

    #[test]
    fn malformed_identifiers() {
        assert!(matches!(
            "only-a-label".parse::<ObjectId>(),
            Err(ClientError::InvalidObjectId(_))
        ));
        assert!(matches!(
            "label/01ab".parse::<ObjectId>(),
            Err(ClientError::InvalidObjectId(_))
        ));
        assert!(matches!(
            "label/zz/CKO_DATA".parse::<ObjectId>(),
            Err(ClientError::MalformedEncoding { kind: "hex", .. })
        ));
        // the class part keeps any further separator
        assert!(matches!(
            "label/01/CKO_DATA/extra".parse::<ObjectId>(),
            Err(ClientError::UnknownSymbol { input, .. }) if input == "CKO_DATA/extra"
        ));
    }

    #[test]
    fn search_template() {
        let template = ObjectId::new("k", vec![7], CKO_SECRET_KEY).to_template().unwrap();
        assert_eq!(template.len(), 3);
        assert_eq!((template[0].attr_type, template[0].value.as_slice()), (CKA_LABEL, &b"k"[..]));
        assert_eq!((template[1].attr_type, template[1].value.as_slice()), (CKA_ID, &[7_u8][..]));
        assert_eq!(template[2].attr_type, CKA_CLASS);
        assert_eq!(template[2].value, ulong_to_bytes(CKO_SECRET_KEY).unwrap());
    }
}
