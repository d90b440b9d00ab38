use std::mem::size_of;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use pkcs11_sys::CK_ULONG;

use crate::{ClientError, ClientResult};

/// Width in bytes of a `CK_ULONG` on this platform.
pub const CK_ULONG_SIZE: usize = size_of::<CK_ULONG>();

#[must_use]
pub fn bool_to_bytes(value: bool) -> Vec<u8> {
    vec![u8::from(value)]
}

/// A `CK_BBOOL` is exactly one byte.
pub fn bytes_to_bool(bytes: &[u8]) -> ClientResult<bool> {
    match bytes {
        [b] => Ok(*b != 0),
        _ => Err(ClientError::malformed(
            "bool",
            format!("expected 1 byte, got {}", bytes.len()),
        )),
    }
}

/// Little-endian encoding on the platform `CK_ULONG` width.
///
/// Fails when `value` does not fit in a 32-bit `CK_ULONG`.
pub fn ulong_to_bytes(value: u64) -> ClientResult<Vec<u8>> {
    if CK_ULONG_SIZE < size_of::<u64>() {
        u32::try_from(value)?;
    }
    Ok(value.to_le_bytes()[..CK_ULONG_SIZE].to_vec())
}

/// Accepts both 4-byte and 8-byte little-endian values, whatever the platform width.
pub fn bytes_to_ulong(bytes: &[u8]) -> ClientResult<u64> {
    if let Ok(b) = <[u8; 8]>::try_from(bytes) {
        return Ok(u64::from_le_bytes(b));
    }
    if let Ok(b) = <[u8; 4]>::try_from(bytes) {
        return Ok(u64::from(u32::from_le_bytes(b)));
    }
    Err(ClientError::malformed(
        "ulong",
        format!("expected 4 or 8 bytes, got {}", bytes.len()),
    ))
}

#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_base64(value: &str) -> ClientResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| ClientError::malformed("base64", e))
}

#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn decode_hex(value: &str) -> ClientResult<Vec<u8>> {
    hex::decode(value).map_err(|e| ClientError::malformed("hex", e))
}

#[cfg(test)]
mod tests {
    use super::{
        CK_ULONG_SIZE, bool_to_bytes, bytes_to_bool, bytes_to_ulong, decode_base64, decode_hex,
        encode_base64, encode_hex, ulong_to_bytes,
    };
    use crate::ClientError;

    #[test]
    fn bool_encoding() {
        assert_eq!(bool_to_bytes(true), vec![1]);
        assert_eq!(bool_to_bytes(false), vec![0]);
        assert!(bytes_to_bool(&[1]).unwrap());
        assert!(bytes_to_bool(&[0xFF]).unwrap());
        assert!(!bytes_to_bool(&[0]).unwrap());
        assert!(matches!(
            bytes_to_bool(&[]),
            Err(ClientError::MalformedEncoding { kind: "bool", .. })
        ));
        assert!(bytes_to_bool(&[1, 0]).is_err());
    }

    #[test]
    fn ulong_accepts_both_widths() {
        assert_eq!(bytes_to_ulong(&[0x20, 0, 0, 0]).unwrap(), 32);
        assert_eq!(bytes_to_ulong(&[0x20, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 32);
        assert_eq!(bytes_to_ulong(&[0x81, 0x10, 0, 0]).unwrap(), 0x1081);
        assert_eq!(ulong_to_bytes(0x1081).unwrap().len(), CK_ULONG_SIZE);
        assert_eq!(bytes_to_ulong(&ulong_to_bytes(0x1081).unwrap()).unwrap(), 0x1081);
    }

    #[test]
    fn wide_ulong_values() {
        let wide = 1_u64 << 40;
        if CK_ULONG_SIZE == 8 {
            let bytes = ulong_to_bytes(wide).unwrap();
            assert_eq!(bytes, [0, 0, 0, 0, 0, 1, 0, 0]);
            assert_eq!(bytes_to_ulong(&bytes).unwrap(), wide);
        } else {
            assert!(matches!(ulong_to_bytes(wide), Err(ClientError::TryFromInt(_))));
        }
        for value in [0, u64::from(u32::MAX)] {
            assert_eq!(bytes_to_ulong(&ulong_to_bytes(value).unwrap()).unwrap(), value);
        }
    }

    #[test]
    fn ulong_rejects_other_widths() {
        for len in [0_usize, 1, 2, 3, 5, 7, 9] {
            let err = bytes_to_ulong(&vec![0; len]).unwrap_err();
            assert!(matches!(err, ClientError::MalformedEncoding { kind: "ulong", .. }));
        }
    }

    #[test]
    fn base64_and_hex() {
        assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), b"hello");
        assert!(decode_base64("not base64!").is_err());

        assert_eq!(encode_hex(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
        assert_eq!(decode_hex("DEADbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(matches!(
            decode_hex("abc"),
            Err(ClientError::MalformedEncoding { kind: "hex", .. })
        ));
        assert!(decode_hex("zz").is_err());
        assert!(decode_hex("").unwrap().is_empty());
    }
}
