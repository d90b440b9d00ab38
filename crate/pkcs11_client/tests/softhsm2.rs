//! These tests require a SoftHSM2 token and are gated behind the `softhsm2` feature.
//! To run them (replace the password and the slot with those of an initialized token):
//! ```sh
//! RUST_LOG=info \
//! HSM_USER_PASSWORD="12345678" \
//! HSM_SLOT_ID=63715018 \
//! cargo test -p cosmian_pkcs11_client --features softhsm2 -- --ignored
//! ```
#![cfg(feature = "softhsm2")]

use std::env;

use cosmian_logger::log_init;
use cosmian_pkcs11_client::{
    ClientConfig, ClientError, ClientResult, Pkcs11Client,
    attributes::{ObjectId, ulong_to_bytes},
    consts::{
        CKA_CLASS, CKA_DECRYPT, CKA_ENCRYPT, CKA_ID, CKA_LABEL, CKA_TOKEN, CKA_VALUE_LEN,
        CKM_AES_CBC, CKM_AES_KEY_GEN, CKO_SECRET_KEY,
    },
    context::{Attribute, Mechanism},
};

const SOFTHSM2_PKCS11_LIB: &str = "/usr/lib/softhsm/libsofthsm2.so";
const SLOT_ID: u64 = 0x01; // SoftHSM2 fallback slot if HSM_SLOT_ID is not set

fn client() -> ClientResult<Pkcs11Client> {
    log_init(None);
    let pin = env::var("HSM_USER_PASSWORD").map_err(|_| {
        ClientError::Default(
            "The user password for the HSM is not set. Please set the HSM_USER_PASSWORD \
             environment variable"
                .to_owned(),
        )
    })?;
    let slot_id = env::var("HSM_SLOT_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(SLOT_ID);
    Pkcs11Client::new(ClientConfig {
        module_path: env::var("SOFTHSM2_PKCS11_LIB")
            .unwrap_or_else(|_| SOFTHSM2_PKCS11_LIB.to_owned()),
        slot_id: Some(slot_id),
        pin: Some(pin),
        ..ClientConfig::default()
    })
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_softhsm2_info() -> ClientResult<()> {
    let client = client()?;
    let token = client.get_token_info()?;
    assert!(!token.label.is_empty());
    let mechanisms = client.get_mechanism_list()?;
    assert!(mechanisms.iter().any(|m| m.mechanism_type == CKM_AES_KEY_GEN));
    assert!(
        client
            .get_slot_list(true)?
            .iter()
            .any(|s| s.slot_id == client.slot_id())
    );
    client.close()
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_softhsm2_aes_lifecycle() -> ClientResult<()> {
    let client = client()?;
    let object_id = ObjectId::new(
        "ckp11-test-aes",
        uuid::Uuid::new_v4().as_bytes().to_vec(),
        CKO_SECRET_KEY,
    );
    let key = client.generate_symmetric_key(
        &Mechanism::new(CKM_AES_KEY_GEN),
        &[
            Attribute::new(CKA_CLASS, ulong_to_bytes(CKO_SECRET_KEY)?),
            Attribute::new(CKA_LABEL, object_id.label.as_bytes()),
            Attribute::new(CKA_ID, object_id.id.clone()),
            Attribute::from_ulong(CKA_VALUE_LEN, 32)?,
            Attribute::from_bool(CKA_TOKEN, true),
            Attribute::from_bool(CKA_ENCRYPT, true),
            Attribute::from_bool(CKA_DECRYPT, true),
        ],
    )?;
    assert_eq!(client.find_object(&object_id)?, key);

    let mechanism = Mechanism::with_parameter(CKM_AES_CBC, [0_u8; 16]);
    let plaintext = [0x42_u8; 32];
    let ciphertext = client.encrypt(&mechanism, key, &plaintext)?;
    assert_eq!(client.decrypt(&mechanism, key, &ciphertext)?, plaintext);

    let attributes = client.get_all_object_attributes(key)?;
    assert_eq!(attributes[&CKA_LABEL], object_id.label.as_bytes());

    client.destroy_object(key)?;
    assert!(matches!(
        client.find_object(&object_id),
        Err(ClientError::ObjectNotFound)
    ));
    client.close()
}
