use super::memory_client;
use crate::{
    ClientResult,
    attributes::bytes_to_ulong,
    consts::{
        CKA_CLASS, CKA_LABEL, CKA_MODULUS_BITS, CKA_VALUE, CKA_VALUE_LEN, CKM_AES_CBC,
        CKM_AES_KEY_GEN, CKM_AES_KEY_WRAP, CKM_RSA_PKCS, CKM_RSA_PKCS_KEY_PAIR_GEN,
        CKO_PRIVATE_KEY, CKO_PUBLIC_KEY, CKO_SECRET_KEY, CKR_MECHANISM_INVALID,
    },
    context::{Attribute, Mechanism},
};

#[test]
fn symmetric_encrypt_decrypt() -> ClientResult<()> {
    let (_ctx, client) = memory_client()?;
    let key = client.generate_symmetric_key(
        &Mechanism::new(CKM_AES_KEY_GEN),
        &[
            Attribute::new(CKA_LABEL, b"aes".to_vec()),
            Attribute::from_ulong(CKA_VALUE_LEN, 32)?,
        ],
    )?;
    let value = client.get_object_attributes(key, &[CKA_VALUE])?;
    assert_eq!(value[&CKA_VALUE].len(), 32);

    let mechanism = Mechanism::with_parameter(CKM_AES_CBC, [0_u8; 16]);
    let plaintext = b"attack at dawn".to_vec();
    let ciphertext = client.encrypt(&mechanism, key, &plaintext)?;
    assert_ne!(ciphertext, plaintext);
    assert_eq!(client.decrypt(&mechanism, key, &ciphertext)?, plaintext);
    Ok(())
}

#[test]
fn unsupported_mechanism_is_reported() -> ClientResult<()> {
    let (_ctx, client) = memory_client()?;
    let key = client.generate_symmetric_key(&Mechanism::new(CKM_AES_KEY_GEN), &[])?;
    let err = client
        .encrypt(&Mechanism::new(CKM_AES_KEY_WRAP), key, b"data")
        .unwrap_err();
    assert_eq!(err.native_code(), Some(CKR_MECHANISM_INVALID));
    assert!(!err.is_session_error());
    Ok(())
}

#[test]
fn key_pair_and_signature() -> ClientResult<()> {
    let (_ctx, client) = memory_client()?;
    let (public, private) = client.generate_key_pair(
        &Mechanism::new(CKM_RSA_PKCS_KEY_PAIR_GEN),
        &[Attribute::from_ulong(CKA_MODULUS_BITS, 2048)?],
        &[Attribute::new(CKA_LABEL, b"rsa".to_vec())],
    )?;
    let classes = [public, private]
        .into_iter()
        .map(|handle| {
            let attributes = client.get_object_attributes(handle, &[CKA_CLASS])?;
            bytes_to_ulong(&attributes[&CKA_CLASS])
        })
        .collect::<ClientResult<Vec<_>>>()?;
    assert_eq!(classes, vec![CKO_PUBLIC_KEY, CKO_PRIVATE_KEY]);

    let mechanism = Mechanism::new(CKM_RSA_PKCS);
    let signature = client.sign(&mechanism, private, b"message")?;
    assert_eq!(signature.len(), 32);
    assert_eq!(client.sign(&mechanism, private, b"message")?, signature);
    assert_ne!(client.sign(&mechanism, private, b"other")?, signature);
    Ok(())
}

#[test]
fn wrap_unwrap_and_derive() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    let generate = Mechanism::new(CKM_AES_KEY_GEN);
    let kek = client.generate_symmetric_key(&generate, &[])?;
    let key = client.generate_symmetric_key(&generate, &[])?;

    let wrap = Mechanism::new(CKM_AES_KEY_WRAP);
    let wrapped = client.wrap_key(&wrap, kek, key)?;
    assert_eq!(wrapped, b"mock-wrapped-key");

    let unwrapped = client.unwrap_key(
        &wrap,
        kek,
        &wrapped,
        &[Attribute::new(CKA_LABEL, b"unwrapped".to_vec())],
    )?;
    let derived = client.derive_key(
        &Mechanism::new(CKM_AES_CBC),
        unwrapped,
        &[Attribute::new(CKA_LABEL, b"derived".to_vec())],
    )?;
    assert_eq!(ctx.object_count(), 4);
    let class = client.get_object_attributes(derived, &[CKA_CLASS])?;
    assert_eq!(bytes_to_ulong(&class[&CKA_CLASS])?, CKO_SECRET_KEY);
    assert_eq!(
        client.find_object_by_label_and_class("unwrapped", CKO_SECRET_KEY)?,
        unwrapped
    );
    Ok(())
}
