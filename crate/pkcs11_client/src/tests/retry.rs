use std::{sync::Arc, thread};

use super::memory_client;
use crate::{
    ClientError, ClientResult,
    consts::{
        CKA_LABEL, CKM_AES_ECB, CKM_AES_KEY_GEN, CKR_DEVICE_REMOVED, CKR_SESSION_HANDLE_INVALID,
        CKR_TEMPLATE_INCOMPLETE, CKR_USER_NOT_LOGGED_IN,
    },
    context::{Attribute, Mechanism, Pkcs11Context},
};

fn label(value: &str) -> Vec<Attribute> {
    vec![Attribute::new(CKA_LABEL, value.as_bytes())]
}

#[test]
fn stale_session_is_discarded_and_the_call_retried() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    ctx.fail_next("CreateObject", CKR_SESSION_HANDLE_INVALID);

    client.create_object(&label("retried"))?;

    let used = ctx.sessions_used_by("CreateObject");
    assert_eq!(used.len(), 2);
    assert_ne!(used[0], used[1]);
    assert_eq!(ctx.closed_sessions(), vec![used[0]]);
    assert_eq!(ctx.object_count(), 1);
    // only the session the retry ran on was pooled
    assert_eq!(client.pool().idle_count(), 1);
    assert_eq!(client.pool().get()?, used[1]);
    Ok(())
}

#[test]
fn session_dropped_by_the_token_is_replaced() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    client.create_object(&label("warm-up"))?;
    let stale = client.pool().get()?;
    client.pool().put(stale);
    ctx.invalidate_session(stale);

    let found = client.find_objects(&label("warm-up"), 10)?;

    assert_eq!(found.len(), 1);
    let used = ctx.sessions_used_by("FindObjectsInit");
    assert_eq!(used.len(), 2);
    assert_eq!(used[0], stale);
    assert_ne!(used[1], stale);
    assert!(ctx.is_logged_in(used[1]));
    Ok(())
}

#[test]
fn a_second_session_error_surfaces_and_pools_nothing() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    ctx.fail_next("DestroyObject", CKR_DEVICE_REMOVED);
    ctx.fail_next("DestroyObject", CKR_USER_NOT_LOGGED_IN);

    let err = client.destroy_object(1).unwrap_err();

    assert_eq!(err.native_code(), Some(CKR_USER_NOT_LOGGED_IN));
    assert_eq!(ctx.sessions_used_by("DestroyObject").len(), 2);
    assert_eq!(client.pool().idle_count(), 0);
    assert_eq!(ctx.live_sessions(), 0);
    assert_eq!(ctx.closed_sessions().len(), 2);
    Ok(())
}

#[test]
fn other_errors_are_not_retried() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    ctx.fail_next("CreateObject", CKR_TEMPLATE_INCOMPLETE);

    let err = client.create_object(&label("incomplete")).unwrap_err();

    assert!(matches!(
        err,
        ClientError::NativeOperationFailed {
            operation: "CreateObject",
            code: CKR_TEMPLATE_INCOMPLETE
        }
    ));
    assert_eq!(ctx.sessions_used_by("CreateObject").len(), 1);
    assert!(ctx.closed_sessions().is_empty());
    assert_eq!(client.pool().idle_count(), 1);
    Ok(())
}

#[test]
fn stale_session_at_crypto_init_retries_init_and_run() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    let key = client.generate_symmetric_key(&Mechanism::new(CKM_AES_KEY_GEN), &[])?;
    ctx.fail_next("EncryptInit", CKR_SESSION_HANDLE_INVALID);

    let mechanism = Mechanism::new(CKM_AES_ECB);
    let ciphertext = client.encrypt(&mechanism, key, b"sixteen byte msg")?;

    let inits = ctx.sessions_used_by("EncryptInit");
    assert_eq!(inits.len(), 2);
    assert_eq!(ctx.sessions_used_by("Encrypt"), vec![inits[1]]);
    assert_eq!(client.decrypt(&mechanism, key, &ciphertext)?, b"sixteen byte msg");
    Ok(())
}

#[test]
fn concurrent_operations_share_the_pool() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    let client = Arc::new(client);
    thread::scope(|s| {
        for t in 0..8 {
            let client = client.clone();
            s.spawn(move || {
                for i in 0..10 {
                    client
                        .create_object(&label(&format!("object-{t}-{i}")))
                        .unwrap();
                }
            });
        }
    });
    assert_eq!(ctx.object_count(), 80);
    assert!(client.pool().idle_count() <= client.pool().capacity());
    assert!(ctx.live_sessions() <= client.pool().capacity());
    client.close()?;
    assert!(!ctx.is_initialized());
    assert!(ctx.get_slot_list(true).is_err());
    Ok(())
}

#[test]
fn session_in_use_during_close_is_not_pooled() -> ClientResult<()> {
    let (ctx, client) = memory_client()?;
    let handle = client.with_session(|ctx, session| {
        let handle = ctx.create_object(session, &label("in-flight"))?;
        client.close()?;
        Ok(handle)
    })?;
    assert!(handle > 0);
    assert_eq!(client.pool().idle_count(), 0);
    assert!(!ctx.is_initialized());
    assert_eq!(ctx.live_sessions(), 0);
    Ok(())
}
