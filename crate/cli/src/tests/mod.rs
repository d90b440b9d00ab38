use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use cosmian_logger::log_init;
use cosmian_pkcs11_client::{
    ClientConfig, Pkcs11Client, attributes::AttributeValue, context::MemoryContext,
};

use crate::{
    actions::{
        constants::ConstantsAction,
        crypto::{CryptoAction, CryptoOperation},
        info::{MechanismsAction, SlotsAction, TokenInfoAction},
        key::GenerateKeyAction,
        object::{CreateObjectAction, DestroyObjectAction, ShowObjectAction},
    },
    commands::{Cli, CliCommands},
    error::{CliError, result::CliResult},
};

mod config;

fn memory_client() -> CliResult<Pkcs11Client> {
    log_init(None);
    let config = ClientConfig {
        token_label: Some("cli-token".to_owned()),
        pin: Some("1234".to_owned()),
        ..ClientConfig::default()
    };
    Ok(Pkcs11Client::with_context(
        Arc::new(MemoryContext::new("cli-token").with_pin("1234")),
        config,
    )?)
}

#[test]
fn info_commands() -> CliResult<()> {
    let client = memory_client()?;
    let slots = SlotsAction::default().run(&client)?;
    assert_eq!(slots.len(), 1);
    assert!(slots[0].token_present);

    let token = TokenInfoAction.run(&client)?;
    assert_eq!(token.label, "cli-token");

    let mechanisms = MechanismsAction.run(&client)?;
    assert!(mechanisms.iter().any(|m| m.name == "CKM_AES_CBC"));
    Ok(())
}

#[test]
fn constants_need_no_token() -> CliResult<()> {
    let all = ConstantsAction::default().run()?;
    assert_eq!(all.len(), 6);

    let mechanisms = ConstantsAction {
        domain: Some("ckm".to_owned()),
    }
    .run()?;
    assert_eq!(mechanisms.len(), 1);
    assert_eq!(mechanisms[0].prefix, "CKM_");
    assert!(
        mechanisms[0]
            .constants
            .iter()
            .any(|c| c.name == "CKM_AES_ECB" && c.value == "0x00001081")
    );

    let unknown = ConstantsAction {
        domain: Some("colors".to_owned()),
    }
    .run();
    assert!(matches!(unknown, Err(CliError::Default(_))));
    Ok(())
}

#[test]
fn object_create_show_destroy() -> CliResult<()> {
    let client = memory_client()?;
    let created = CreateObjectAction {
        attributes: r#"{"class": "CKO_DATA", "label": "note", "key_id": "AQI=", "value": "aGVsbG8=", "token": true}"#
            .to_owned(),
    }
    .run(&client)?;
    assert_eq!(created.object_id.as_deref(), Some("note/0102/CKO_DATA"));

    let object_id = "note/0102/CKO_DATA".parse()?;
    let shown = ShowObjectAction { object_id }.run(&client)?;
    assert_eq!(shown.handle, created.handle);
    assert_eq!(shown.attributes["label"], AttributeValue::from("note"));
    assert_eq!(shown.attributes["value"], AttributeValue::from("aGVsbG8="));
    assert_eq!(shown.attributes["class"], AttributeValue::from("CKO_DATA"));

    let object_id = "note/0102/data".parse()?;
    let destroyed = DestroyObjectAction { object_id }.run(&client)?;
    assert_eq!(destroyed.destroyed, "note/0102/CKO_DATA");

    let object_id = "note/0102/CKO_DATA".parse()?;
    assert!(ShowObjectAction { object_id }.run(&client).is_err());
    Ok(())
}

#[test]
fn unknown_attribute_keys_are_rejected() -> CliResult<()> {
    let client = memory_client()?;
    let result = CreateObjectAction {
        attributes: r#"{"colour": "blue"}"#.to_owned(),
    }
    .run(&client);
    assert!(matches!(result, Err(CliError::Client(_))));

    let result = CreateObjectAction {
        attributes: "[1, 2]".to_owned(),
    }
    .run(&client);
    assert!(matches!(result, Err(CliError::Default(_))));
    Ok(())
}

#[test]
fn generate_key_then_encrypt_decrypt_sign() -> CliResult<()> {
    let client = memory_client()?;
    let created = GenerateKeyAction {
        mechanism: "aes_key_gen".to_owned(),
        attributes: r#"{"label": "cli-key", "value_len": 32, "sensitive": true}"#.to_owned(),
    }
    .run(&client)?;
    // a random identifier was assigned
    let object_id = created.object_id.unwrap();
    assert!(object_id.starts_with("cli-key/"));
    assert!(object_id.ends_with("/CKO_SECRET_KEY"));

    let plaintext: &[u8] = b"some secret data";
    let action = |data: &[u8], mechanism: &str| CryptoAction {
        key_label: "cli-key".to_owned(),
        key_class: "CKO_SECRET_KEY".to_owned(),
        mechanism: mechanism.to_owned(),
        parameter: Some(general_purpose::STANDARD.encode([0_u8; 16])),
        data: general_purpose::STANDARD.encode(data),
    };
    let encrypted = action(plaintext, "CKM_AES_CBC").run(&client, CryptoOperation::Encrypt)?;
    let ciphertext = general_purpose::STANDARD.decode(&encrypted.data)?;
    assert_ne!(ciphertext, plaintext);
    let decrypted = action(&ciphertext, "AES_CBC").run(&client, CryptoOperation::Decrypt)?;
    assert_eq!(general_purpose::STANDARD.decode(decrypted.data)?, plaintext);

    let signature = action(plaintext, "CKM_AES_ECB").run(&client, CryptoOperation::Sign)?;
    assert_eq!(general_purpose::STANDARD.decode(signature.data)?.len(), 32);

    let missing = CryptoAction {
        key_label: "nope".to_owned(),
        ..action(plaintext, "CKM_AES_CBC")
    }
    .run(&client, CryptoOperation::Encrypt);
    assert!(missing.is_err());
    Ok(())
}

#[test]
fn command_line_parsing() {
    let cli = Cli::try_parse_from([
        "ckp11",
        "--module-path",
        "/usr/lib/softhsm/libsofthsm2.so",
        "--token-label",
        "kms",
        "object",
        "show",
        "my-key/0102/CKO_SECRET_KEY",
    ])
    .unwrap();
    assert_eq!(
        cli.connection.module_path.as_deref(),
        Some("/usr/lib/softhsm/libsofthsm2.so")
    );
    assert!(matches!(cli.command, CliCommands::Object(_)));

    let cli = Cli::try_parse_from(["ckp11", "slots", "--all", "--slot-id", "3"]).unwrap();
    assert_eq!(cli.connection.slot_id, Some(3));
    assert!(matches!(cli.command, CliCommands::Slots(SlotsAction { all: true })));

    assert!(Cli::try_parse_from(["ckp11", "object", "show", "not-an-object-id"]).is_err());
    assert!(Cli::try_parse_from(["ckp11", "encrypt", "--key-label", "k"]).is_err());
}
