use std::{env, io::Write};

use serial_test::serial;
use tempfile::NamedTempFile;

use crate::{
    config::{ConnectionArgs, from_toml, load},
    error::{CliError, result::CliResult},
};

const CONF: &str = r#"
module_path = "/from/file.so"
token_label = "file-token"
pin = "file-pin"
pool_size = 8
"#;

fn conf_file(content: &str) -> CliResult<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    // SAFETY: the tests touching the environment are serialized
    unsafe {
        for (var, value) in vars {
            env::set_var(var, value);
        }
    }
    let result = f();
    unsafe {
        for (var, _) in vars {
            env::remove_var(var);
        }
    }
    result
}

#[test]
#[serial]
fn flags_override_file_which_overrides_env() -> CliResult<()> {
    let file = conf_file(CONF)?;
    let args = ConnectionArgs {
        token_label: Some("flag-token".to_owned()),
        ..ConnectionArgs::default()
    };
    let config = with_env(
        &[
            ("PKCS11_MODULE_PATH", "/from/env.so"),
            ("PKCS11_PIN", "env-pin"),
            ("PKCS11_SO_PIN", "env-so-pin"),
        ],
        || load(Some(file.path()), &args),
    )?;
    assert_eq!(config.token_label.as_deref(), Some("flag-token"));
    assert_eq!(config.module_path, "/from/file.so");
    assert_eq!(config.pin.as_deref(), Some("file-pin"));
    assert_eq!(config.so_pin.as_deref(), Some("env-so-pin"));
    assert_eq!(config.pool_size, 8);
    Ok(())
}

#[test]
#[serial]
fn environment_alone_is_enough() -> CliResult<()> {
    let config = with_env(
        &[
            ("PKCS11_MODULE_PATH", "/from/env.so"),
            ("PKCS11_SLOT_ID", "7"),
        ],
        || load(None, &ConnectionArgs::default()),
    )?;
    assert_eq!(config.module_path, "/from/env.so");
    assert_eq!(config.slot_id, Some(7));
    config.validate()?;
    Ok(())
}

#[test]
fn malformed_files_are_reported() -> CliResult<()> {
    let file = conf_file("pool_size = \"eight\"")?;
    assert!(matches!(from_toml(file.path()), Err(CliError::TomlError(_))));
    assert!(matches!(
        from_toml(std::path::Path::new("/does/not/exist.toml")),
        Err(CliError::Default(_))
    ));
    Ok(())
}
