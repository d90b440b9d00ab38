use std::process;

use cosmian_pkcs11_cli::commands::ckp11_main;

fn main() {
    if let Some(err) = ckp11_main().err() {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }
}
