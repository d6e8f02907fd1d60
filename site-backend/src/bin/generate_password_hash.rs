// src/bin/generate_password_hash.rs

use site_backend::utils::password::PasswordManager;
use std::env;

/// ADMIN_PASSWORD_HASH 用のPHC文字列を生成するユーティリティ
///
/// 使い方: `generate-password-hash <password>`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let password = match env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("Usage: generate-password-hash <password>");
            std::process::exit(1);
        }
    };

    let manager = PasswordManager::new();
    let hash = manager.hash_password(&password)?;

    println!("ADMIN_PASSWORD_HASH={}", hash);

    Ok(())
}
