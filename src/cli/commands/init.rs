//! `passvault init` — create a new encrypted store.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_password, store_path, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::store::Store;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let store_dir = cwd.join(&cli.store_dir);
    let path = store_path(cli)?;

    // 1. Create the store directory if it doesn't exist.
    if !store_dir.exists() {
        fs::create_dir_all(&store_dir)?;
        let dir_display = store_dir.display();
        output::info(&format!("Created store directory: {dir_display}"));
    }

    // 2. Check if a store already exists under this name.
    if path.exists() {
        output::tip("Use `passvault add` to add accounts to the existing store.");
        return Err(PassVaultError::StoreAlreadyExists(path));
    }

    // 3. Prompt for a new master password (with confirmation).
    let password = prompt_new_password()?;

    // 4. Load settings and create the store file.
    let settings = Settings::load(&cwd)?;
    Store::create(&path, password.as_bytes(), Some(&settings.argon2_params()))?;

    output::success(&format!(
        "Store '{}' created at {}",
        cli.store,
        path.display()
    ));

    // 5. Show helpful tips.
    output::tip("Run `passvault add <title>` to add an account.");
    output::tip("Run `passvault list` to see all accounts.");

    Ok(())
}
