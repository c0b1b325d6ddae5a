//! `passvault show` — print a single account's details.

use crate::cli::output;
use crate::cli::{prompt_password, store_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::Store;

/// Execute the `show` command.
pub fn execute(cli: &Cli, title: &str, reveal: bool) -> Result<()> {
    let path = store_path(cli)?;

    // Open the store (requires the master password).
    let master = prompt_password()?;
    let store = Store::open(&path, master.as_bytes())?;

    let account = store
        .account(title)
        .ok_or_else(|| PassVaultError::AccountNotFound(title.to_string()))?;

    output::print_account(account, reveal);

    Ok(())
}
