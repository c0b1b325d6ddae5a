//! `passvault remove` — delete an account from the store.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_password, store_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::Store;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, title: &str, force: bool) -> Result<()> {
    let path = store_path(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove account '{title}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    // Open the store (requires the master password).
    let master = prompt_password()?;
    let mut store = Store::open(&path, master.as_bytes())?;

    // Remove the account and save.
    store.remove_account(title)?;
    store.save()?;

    output::success(&format!("Removed account '{title}'"));

    Ok(())
}
