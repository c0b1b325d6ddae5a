//! `passvault edit` — update fields of an existing account.

use crate::cli::output;
use crate::cli::{prompt_password, store_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::Store;

/// Execute the `edit` command.
///
/// Only the fields passed as flags are changed; everything else keeps
/// its stored value.  `last_modified` is bumped on every edit.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: &str,
    username: Option<&str>,
    url: Option<&str>,
    note: Option<&str>,
    kind: Option<&str>,
    change_password: bool,
) -> Result<()> {
    let path = store_path(cli)?;

    let master = prompt_password()?;
    let mut store = Store::open(&path, master.as_bytes())?;

    let mut record = store
        .account(title)
        .ok_or_else(|| PassVaultError::AccountNotFound(title.to_string()))?
        .clone();

    if let Some(u) = username {
        record.username = u.to_string();
    }
    if let Some(u) = url {
        record.url = u.to_string();
    }
    if let Some(n) = note {
        record.note = n.to_string();
    }
    if let Some(k) = kind {
        record.kind = k.to_string();
    }
    if change_password {
        record.password = dialoguer::Password::new()
            .with_prompt(format!("Enter new password for '{title}'"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
    }

    record.touch();
    store.upsert_account(record)?;
    store.save()?;

    output::success(&format!("Account '{title}' updated"));

    Ok(())
}
