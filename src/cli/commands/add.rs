//! `passvault add` — add a new account to the store.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{prompt_password, store_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::{AccountRecord, Store};

/// Execute the `add` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: &str,
    username: Option<&str>,
    url: Option<&str>,
    note: Option<&str>,
    kind: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let path = store_path(cli)?;

    // Determine the account password from one of three sources.
    let account_password = if let Some(p) = password {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        p.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter password for '{title}'"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?
    };

    // Open the store, insert the account, and save.
    let master = prompt_password()?;
    let mut store = Store::open(&path, master.as_bytes())?;

    if store.contains(title) {
        return Err(PassVaultError::AccountAlreadyExists(title.to_string()));
    }

    let record = AccountRecord::new(
        title,
        username.unwrap_or_default(),
        account_password,
        note.unwrap_or_default(),
        kind.unwrap_or("login"),
        url.unwrap_or_default(),
    );
    store.upsert_account(record)?;
    store.save()?;

    output::success(&format!(
        "Account '{}' added to {}.pv ({} total)",
        title,
        cli.store,
        store.account_count()
    ));

    Ok(())
}
