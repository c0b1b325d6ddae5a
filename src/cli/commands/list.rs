//! `passvault list` — display all accounts in a table.

use crate::cli::output;
use crate::cli::{prompt_password, store_path, Cli};
use crate::errors::Result;
use crate::store::Store;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = store_path(cli)?;

    let master = prompt_password()?;
    let store = Store::open(&path, master.as_bytes())?;

    let accounts = store.accounts();

    output::info(&format!(
        "{} store — {} account(s)",
        cli.store,
        accounts.len()
    ));

    output::print_accounts_table(&accounts);

    Ok(())
}
