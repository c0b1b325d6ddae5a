//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::store::AccountRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Format an epoch-millisecond timestamp for display.
fn format_modified(record: &AccountRecord) -> String {
    match record.modified_at() {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Print a table of accounts (Title, Username, URL, Type, Modified).
///
/// Passwords and notes are never printed here — use `show --reveal`.
pub fn print_accounts_table(accounts: &[&AccountRecord]) {
    if accounts.is_empty() {
        info("No accounts in this store yet.");
        tip("Run `passvault add <title>` to add your first account.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Username", "URL", "Type", "Modified"]);

    for account in accounts {
        table.add_row(vec![
            account.title.clone(),
            account.username.clone(),
            account.url.clone(),
            account.kind.clone(),
            format_modified(account),
        ]);
    }

    println!("{table}");
}

/// Print one account's details, masking the password unless revealed.
pub fn print_account(account: &AccountRecord, reveal: bool) {
    let password = if reveal {
        account.password.clone()
    } else {
        "********".to_string()
    };

    println!("{} {}", style("Title:").bold(), account.title);
    println!("{} {}", style("Username:").bold(), account.username);
    println!("{} {}", style("Password:").bold(), password);
    println!("{} {}", style("URL:").bold(), account.url);
    println!("{} {}", style("Type:").bold(), account.kind);
    println!("{} {}", style("Note:").bold(), account.note);
    println!("{} {}", style("Modified:").bold(), format_modified(account));

    if !reveal {
        tip("Use --reveal to print the stored password.");
    }
}
