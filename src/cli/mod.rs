//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};

/// Minimum master password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// PassVault CLI: password-protected account credential store.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Password-protected account credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store to use (default: main)
    #[arg(short, long, default_value = "main", global = true)]
    pub store: String,

    /// Store directory (default: .passvault)
    #[arg(long, default_value = ".passvault", global = true)]
    pub store_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new encrypted store
    Init,

    /// Add an account (fails if the title already exists)
    Add {
        /// Account title (unique within the store)
        title: String,

        /// Username for the account
        #[arg(short, long)]
        username: Option<String>,

        /// URL associated with the account
        #[arg(long)]
        url: Option<String>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,

        /// Account type (e.g. login, card, wifi)
        #[arg(short, long)]
        kind: Option<String>,

        /// Account password (omit to pipe via stdin or be prompted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show an account's details
    Show {
        /// Account title
        title: String,

        /// Print the stored password as well
        #[arg(long)]
        reveal: bool,
    },

    /// List all accounts
    List,

    /// Edit an existing account
    Edit {
        /// Account title
        title: String,

        /// New username
        #[arg(short, long)]
        username: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New note
        #[arg(long)]
        note: Option<String>,

        /// New account type
        #[arg(short, long)]
        kind: Option<String>,

        /// Prompt for a new account password
        #[arg(short, long)]
        password: bool,
    },

    /// Remove an account
    Remove {
        /// Account title
        title: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripted use)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    // Check the environment variable first (script friendly).
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used during `init`).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    // Check the environment variable first (script friendly).
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "master password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Master password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Build the full path to a store file from the CLI arguments.
///
/// Example: `<cwd>/.passvault/main.pv`
pub fn store_path(cli: &Cli) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    let store = &cli.store;
    Ok(cwd.join(&cli.store_dir).join(format!("{store}.pv")))
}

/// Validate that a store name is safe and sensible.
///
/// Allowed: lowercase letters, digits, hyphens. Must not be empty
/// or start/end with a hyphen. Max length 64 characters.
/// This prevents accidental typos from silently creating new store files.
pub fn validate_store_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PassVaultError::ConfigError(
            "store name cannot be empty".into(),
        ));
    }

    if name.len() > 64 {
        return Err(PassVaultError::ConfigError(
            "store name cannot exceed 64 characters".into(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(PassVaultError::ConfigError(format!(
            "store name '{name}' is invalid — only lowercase letters, digits, and hyphens are allowed"
        )));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(PassVaultError::ConfigError(format!(
            "store name '{name}' cannot start or end with a hyphen"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_store_names() {
        assert!(validate_store_name("main").is_ok());
        assert!(validate_store_name("work").is_ok());
        assert!(validate_store_name("family-shared").is_ok());
        assert!(validate_store_name("v2").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_store_name("").is_err());
    }

    #[test]
    fn rejects_uppercase() {
        assert!(validate_store_name("Main").is_err());
        assert!(validate_store_name("WORK").is_err());
    }

    #[test]
    fn rejects_special_chars() {
        assert!(validate_store_name("main.pv").is_err());
        assert!(validate_store_name("my/store").is_err());
        assert!(validate_store_name("my store").is_err());
        assert!(validate_store_name("my_store").is_err());
    }

    #[test]
    fn rejects_leading_trailing_hyphens() {
        assert!(validate_store_name("-main").is_err());
        assert!(validate_store_name("main-").is_err());
    }

    #[test]
    fn rejects_too_long_name() {
        let long_name = "a".repeat(65);
        assert!(validate_store_name(&long_name).is_err());
    }
}
