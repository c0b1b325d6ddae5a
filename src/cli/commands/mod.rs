//! Command implementations, one module per subcommand.

pub mod add;
pub mod completions;
pub mod edit;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;
