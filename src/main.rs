use clap::Parser;
use passvault::cli::{validate_store_name, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Validate the store name early to catch typos.
    if let Err(e) = validate_store_name(&cli.store) {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref note,
            ref kind,
            ref password,
        } => passvault::cli::commands::add::execute(
            &cli,
            title,
            username.as_deref(),
            url.as_deref(),
            note.as_deref(),
            kind.as_deref(),
            password.as_deref(),
        ),
        Commands::Show { ref title, reveal } => {
            passvault::cli::commands::show::execute(&cli, title, reveal)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Edit {
            ref title,
            ref username,
            ref url,
            ref note,
            ref kind,
            password,
        } => passvault::cli::commands::edit::execute(
            &cli,
            title,
            username.as_deref(),
            url.as_deref(),
            note.as_deref(),
            kind.as_deref(),
            password,
        ),
        Commands::Remove { ref title, force } => {
            passvault::cli::commands::remove::execute(&cli, title, force)
        }
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
