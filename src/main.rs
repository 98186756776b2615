use anyhow::Result;
use clap::{Parser, Subcommand};

use dirstash::cli::{
    handle_all_command, handle_get_command, handle_last_command, handle_pop_command,
    handle_save_command,
};
use dirstash::config::StashPaths;
use dirstash::crypto::{KeyManager, KeySource};
use dirstash::storage::BookmarkStore;

#[derive(Parser)]
#[command(
    name = "dirstash",
    version,
    about = "Encrypted directory bookmarks for the command line",
    long_about = "dirstash keeps a personal list of directory bookmarks, stored \
                  encrypted at rest with AES-256-GCM. Save the directory you are \
                  in, then recall it later by recency or by position."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bookmark the current working directory
    #[command(name = "s")]
    Save,

    /// Print the most recently saved bookmark
    #[command(name = "l")]
    Last,

    /// Remove the most recently saved bookmark and print it
    #[command(name = "p")]
    Pop,

    /// Print the bookmark at the given 1-based index
    #[command(name = "n")]
    Get {
        /// Position in the bookmark list, counting from 1
        index: String,
    },

    /// List all bookmarks with their indices
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve paths and the encryption key once per invocation
    let paths = StashPaths::new()?;
    let resolved = KeyManager::new(&paths).resolve()?;

    if resolved.source == KeySource::Generated {
        println!(
            "Generated new encryption key at {}",
            paths.key_file().display()
        );
    }

    let store = BookmarkStore::new(paths.bookmarks_file(), resolved.key);

    match cli.command {
        Commands::Save => handle_save_command(&store)?,
        Commands::Last => handle_last_command(&store)?,
        Commands::Pop => handle_pop_command(&store)?,
        Commands::Get { index } => handle_get_command(&store, &index)?,
        Commands::All => handle_all_command(&store)?,
    }

    Ok(())
}
