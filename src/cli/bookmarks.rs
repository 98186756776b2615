//! Bookmark command handlers
//!
//! Each handler loads the bookmark list through the store, applies a single
//! operation, and prints its result to stdout. Handlers that modify the list
//! persist it before printing.

use crate::error::{StashError, StashResult};
use crate::models::parse_index;
use crate::storage::BookmarkStore;

/// Handle the `s` command: bookmark the current working directory.
pub fn handle_save_command(store: &BookmarkStore) -> StashResult<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| StashError::Io(format!("Failed to determine current directory: {}", e)))?;
    let path = cwd.to_string_lossy().into_owned();

    let mut bookmarks = store.load()?;
    bookmarks.push(path.clone());
    store.save(&bookmarks)?;

    println!("Saved: {}", path);
    Ok(())
}

/// Handle the `l` command: print the most recent bookmark.
pub fn handle_last_command(store: &BookmarkStore) -> StashResult<()> {
    let bookmarks = store.load()?;

    match bookmarks.last() {
        Some(path) => println!("{}", path),
        None => println!("No bookmarks saved"),
    }

    Ok(())
}

/// Handle the `p` command: remove the most recent bookmark and print it.
pub fn handle_pop_command(store: &BookmarkStore) -> StashResult<()> {
    let mut bookmarks = store.load()?;

    let path = match bookmarks.pop() {
        Some(path) => path,
        None => {
            println!("No bookmarks saved");
            return Ok(());
        }
    };

    store.save(&bookmarks)?;
    println!("{}", path);
    Ok(())
}

/// Handle the `n` command: print the bookmark at a 1-based index.
pub fn handle_get_command(store: &BookmarkStore, index_arg: &str) -> StashResult<()> {
    let bookmarks = store.load()?;
    let idx = parse_index(index_arg, bookmarks.len())?;

    let path = bookmarks
        .get(idx)
        .ok_or_else(|| StashError::Index("index out of range".to_string()))?;

    println!("{}", path);
    Ok(())
}

/// Handle the `all` command: print every bookmark with its 1-based index.
pub fn handle_all_command(store: &BookmarkStore) -> StashResult<()> {
    let bookmarks = store.load()?;

    for (i, path) in bookmarks.iter().enumerate() {
        println!("{}: {}", i + 1, path);
    }

    Ok(())
}
