//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store layer.

pub mod bookmarks;

pub use bookmarks::{
    handle_all_command, handle_get_command, handle_last_command, handle_pop_command,
    handle_save_command,
};
