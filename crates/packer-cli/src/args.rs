use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItemCommands, ListCommands};

/// A travel packing checklist
///
/// Packer keeps one packing list per trip. Each list is organized into
/// categories of items that are checked off as they go into the bag. Running
/// `packer` without a command shows every list with its packing progress.
#[derive(Parser)]
#[command(version, about, name = "packer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/packer/packer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Packer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage packing lists
    #[command(alias = "l")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Manage items within a packing list
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Show the preset categories offered when creating a list
    #[command(alias = "c")]
    Categories,
}
