//! Packer CLI Application
//!
//! Command-line interface for the packer travel checklist.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use packer_core::{params::SearchLists, ListStoreBuilder};
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = ListStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open packing list store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Packer started with {} lists", store.len());

    let cli = Cli::new(store, renderer);
    match command {
        Some(List { command }) => cli.handle_list_command(command),
        Some(Item { command }) => cli.handle_item_command(command),
        Some(Categories) => cli.show_categories(),
        None => cli.list_lists(&SearchLists::default()),
    }
}
