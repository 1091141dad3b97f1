//! Command handling for the packer CLI
//!
//! Clap argument structs live here next to their conversions into core
//! params, so core types stay free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ListStore handlers
//! ```
//!
//! [`Cli`] runs a parsed command against the store and renders the result.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::info;
use packer_core::{
    display::{OperationStatus, PresetCatalog},
    params::*,
    Database, ListStore, PackerError,
};

use crate::renderer::TerminalRenderer;

/// Create a new packing list
#[derive(Args)]
pub struct CreateListArgs {
    /// Title of the trip; blank becomes "Untitled Trip"
    pub title: String,
    /// Optional notes about the trip
    #[arg(short, long)]
    pub description: Option<String>,
    /// Where the trip goes
    #[arg(long)]
    pub destination: Option<String>,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
    /// Preset categories to start with, replacing the default selection
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<String>>,
    /// Toggle a preset category in or out of the selection
    #[arg(long = "toggle", value_name = "CATEGORY")]
    pub toggles: Vec<String>,
}

impl TryFrom<CreateListArgs> for CreateList {
    type Error = PackerError;

    /// Convert CLI arguments to the raw creation form.
    ///
    /// Explicit `--categories` replace the default selection; each `--toggle`
    /// is then applied in order.
    fn try_from(val: CreateListArgs) -> Result<Self, Self::Error> {
        let mut categories = match val.categories {
            Some(ids) => CategorySelection::from_ids(ids)?,
            None => CategorySelection::default(),
        };
        for id in &val.toggles {
            categories.toggle_id(id)?;
        }

        Ok(CreateList {
            title: val.title,
            description: val.description.unwrap_or_default(),
            destination: val.destination.unwrap_or_default(),
            start_date: val.start.unwrap_or_default(),
            end_date: val.end.unwrap_or_default(),
            categories,
        })
    }
}

/// List packing lists, optionally filtered
#[derive(Args)]
pub struct ListListsArgs {
    /// Only show lists whose title or destination contains this text
    pub query: Option<String>,
}

impl From<ListListsArgs> for SearchLists {
    fn from(val: ListListsArgs) -> Self {
        SearchLists {
            query: val.query.unwrap_or_default(),
        }
    }
}

/// Show a packing list with all of its items
#[derive(Args)]
pub struct ShowListArgs {
    /// ID of the list to display
    pub id: String,
}

impl From<ShowListArgs> for Id {
    fn from(val: ShowListArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a packing list permanently
#[derive(Args)]
pub struct DeleteListArgs {
    /// ID of the list to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteListArgs> for DeleteList {
    fn from(val: DeleteListArgs) -> Self {
        DeleteList {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new packing list
    #[command(alias = "c")]
    Create(CreateListArgs),
    /// List packing lists with their progress
    #[command(aliases = ["l", "ls"])]
    List(ListListsArgs),
    /// Show a packing list
    #[command(alias = "s")]
    Show(ShowListArgs),
    /// Delete a packing list permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteListArgs),
}

/// Add an item to a category
#[derive(Args)]
pub struct AddItemArgs {
    /// ID of the list
    pub list_id: String,
    /// Category to add the item to (e.g. essentials)
    pub category_id: String,
    /// Name of the item
    pub name: String,
    /// How many to pack
    #[arg(short, long)]
    pub quantity: Option<String>,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            list_id: val.list_id,
            category_id: val.category_id,
            name: val.name,
            quantity: val.quantity.unwrap_or_default(),
        }
    }
}

/// Rename an item or change its quantity
#[derive(Args)]
pub struct EditItemArgs {
    /// ID of the list
    pub list_id: String,
    /// Category holding the item
    pub category_id: String,
    /// ID of the item
    pub item_id: String,
    /// New name of the item
    pub name: String,
    /// New quantity; omit to clear it
    #[arg(short, long)]
    pub quantity: Option<String>,
}

impl From<EditItemArgs> for EditItem {
    fn from(val: EditItemArgs) -> Self {
        EditItem {
            list_id: val.list_id,
            category_id: val.category_id,
            item_id: val.item_id,
            name: val.name,
            quantity: val.quantity.unwrap_or_default(),
        }
    }
}

/// Address of a single item
#[derive(Args)]
pub struct ItemRefArgs {
    /// ID of the list
    pub list_id: String,
    /// Category holding the item
    pub category_id: String,
    /// ID of the item
    pub item_id: String,
}

impl From<ItemRefArgs> for ItemRef {
    fn from(val: ItemRefArgs) -> Self {
        ItemRef {
            list_id: val.list_id,
            category_id: val.category_id,
            item_id: val.item_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a category
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Rename an item or change its quantity
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Check or uncheck an item
    #[command(alias = "t")]
    Toggle(ItemRefArgs),
    /// Remove an item
    #[command(aliases = ["d", "rm"])]
    Delete(ItemRefArgs),
}

/// Runs commands against the store and renders their output.
pub struct Cli {
    store: ListStore<Database>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: ListStore<Database>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn handle_list_command(mut self, command: ListCommands) -> Result<()> {
        match command {
            ListCommands::Create(args) => {
                let params = CreateList::try_from(args)?;
                let created = self
                    .store
                    .create_list_result(&params)
                    .context("Failed to create packing list")?;
                info!("Navigating to {}", created.destination());
                self.renderer.render(&created.to_string())
            }
            ListCommands::List(args) => self.list_lists(&args.into()),
            ListCommands::Show(args) => {
                let list = self.store.show_list(&args.into())?;
                self.renderer.render(&list.to_string())
            }
            ListCommands::Delete(args) => {
                let params = DeleteList::from(args);
                match self.store.delete_list(&params)? {
                    Some(deleted) => self.renderer.render(&deleted.to_string()),
                    None => bail!(PackerError::ListNotFound { id: params.id }),
                }
            }
        }
    }

    pub fn handle_item_command(mut self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let added = self
                    .store
                    .add_item_result(&args.into())
                    .context("Failed to add item")?;
                self.renderer.render(&added.to_string())
            }
            ItemCommands::Edit(args) => {
                let params = EditItem::from(args);
                match self.store.edit_item_result(&params)? {
                    Some(updated) => self.renderer.render(&updated.to_string()),
                    None => self.item_not_found(&params.category_id, &params.item_id),
                }
            }
            ItemCommands::Toggle(args) => {
                let params = ItemRef::from(args);
                match self.store.toggle_item_result(&params)? {
                    Some(updated) => self.renderer.render(&updated.to_string()),
                    None => self.item_not_found(&params.category_id, &params.item_id),
                }
            }
            ItemCommands::Delete(args) => {
                let params = ItemRef::from(args);
                match self.store.delete_item_result(&params)? {
                    Some(deleted) => self.renderer.render(&deleted.to_string()),
                    None => self.item_not_found(&params.category_id, &params.item_id),
                }
            }
        }
    }

    pub fn list_lists(&self, params: &SearchLists) -> Result<()> {
        let previews = self.store.list_previews(params);
        self.renderer.render(&previews.to_string())
    }

    pub fn show_categories(&self) -> Result<()> {
        self.renderer.render(&PresetCatalog::default().to_string())
    }

    fn item_not_found(&self, category_id: &str, item_id: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::item_not_found(category_id, item_id).to_string())
    }
}
