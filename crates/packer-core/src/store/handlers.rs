//! Handler operations that take raw params and return formatted wrapper types.
//!
//! These are the entry points used by presentation layers. Raw form fields are
//! validated here before anything reaches the store.

use super::ListStore;
use crate::{
    display::{CreateResult, DeleteResult, Previews, UpdateResult},
    error::{PackerError, Result},
    models::{
        requests::{ItemEdit, NewItem, NewList},
        Item, ListFilter, PackingList, PackingListPreview,
    },
    params::{AddItem, CreateList, DeleteList, EditItem, Id, ItemRef, SearchLists},
    snapshot::SnapshotStore,
};

impl<S: SnapshotStore> ListStore<S> {
    /// Handle creating a new list from the creation form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packer_core::{
    ///     models::Destination, params::CreateList, snapshot::MemorySnapshot, store::ListStore,
    /// };
    ///
    /// let mut store = ListStore::new(MemorySnapshot::new());
    /// let params = CreateList {
    ///     destination: "Tokyo".to_string(),
    ///     ..Default::default()
    /// };
    /// let created = store.create_list_result(&params)?;
    ///
    /// assert_eq!(created.resource.title, "Untitled Trip");
    /// assert_eq!(
    ///     created.destination(),
    ///     Destination::ListDetail(created.resource.id.clone())
    /// );
    /// # packer_core::Result::<()>::Ok(())
    /// ```
    pub fn create_list_result(&mut self, params: &CreateList) -> Result<CreateResult<PackingList>> {
        let list = self.create_list(NewList::from(params))?;
        Ok(CreateResult::new(list))
    }

    /// Handle listing previews, narrowed by an optional search query.
    pub fn list_previews(&self, params: &SearchLists) -> Previews {
        let filter = ListFilter::from(params);
        let previews: Vec<PackingListPreview> = filter
            .apply(self.lists())
            .into_iter()
            .map(PackingListPreview::from)
            .collect();
        Previews(previews)
    }

    /// Handle showing a complete list.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::ListNotFound` if no list has the given ID
    pub fn show_list(&self, params: &Id) -> Result<PackingList> {
        self.get(&params.id)
            .cloned()
            .ok_or_else(|| PackerError::ListNotFound {
                id: params.id.clone(),
            })
    }

    /// Handle permanently deleting a list with confirmation.
    ///
    /// Returns the deleted list, or None if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::InvalidInput` if `confirmed` is false
    pub fn delete_list(&mut self, params: &DeleteList) -> Result<Option<DeleteResult<PackingList>>> {
        if !params.confirmed {
            return Err(PackerError::invalid_input("confirmed").with_reason(
                "List deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        Ok(self.remove(&params.id)?.map(DeleteResult::new))
    }

    /// Handle the add item dialog.
    ///
    /// # Errors
    ///
    /// * `PackerError::InvalidInput` - When the name is blank
    /// * `PackerError::ListNotFound` - When the list does not exist
    /// * `PackerError::CategoryNotFound` - When the list has no such category
    pub fn add_item_result(&mut self, params: &AddItem) -> Result<CreateResult<Item>> {
        let request = NewItem::try_from(params)?;
        self.add_item(&params.list_id, &params.category_id, &request)?
            .map(|(_, item)| CreateResult::new(item))
            .ok_or_else(|| PackerError::ListNotFound {
                id: params.list_id.clone(),
            })
    }

    /// Handle the edit item dialog. Returns None when the item doesn't exist.
    pub fn edit_item_result(&mut self, params: &EditItem) -> Result<Option<UpdateResult<Item>>> {
        let edit = ItemEdit::try_from(params)?;
        let Some(before) = self
            .require_list(&params.list_id)?
            .categories
            .category(&params.category_id)
            .and_then(|category| category.item(&params.item_id))
            .cloned()
        else {
            return Ok(None);
        };

        let list = self
            .edit_item(&params.list_id, &params.category_id, &params.item_id, &edit)?
            .ok_or_else(|| PackerError::ListNotFound {
                id: params.list_id.clone(),
            })?;

        let mut changes = Vec::new();
        if before.name != edit.name {
            changes.push(format!("Renamed from '{}'", before.name));
        }
        if before.quantity != edit.quantity {
            changes.push(match edit.quantity {
                Some(quantity) => format!("Set quantity to {quantity}"),
                None => "Cleared quantity".to_string(),
            });
        }

        Ok(list
            .categories
            .find_item(&params.item_id)
            .cloned()
            .map(|item| UpdateResult::with_changes(item, changes)))
    }

    /// Handle packing or unpacking an item. Returns None when the item
    /// doesn't exist.
    pub fn toggle_item_result(&mut self, params: &ItemRef) -> Result<Option<UpdateResult<Item>>> {
        self.require_list(&params.list_id)?;
        let list = self
            .toggle_item(&params.list_id, &params.category_id, &params.item_id)?
            .ok_or_else(|| PackerError::ListNotFound {
                id: params.list_id.clone(),
            })?;

        Ok(list
            .categories
            .category(&params.category_id)
            .and_then(|category| category.item(&params.item_id))
            .cloned()
            .map(|item| {
                let change = if item.is_checked {
                    "Marked as packed"
                } else {
                    "Marked as not packed"
                };
                UpdateResult::with_changes(item, vec![change.to_string()])
            }))
    }

    /// Handle deleting an item. Uses get-before-delete to return the removed
    /// item, or None if it doesn't exist.
    pub fn delete_item_result(&mut self, params: &ItemRef) -> Result<Option<DeleteResult<Item>>> {
        let item = self
            .require_list(&params.list_id)?
            .categories
            .category(&params.category_id)
            .and_then(|category| category.item(&params.item_id))
            .cloned();

        if item.is_some() {
            self.delete_item(&params.list_id, &params.category_id, &params.item_id)?;
        }

        Ok(item.map(DeleteResult::new))
    }

    fn require_list(&self, id: &str) -> Result<&PackingList> {
        self.get(id).ok_or_else(|| PackerError::ListNotFound { id: id.to_string() })
    }
}
