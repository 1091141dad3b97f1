//! List-scoped item operations for the ListStore.
//!
//! Each operation applies the matching [`CategoryTree`] mutation to one list,
//! stamps `updated_at` and persists. An unknown list id returns `Ok(None)`.
//! When the tree comes back unchanged nothing is written.

use super::ListStore;
use crate::{
    error::Result,
    models::{
        requests::{ItemEdit, NewItem},
        Item, PackingList,
    },
    snapshot::SnapshotStore,
    tree::CategoryTree,
};

impl<S: SnapshotStore> ListStore<S> {
    /// Flips the packed state of an item.
    pub fn toggle_item(
        &mut self,
        list_id: &str,
        category_id: &str,
        item_id: &str,
    ) -> Result<Option<PackingList>> {
        self.update_tree(list_id, |tree| Ok(tree.toggle_item(category_id, item_id)))
    }

    /// Appends a validated item to a category of a list.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::CategoryNotFound` when the list has no such category
    pub fn add_item(
        &mut self,
        list_id: &str,
        category_id: &str,
        request: &NewItem,
    ) -> Result<Option<(PackingList, Item)>> {
        let mut created = None;
        let list = self.update_tree(list_id, |tree| {
            let (next, item) = tree.add_item(category_id, &request.name, request.quantity)?;
            created = Some(item);
            Ok(next)
        })?;

        Ok(list.zip(created))
    }

    /// Replaces the name and quantity of an item.
    pub fn edit_item(
        &mut self,
        list_id: &str,
        category_id: &str,
        item_id: &str,
        edit: &ItemEdit,
    ) -> Result<Option<PackingList>> {
        self.update_tree(list_id, |tree| {
            tree.edit_item(category_id, item_id, &edit.name, edit.quantity)
        })
    }

    /// Removes an item from a list.
    pub fn delete_item(
        &mut self,
        list_id: &str,
        category_id: &str,
        item_id: &str,
    ) -> Result<Option<PackingList>> {
        self.update_tree(list_id, |tree| Ok(tree.delete_item(category_id, item_id)))
    }

    fn update_tree<F>(&mut self, list_id: &str, rebuild: F) -> Result<Option<PackingList>>
    where
        F: FnOnce(&CategoryTree) -> Result<CategoryTree>,
    {
        let Some(current) = self.lists.get(list_id) else {
            return Ok(None);
        };

        let tree = rebuild(&current.categories)?;
        if tree == current.categories {
            return Ok(Some(current.clone()));
        }

        let mut list = current.clone().with_categories(tree);
        list.touch();

        let mut next = self.lists.clone();
        next.insert(list.id.clone(), list.clone());
        self.commit(next)?;
        Ok(Some(list))
    }
}
