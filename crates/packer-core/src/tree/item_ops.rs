//! Item mutations on a [`CategoryTree`].
//!
//! Every operation returns a rebuilt tree and leaves the receiver untouched.
//! Identifiers that match nothing turn toggle, edit and delete into no-ops.

use super::CategoryTree;
use crate::{
    error::{PackerError, Result},
    models::{requests::normalize_item_name, Item},
};

impl CategoryTree {
    /// Flips `is_checked` on the matching item.
    pub fn toggle_item(&self, category_id: &str, item_id: &str) -> Self {
        self.rebuild_item(category_id, item_id, |item| item.is_checked = !item.is_checked)
    }

    /// Removes the matching item from its category. The order of the
    /// remaining items is preserved.
    pub fn delete_item(&self, category_id: &str, item_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(category_id) {
            category.items.shift_remove(item_id);
        }
        next
    }

    /// Appends a new unchecked item to the end of a category.
    ///
    /// Returns the rebuilt tree together with the created item so callers
    /// can address it by its fresh identifier.
    ///
    /// # Errors
    ///
    /// * `PackerError::InvalidInput` - when `name` is blank after trimming
    /// * `PackerError::CategoryNotFound` - when `category_id` matches no category
    pub fn add_item(
        &self,
        category_id: &str,
        name: &str,
        quantity: Option<u32>,
    ) -> Result<(Self, Item)> {
        let name = normalize_item_name(name)?;
        if !self.categories.contains_key(category_id) {
            return Err(PackerError::CategoryNotFound {
                id: category_id.to_string(),
            });
        }

        let item = Item::new(category_id, name, quantity.filter(|q| *q > 0));
        let mut next = self.clone();
        if let Some(category) = next.categories.get_mut(category_id) {
            category.items.insert(item.id.clone(), item.clone());
        }
        Ok((next, item))
    }

    /// Replaces the name and quantity of the matching item. Identifier and
    /// checked state are kept.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::InvalidInput` when `name` is blank after trimming.
    pub fn edit_item(
        &self,
        category_id: &str,
        item_id: &str,
        name: &str,
        quantity: Option<u32>,
    ) -> Result<Self> {
        let name = normalize_item_name(name)?;
        Ok(self.rebuild_item(category_id, item_id, |item| {
            item.name = name;
            item.quantity = quantity.filter(|q| *q > 0);
        }))
    }

    /// Clones the tree and applies `update` to the addressed item, if any.
    fn rebuild_item<F>(&self, category_id: &str, item_id: &str, update: F) -> Self
    where
        F: FnOnce(&mut Item),
    {
        let mut next = self.clone();
        if let Some(item) = next
            .categories
            .get_mut(category_id)
            .and_then(|category| category.items.get_mut(item_id))
        {
            update(item);
        }
        next
    }
}
