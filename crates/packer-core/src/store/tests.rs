//! Tests for the store module.

use std::io;

use tempfile::TempDir;

use super::*;
use crate::{
    error::{PackerError, Result},
    models::{
        requests::{ItemEdit, NewItem, NewList},
        Destination,
    },
    params::{AddItem, CategorySelection, CreateList, DeleteList, EditItem, Id, ItemRef, SearchLists},
    snapshot::MemorySnapshot,
};

/// Port whose writes always fail.
#[derive(Debug, Default)]
struct ReadOnlySnapshot {
    blob: Option<String>,
}

impl SnapshotStore for ReadOnlySnapshot {
    fn read_snapshot(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write_snapshot(&mut self, _text: &str) -> Result<()> {
        Err(PackerError::FileSystem {
            path: "snapshot".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "snapshot is read-only"),
        })
    }
}

fn create_test_store() -> ListStore<MemorySnapshot> {
    ListStore::new(MemorySnapshot::new())
}

fn create_form(title: &str, destination: &str) -> CreateList {
    CreateList {
        title: title.to_string(),
        destination: destination.to_string(),
        ..Default::default()
    }
}

fn new_item(name: &str, quantity: Option<u32>) -> NewItem {
    NewItem {
        name: name.to_string(),
        quantity,
    }
}

#[test]
fn test_create_list_defaults() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("", "Tokyo"))).unwrap();

    assert_eq!(list.title, "Untitled Trip");
    assert_eq!(list.destination.as_deref(), Some("Tokyo"));
    assert!(!list.id.is_empty());

    let ids: Vec<&str> = list.categories.categories().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["essentials", "clothing", "toiletries"]);
    assert_eq!(list.item_count(), 0);
}

#[test]
fn test_create_list_persists_snapshot() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("Oslo", ""))).unwrap();

    let blob = store.port.blob().unwrap().to_string();
    assert!(blob.contains(&list.id));

    let reloaded = ListStore::new(MemorySnapshot::with_blob(blob));
    assert_eq!(reloaded.get(&list.id), Some(&list));
}

#[test]
fn test_save_assigns_missing_id() {
    let mut store = create_test_store();
    let saved = store.save(PackingList::new("Camping")).unwrap();
    assert!(!saved.id.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_save_with_colliding_ids_replaces() {
    let mut store = create_test_store();

    let mut first = PackingList::new("First");
    first.id = "shared".to_string();
    let mut other = PackingList::new("Other");
    other.id = "other".to_string();
    let mut second = PackingList::new("Second");
    second.id = "shared".to_string();

    store.save(first).unwrap();
    store.save(other).unwrap();
    store.save(second).unwrap();

    assert_eq!(store.len(), 2);
    let titles: Vec<&str> = store.lists().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Second", "Other"]);

    let reloaded = store.load_all();
    assert_eq!(reloaded.iter().filter(|l| l.id == "shared").count(), 1);
}

#[test]
fn test_remove_list() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("Rome", ""))).unwrap();

    let removed = store.remove(&list.id).unwrap();
    assert_eq!(removed.map(|l| l.id), Some(list.id.clone()));
    assert!(store.is_empty());
    assert_eq!(store.port.blob(), Some("[]"));

    assert!(store.remove(&list.id).unwrap().is_none());
}

#[test]
fn test_load_all_recovers_from_corrupt_snapshot() {
    let mut store = ListStore::new(MemorySnapshot::with_blob("{not json"));
    assert!(store.is_empty());
    assert!(store.load_all().is_empty());
}

#[test]
fn test_load_all_assigns_ids_to_anonymous_lists() {
    let store = ListStore::new(MemorySnapshot::with_blob(r#"[{"title":"Bare"}]"#));
    let list = store.lists().next().unwrap();
    assert!(!list.id.is_empty());
    assert_eq!(list.title, "Bare");
}

#[test]
fn test_broken_list_does_not_wipe_the_others() {
    let blob = r#"[
        {"id": "paris", "title": "Paris", "categories": [
            {"id": "misc", "name": "Miscellaneous", "items": [{"name": "Umbrella"}]}
        ]},
        {"id": "broken", "title": "Broken", "categories": "essentials"}
    ]"#;
    let mut store = ListStore::new(MemorySnapshot::with_blob(blob));

    assert_eq!(store.len(), 1);
    let paris = store.get("paris").unwrap();
    assert!(!paris.categories.category("misc").unwrap().items().next().unwrap().id.is_empty());

    let created = store.create_list(NewList::from(&create_form("Rome", ""))).unwrap();
    let reloaded = ListStore::new(MemorySnapshot::with_blob(store.port.blob().unwrap()));
    assert!(reloaded.get("paris").is_some());
    assert!(reloaded.get(&created.id).is_some());
}

#[test]
fn test_write_failure_keeps_state() {
    let mut store = ListStore::new(ReadOnlySnapshot {
        blob: Some(r#"[{"id":"a","title":"Kept"}]"#.to_string()),
    });

    let err = store.save(PackingList::new("Lost")).unwrap_err();
    assert!(matches!(err, PackerError::FileSystem { .. }));
    assert_eq!(store.len(), 1);

    assert!(store.remove("a").is_err());
    assert!(store.get("a").is_some());
}

#[test]
fn test_search_matches_title_or_destination() {
    let mut store = create_test_store();
    store.create_list(NewList::from(&create_form("Paris Trip", ""))).unwrap();
    store.create_list(NewList::from(&create_form("Work", "Paris"))).unwrap();
    store.create_list(NewList::from(&create_form("Ski", "Alps"))).unwrap();

    let titles: Vec<&str> = store.search("PARIS").iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Paris Trip", "Work"]);
    assert_eq!(store.search("").len(), 3);
    assert!(store.search("No destination").is_empty());
}

#[test]
fn test_item_lifecycle() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("Beach", ""))).unwrap();

    let (updated, item) = store
        .add_item(&list.id, "essentials", &new_item("Sunscreen", Some(2)))
        .unwrap()
        .unwrap();
    assert_eq!(updated.item_count(), 1);
    assert!(updated.updated_at >= list.updated_at);

    let toggled = store.toggle_item(&list.id, "essentials", &item.id).unwrap().unwrap();
    assert_eq!(toggled.progress().percent, 100);

    let edit = ItemEdit {
        name: "SPF 50".to_string(),
        quantity: None,
    };
    let edited = store.edit_item(&list.id, "essentials", &item.id, &edit).unwrap().unwrap();
    let renamed = edited.categories.find_item(&item.id).unwrap();
    assert_eq!(renamed.name, "SPF 50");
    assert!(renamed.is_checked);

    let deleted = store.delete_item(&list.id, "essentials", &item.id).unwrap().unwrap();
    assert_eq!(deleted.item_count(), 0);

    // Everything above went through the snapshot
    let reloaded = ListStore::new(MemorySnapshot::with_blob(store.port.blob().unwrap()));
    assert_eq!(reloaded.get(&list.id).unwrap().item_count(), 0);
}

#[test]
fn test_item_ops_on_missing_list() {
    let mut store = create_test_store();
    assert!(store.toggle_item("nope", "essentials", "x").unwrap().is_none());
    assert!(store.delete_item("nope", "essentials", "x").unwrap().is_none());
    assert!(store.add_item("nope", "essentials", &new_item("Hat", None)).unwrap().is_none());
    assert_eq!(store.port.blob(), None);
}

#[test]
fn test_noop_toggle_skips_write() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("Quiet", ""))).unwrap();
    let blob = store.port.blob().map(str::to_string);

    let unchanged = store.toggle_item(&list.id, "essentials", "missing").unwrap().unwrap();
    assert_eq!(unchanged, list);
    assert_eq!(store.port.blob().map(str::to_string), blob);
}

#[test]
fn test_add_item_to_unknown_category() {
    let mut store = create_test_store();
    let list = store.create_list(NewList::from(&create_form("Hike", ""))).unwrap();

    let err = store.add_item(&list.id, "documents", &new_item("Map", None)).unwrap_err();
    assert!(matches!(err, PackerError::CategoryNotFound { .. }));
    assert_eq!(store.get(&list.id).unwrap().item_count(), 0);
}

#[test]
fn test_create_list_result_navigates_to_detail() {
    let mut store = create_test_store();
    let created = store.create_list_result(&create_form("Berlin", "")).unwrap();
    assert_eq!(
        created.destination(),
        Destination::ListDetail(created.resource.id.clone())
    );
    assert_eq!(created.destination().to_string(), format!("/list/{}", created.resource.id));
}

#[test]
fn test_create_list_result_respects_selection() {
    let mut store = create_test_store();
    let mut form = create_form("Conference", "");
    form.categories = CategorySelection::from_ids(["documents", "electronics"]).unwrap();

    let created = store.create_list_result(&form).unwrap();
    let names: Vec<&str> = created
        .resource
        .categories
        .categories()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Documents", "Electronics"]);
}

#[test]
fn test_list_previews_filters() {
    let mut store = create_test_store();
    store.create_list_result(&create_form("Paris Trip", "")).unwrap();
    store.create_list_result(&create_form("Ski", "Alps")).unwrap();

    let previews = store.list_previews(&SearchLists {
        query: "paris".to_string(),
    });
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].title, "Paris Trip");

    assert_eq!(store.list_previews(&SearchLists::default()).len(), 2);
}

#[test]
fn test_show_missing_list() {
    let store = create_test_store();
    match store.show_list(&Id { id: "ghost".to_string() }).unwrap_err() {
        PackerError::ListNotFound { id } => assert_eq!(id, "ghost"),
        other => panic!("Expected ListNotFound error, got {other:?}"),
    }
}

#[test]
fn test_delete_list_requires_confirmation() {
    let mut store = create_test_store();
    let created = store.create_list_result(&create_form("Keep", "")).unwrap();
    let id = created.resource.id.clone();

    let err = store
        .delete_list(&DeleteList {
            id: id.clone(),
            confirmed: false,
        })
        .unwrap_err();
    match err {
        PackerError::InvalidInput { field, .. } => assert_eq!(field, "confirmed"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
    assert_eq!(store.len(), 1);

    let deleted = store
        .delete_list(&DeleteList {
            id,
            confirmed: true,
        })
        .unwrap();
    assert_eq!(deleted.unwrap().resource.title, "Keep");
    assert!(store.is_empty());
}

#[test]
fn test_item_handlers() {
    let mut store = create_test_store();
    let list = store.create_list_result(&create_form("Lake", "")).unwrap().resource;

    let added = store
        .add_item_result(&AddItem {
            list_id: list.id.clone(),
            category_id: "clothing".to_string(),
            name: " Swimsuit ".to_string(),
            quantity: "2".to_string(),
        })
        .unwrap();
    let item_id = added.resource.id.clone();
    assert_eq!(added.resource.name, "Swimsuit");

    let item_ref = ItemRef {
        list_id: list.id.clone(),
        category_id: "clothing".to_string(),
        item_id: item_id.clone(),
    };
    let toggled = store.toggle_item_result(&item_ref).unwrap().unwrap();
    assert!(toggled.resource.is_checked);
    assert_eq!(toggled.changes, ["Marked as packed"]);

    let edited = store
        .edit_item_result(&EditItem {
            list_id: list.id.clone(),
            category_id: "clothing".to_string(),
            item_id: item_id.clone(),
            name: "Wetsuit".to_string(),
            quantity: String::new(),
        })
        .unwrap()
        .unwrap();
    assert_eq!(edited.changes, ["Renamed from 'Swimsuit'", "Cleared quantity"]);

    let deleted = store.delete_item_result(&item_ref).unwrap().unwrap();
    assert_eq!(deleted.resource.name, "Wetsuit");
    assert!(store.delete_item_result(&item_ref).unwrap().is_none());
}

#[test]
fn test_item_handlers_reject_blank_name() {
    let mut store = create_test_store();
    let list = store.create_list_result(&create_form("Lake", "")).unwrap().resource;

    let err = store
        .add_item_result(&AddItem {
            list_id: list.id.clone(),
            category_id: "essentials".to_string(),
            name: "  ".to_string(),
            quantity: "2".to_string(),
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.get(&list.id).unwrap().item_count(), 0);
}

#[test]
fn test_item_handlers_report_missing_list() {
    let mut store = create_test_store();
    let err = store
        .toggle_item_result(&ItemRef {
            list_id: "ghost".to_string(),
            category_id: "essentials".to_string(),
            item_id: "x".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, PackerError::ListNotFound { .. }));
}

#[test]
fn test_builder_creates_database_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("packer.db");

    let mut store = ListStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    let list = store.create_list(NewList::from(&create_form("Nested", ""))).unwrap();
    assert!(db_path.exists());

    let reopened = ListStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to reopen store");
    assert_eq!(reopened.get(&list.id).map(|l| l.title.as_str()), Some("Nested"));
}
