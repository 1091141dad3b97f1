//! Identifier generation for packing lists and items.

use uuid::Uuid;

/// Returns a fresh identifier for a list or item.
///
/// Identifiers are random v4 UUIDs in their hyphenated lowercase form, so
/// rapid successive calls never collide the way timestamp tokens can.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
