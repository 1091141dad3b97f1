//! Display formatting wrappers and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! every presentation layer prints the same markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (PackingList,   │───▶│ Result Types    │───▶│    Output       │
//! │  Item, ...)     │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Previews, PresetCatalog)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status messages (OperationStatus)
//! - [`datetime`]: Timestamp and trip date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use packer_core::{display::UpdateResult, models::Item};
//!
//! let item = Item::new("essentials", "Passport", None).checked(true);
//! let result = UpdateResult::with_changes(item, vec!["Marked as packed".to_string()]);
//! let output = format!("{}", result);
//! assert!(output.contains("Changes made:"));
//! assert!(output.contains("- [x] Passport"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PresetCatalog, Previews};
pub use datetime::{LocalDateTime, ShortDate, TripDates};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
