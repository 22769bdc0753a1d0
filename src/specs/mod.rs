// src/specs/mod.rs
//! # Lookup response “specs” module
//!
//! Everything that knows **what the lookup API sends back** and **which parts of
//! it we show**.
//!
//! ## What lives here
//! - **`schema`**: the typed JSON shape (`ApiResponse`, `SpecGroups`, one struct
//!   per group). Parsing is the validation step; a value of the wrong type fails
//!   the whole reply instead of quietly rendering an empty section.
//! - **`table`**: the fixed group order, group titles/icons and the
//!   `(group, path, label)` rows.
//! - **`device`**: turning one HTTP reply into a `DeviceResult` or a
//!   `LookupError`, in the documented order.
//!
//! ## What does **not** live here
//! - **Networking**: `core::net`.
//! - **Display**: `render` builds sheets/HTML/text from a `DeviceResult`.
//! - **Lifecycle** (loading toggle, stale replies): `lookup`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → lookup::SpecLookupController::begin → Ticket::execute
//!                 → core::net::Transport::get → specs::device::interpret
//!           → SpecLookupController::finish → render::*
//! ```
pub mod device;
pub mod schema;
pub mod table;

pub use schema::{ DeviceResult, SpecGroups };
pub use table::{ Field, GroupKey, FIELDS, GROUP_ORDER };
