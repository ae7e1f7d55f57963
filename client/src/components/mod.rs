//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and the parcel table while pages own fetching
//! and per-view state.

pub mod field_message;
pub mod navbar;
pub mod parcel_table;
