//! Networking modules for the Parcel Service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared by
//! every page.

pub mod api;
pub mod types;
