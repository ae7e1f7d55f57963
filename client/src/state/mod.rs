//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each view owns one focused model (`form`, `listing`, `detail`); nothing is
//! shared between views. The models are plain data so they can be driven
//! from unit tests without a browser.

pub mod detail;
pub mod form;
pub mod listing;
pub mod table;
