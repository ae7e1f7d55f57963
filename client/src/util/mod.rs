//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and routing helpers, kept free of browser APIs so they can
//! be unit tested natively.

pub mod currency;
pub mod route;
