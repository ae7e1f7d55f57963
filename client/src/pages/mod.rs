//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state and fetch orchestration and delegates
//! rendering details to `components`.

pub mod create_parcel;
pub mod my_parcels;
pub mod parcel_detail;
