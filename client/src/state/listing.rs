//! State of the "My Parcels" listing.
//!
//! Fetches are tagged with a sequence number; only the latest request may
//! write its result, so a slow response can't overwrite a newer one.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use super::table::ParcelTable;
use crate::net::api::ApiError;
use crate::net::types::Parcel;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    pub table: ParcelTable,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) request_seq: u64,
}

impl ListingState {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when a
    /// newer fetch has started since `seq` was issued.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Parcel>, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(rows) => self.table.set_rows(rows),
            Err(e) => {
                self.table.set_rows(Vec::new());
                self.error = Some(format!("Could not load parcels: {e}"));
            }
        }
        true
    }
}
