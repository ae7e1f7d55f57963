//! State of the single-parcel detail view.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::api::ApiError;
use crate::net::types::Parcel;
use crate::util::currency::{format_dollars, format_optional_dollars};

/// Three-state lifecycle of the detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailStatus {
    #[default]
    Loading,
    Found(Parcel),
    NotFound,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub parcel_id: Option<String>,
    pub status: DetailStatus,
    request_seq: u64,
}

impl DetailState {
    /// Switch to a new route identifier.
    ///
    /// Returns the sequence number to fetch under, or `None` when there is no
    /// identifier to fetch (the state is then `NotFound`). Any in-flight
    /// response for the previous identifier becomes stale.
    pub fn begin(&mut self, parcel_id: Option<String>) -> Option<u64> {
        self.request_seq += 1;
        self.parcel_id = parcel_id;
        if self.parcel_id.is_none() {
            self.status = DetailStatus::NotFound;
            return None;
        }
        self.status = DetailStatus::Loading;
        Some(self.request_seq)
    }

    /// Apply a fetch result; stale sequence numbers are dropped.
    pub fn resolve(&mut self, seq: u64, result: Result<Parcel, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.status = match result {
            Ok(parcel) => DetailStatus::Found(parcel),
            Err(_) => DetailStatus::NotFound,
        };
        true
    }
}

/// Label/value pairs rendered by the detail card.
pub fn detail_fields(parcel: &Parcel) -> Vec<(&'static str, String)> {
    vec![
        ("ID", parcel.id.clone()),
        ("Name", parcel.name.clone()),
        ("Type", parcel.parcel_type.clone()),
        ("Weight", format!("{} kg", parcel.weight)),
        ("Content Value", format_dollars(parcel.content_value_cents)),
        ("Delivery Cost", format_optional_dollars(parcel.delivery_cost_cents)),
    ]
}
