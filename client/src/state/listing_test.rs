use super::*;

fn parcel(id: &str) -> Parcel {
    Parcel {
        id: id.to_owned(),
        name: format!("Parcel {id}"),
        parcel_type: "clothes".to_owned(),
        weight: 1.0,
        content_value_cents: 100,
        delivery_cost_cents: None,
        session_id: None,
    }
}

#[test]
fn listing_state_defaults() {
    let s = ListingState::default();
    assert!(s.table.rows().is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut s = ListingState::default();
    s.error = Some("old".to_owned());
    let seq = s.begin_load();
    assert_eq!(seq, 1);
    assert!(s.loading);
    assert!(s.error.is_none());
}

#[test]
fn finish_load_applies_rows() {
    let mut s = ListingState::default();
    let seq = s.begin_load();
    assert!(s.finish_load(seq, Ok(vec![parcel("1"), parcel("2")])));
    assert!(!s.loading);
    assert_eq!(s.table.rows().len(), 2);
}

#[test]
fn failed_load_leaves_table_empty_with_error() {
    let mut s = ListingState::default();
    let seq = s.begin_load();
    s.finish_load(seq, Ok(vec![parcel("1")]));

    let seq = s.begin_load();
    assert!(s.finish_load(seq, Err(ApiError::Status(500))));
    assert!(!s.loading);
    assert!(s.table.rows().is_empty());
    assert_eq!(
        s.error.as_deref(),
        Some("Could not load parcels: request failed: 500")
    );
}

#[test]
fn stale_response_is_ignored() {
    let mut s = ListingState::default();
    let first = s.begin_load();
    let second = s.begin_load();

    assert!(!s.finish_load(first, Ok(vec![parcel("stale")])));
    assert!(s.loading);
    assert!(s.table.rows().is_empty());

    assert!(s.finish_load(second, Ok(vec![parcel("fresh")])));
    assert_eq!(s.table.rows()[0].id, "fresh");
    assert!(!s.finish_load(first, Err(ApiError::NotFound)));
    assert!(s.error.is_none());
}
