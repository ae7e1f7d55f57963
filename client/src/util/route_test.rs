use super::*;

fn id_of(path: &str) -> Option<String> {
    parcel_id_from_path(path)
}

#[test]
fn parcel_detail_path_formats_id() {
    assert_eq!(parcel_detail_path("42"), "/parcels/42");
    assert_eq!(parcel_detail_path("7f1c-9a2b"), "/parcels/7f1c-9a2b");
}

#[test]
fn parcel_detail_path_encodes_reserved_characters() {
    assert_eq!(parcel_detail_path("a/b?c"), "/parcels/a%2Fb%3Fc");
    assert_eq!(parcel_detail_path("box #1"), "/parcels/box%20%231");
}

#[test]
fn parcel_id_from_path_takes_last_segment() {
    assert_eq!(id_of("/parcels/42").as_deref(), Some("42"));
    assert_eq!(id_of("/parcels/42/").as_deref(), Some("42"));
    assert_eq!(id_of("/parcels/7f1c-9a2b").as_deref(), Some("7f1c-9a2b"));
}

#[test]
fn parcel_id_from_path_ignores_query_and_fragment() {
    assert_eq!(id_of("/parcels/42?tab=1").as_deref(), Some("42"));
    assert_eq!(id_of("/parcels/42#top").as_deref(), Some("42"));
}

#[test]
fn parcel_id_from_path_rejects_collection_and_root() {
    assert_eq!(id_of("/parcels"), None);
    assert_eq!(id_of("/parcels/"), None);
    assert_eq!(id_of("/"), None);
    assert_eq!(id_of(""), None);
}

#[test]
fn detail_path_with_reserved_characters_reads_back_the_same_id() {
    for id in ["a/b?c", "box #1", "ж-42", "100%"] {
        let path = parcel_detail_path(id);
        assert_eq!(id_of(&path).as_deref(), Some(id), "{path}");
    }
}

#[test]
fn parcel_id_from_path_keeps_malformed_escapes() {
    assert_eq!(id_of("/parcels/100%").as_deref(), Some("100%"));
    assert_eq!(id_of("/parcels/%zz1").as_deref(), Some("%zz1"));
    assert_eq!(id_of("/parcels/%+1").as_deref(), Some("%+1"));
}
