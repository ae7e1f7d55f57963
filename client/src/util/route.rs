//! Route path helpers.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::net::api::encode_path_segment;

/// Route of the creation form.
pub const CREATE_ROUTE: &str = "/";
/// Route of the parcel table.
pub const MY_PARCELS_ROUTE: &str = "/my-parcels";

/// Detail route for a parcel. The id is percent-encoded into one segment.
pub fn parcel_detail_path(parcel_id: &str) -> String {
    format!("/parcels/{}", encode_path_segment(parcel_id))
}

/// Extract the parcel identifier from a detail route path.
///
/// Uses the last non-empty segment, ignoring any query string or fragment,
/// and undoes the encoding applied by [`parcel_detail_path`].
/// Returns `None` for the bare `/parcels` collection path.
pub fn parcel_id_from_path(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let last = segments.next_back()?;
    if last == "parcels" && segments.next_back().is_none() {
        return None;
    }
    Some(decode_path_segment(last))
}

/// Decode `%XX` escapes. Malformed escapes are kept as literal text.
fn decode_path_segment(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| raw.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
