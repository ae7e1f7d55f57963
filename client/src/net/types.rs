//! Wire DTOs exchanged with the Parcel Service.
//!
//! DESIGN
//! ======
//! Read models are lenient (the service returns slightly different shapes from
//! its list and detail endpoints), write models are strict and always emit the
//! server-populated fields as explicit `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Parcel category accepted by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelType {
    Clothes,
    Electronics,
    Others,
}

impl ParcelType {
    /// Every category, in the order the creation form offers them.
    pub const ALL: [Self; 3] = [Self::Clothes, Self::Electronics, Self::Others];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clothes => "clothes",
            Self::Electronics => "electronics",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for ParcelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known parcel categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown parcel type: {0}")]
pub struct UnknownParcelType(pub String);

impl FromStr for ParcelType {
    type Err = UnknownParcelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownParcelType(s.to_owned()))
    }
}

/// A parcel as returned by `GET /parcels/my` and `GET /parcels/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Opaque identifier (UUID string on the current service).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display label.
    pub name: String,
    /// Category name. The detail endpoint nests it as `{id, name}`.
    #[serde(deserialize_with = "deserialize_parcel_type_name")]
    pub parcel_type: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Declared content value in minor units.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub content_value_cents: i64,
    /// Delivery cost in minor units, `None` until the service prices it.
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub delivery_cost_cents: Option<i64>,
    /// Owning session. Accepted from the service but never rendered.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /parcels`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateParcelRequest {
    pub name: String,
    pub weight: f64,
    pub content_value_cents: f64,
    pub parcel_type: ParcelType,
    /// Filled from the session cookie by the service.
    pub session_id: Option<String>,
    /// Filled by the pricing worker.
    pub delivery_cost_cents: Option<i64>,
    /// Resolved from `parcel_type` by the service.
    pub parcel_type_id: Option<i64>,
}

impl CreateParcelRequest {
    /// Build a request with every server-populated field left null.
    pub fn new(
        name: String,
        weight: f64,
        content_value_cents: f64,
        parcel_type: ParcelType,
    ) -> Self {
        Self {
            name,
            weight,
            content_value_cents,
            parcel_type,
            session_id: None,
            delivery_cost_cents: None,
            parcel_type_id: None,
        }
    }
}

/// Acknowledgement body of `POST /parcels` (`202 Accepted`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParcelAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Entry of `GET /parcel_types`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelTypeRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_parcel_type_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => Ok(name),
        serde_json::Value::Object(map) => match map.get("name") {
            Some(serde_json::Value::String(name)) => Ok(name.clone()),
            _ => Err(D::Error::custom("parcel_type object is missing a name")),
        },
        _ => Err(D::Error::custom("expected parcel_type string or object")),
    }
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    i64_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        _ => Err("expected number"),
    }
}
