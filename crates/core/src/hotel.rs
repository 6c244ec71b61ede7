//! Hotel record, inbound request and outbound view.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation::not_blank;

/// A hotel record as held by a [`HotelStore`](crate::store::HotelStore).
///
/// `id` is `None` until the first save; the store assigns it and it never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: Option<DbId>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub stars: i32,
    pub description: Option<String>,
}

/// Body of `POST /api/hotels`.
///
/// Absent or `null` fields fall back to their defaults (empty text, zero
/// stars) so they surface as field violations rather than as a
/// deserialization failure.
/// Unknown fields, including a caller-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateHotelRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub stars: i32,
    pub description: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only projection of a [`Hotel`] returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelView {
    pub id: Option<DbId>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub stars: i32,
    pub description: Option<String>,
}
