//! Row model for the `hotels` table.

use hotel_core::hotel::Hotel;
use hotel_core::types::DbId;
use sqlx::FromRow;

/// A row from the `hotels` table. Every stored row has an id.
#[derive(Debug, Clone, FromRow)]
pub struct HotelRow {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub stars: i32,
    pub description: Option<String>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: Some(row.id),
            name: row.name,
            address: row.address,
            city: row.city,
            country: row.country,
            stars: row.stars,
            description: row.description,
        }
    }
}
