//! Repository for the `hotels` table.

use hotel_core::hotel::Hotel;
use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::hotel::HotelRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, city, country, stars, description";

/// Provides the queries backing [`PgHotelStore`](crate::PgHotelStore).
pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel, returning the created row with its identity id.
    ///
    /// `hotel.id` is ignored; the column is `GENERATED ALWAYS`.
    pub async fn create(pool: &PgPool, hotel: &Hotel) -> Result<HotelRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (name, address, city, country, stars, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HotelRow>(&query)
            .bind(&hotel.name)
            .bind(&hotel.address)
            .bind(&hotel.city)
            .bind(&hotel.country)
            .bind(hotel.stars)
            .bind(&hotel.description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of the row with the given `id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        hotel: &Hotel,
    ) -> Result<Option<HotelRow>, sqlx::Error> {
        let query = format!(
            "UPDATE hotels SET
                name = $2,
                address = $3,
                city = $4,
                country = $5,
                stars = $6,
                description = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HotelRow>(&query)
            .bind(id)
            .bind(&hotel.name)
            .bind(&hotel.address)
            .bind(&hotel.city)
            .bind(&hotel.country)
            .bind(hotel.stars)
            .bind(&hotel.description)
            .fetch_optional(pool)
            .await
    }

    /// Find a hotel by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HotelRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, HotelRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
