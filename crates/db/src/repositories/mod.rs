//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod hotel_repo;

pub use hotel_repo::HotelRepo;
