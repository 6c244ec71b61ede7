//! Domain layer for the hotel records service.
//!
//! Holds the record, request and view types, inbound validation, the mapper,
//! the persistence port with its in-memory implementation, and the service
//! that orchestrates them. Nothing here knows about HTTP or SQL.

pub mod error;
pub mod hotel;
pub mod mapper;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
