//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the matching service in `hotel_core` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod hotel;
