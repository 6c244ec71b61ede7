//! Row structs matching the database tables.
//!
//! Rows are converted to and from domain records with explicit `From` impls;
//! nothing outside this crate sees a row type.

pub mod hotel;
