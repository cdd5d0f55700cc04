//! Domain types, error taxonomy, and validation rules for the notes service.
//!
//! This crate performs no I/O. The `db` crate persists what it defines and
//! the `api` crate maps its errors onto HTTP responses.

pub mod error;
pub mod notes;
pub mod types;
