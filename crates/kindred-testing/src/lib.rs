//! Test utilities for the Kindred site.
//!
//! Provides `MockAdmin` credentials, an in-memory migrated database and
//! temporary static/upload directories.
//! Import from tests only; never in production code.

pub mod auth;
pub mod db;
pub mod uploads;
