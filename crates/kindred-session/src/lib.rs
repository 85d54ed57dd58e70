//! Browser-session helpers shared by Kindred services.
//!
//! Provides signed flash notices and the `AdminAccess` extractor.

pub mod admin;
pub mod flash;
