//! Shared plumbing for Kindred services: env configuration, tracing,
//! HTTP middleware, health checks and SeaORM query helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
