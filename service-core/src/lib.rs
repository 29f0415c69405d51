//! service-core: Shared infrastructure for zenith services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
