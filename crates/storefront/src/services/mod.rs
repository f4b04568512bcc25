//! Outward-facing service clients and domain services.

pub mod auth;
pub mod email;
pub mod exchange;
pub mod sample;
