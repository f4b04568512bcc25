//! BOLES Smart Home storefront library.
//!
//! This crate provides the storefront as a library so the binary, the CLI,
//! and the integration tests can share the router, facade, and services.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
