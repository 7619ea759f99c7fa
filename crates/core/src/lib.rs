//! Echeveria Core - Shared types library.
//!
//! This crate provides common types used across the Echeveria Store
//! components:
//! - `storefront` - Server-rendered storefront site
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere, including in the mock
//! record store used by the integration tests.
//!
//! # Modules
//!
//! - [`types`] - The `Product` entity, its type-safe ID, and the fixed
//!   image-asset set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
