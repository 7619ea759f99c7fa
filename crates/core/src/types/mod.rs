//! Core types for the Echeveria Store.
//!
//! This module provides the domain entity and type-safe wrappers shared by
//! the storefront and the tests.

pub mod id;
pub mod image;
pub mod product;

pub use id::ProductId;
pub use image::{ImageOption, IMAGE_OPTIONS, is_known_image};
pub use product::{NewProduct, Product};
