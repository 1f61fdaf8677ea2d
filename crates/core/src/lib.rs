//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup):
//! the error model, field validation, and the small value objects shared by the
//! inventory model.

pub mod entity;
pub mod error;
pub mod percent;
pub mod sku;
pub mod validate;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use percent::Percent;
pub use sku::Sku;
pub use value_object::ValueObject;
