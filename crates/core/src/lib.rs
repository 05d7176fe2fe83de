//! `freightdesk-core` — shared domain building blocks.
//!
//! Identifiers, the domain error type, and the entity/value-object traits used
//! by the freight domain. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{JobId, JobItemId};
pub use value_object::ValueObject;
