//! # fauxstore: fake-data entity layer
//!
//! Model definitions declare typed properties; when an entity is persisted
//! without an explicit value for a declared field, the field is filled with
//! a generated value. Resolution order per field:
//!
//! 1. an explicitly assigned value,
//! 2. the property's declared default,
//! 3. an explicitly bound generator method (`.fake("email")`),
//! 4. a generator method whose name equals the field's name,
//! 5. the property kind's fallback generator.
//!
//! Persistence itself lives behind the [`Datastore`] trait; this crate only
//! prepares the entity before handing it over.

pub mod datastore;
pub mod error;
pub mod model;
pub mod property;

mod fill;

// Re-export core traits and types
pub use datastore::{Datastore, MemoryDatastore};
pub use error::{ModelError, ModelResult};
pub use model::{Entity, ModelDefinition};
pub use property::{Property, PropertyKind};

// The generator half, for callers that only pull in this crate
pub use fauxstore_faker::{seed, FakeValue, Faker, GeoPoint, Key, UserRef, ValueKind};
