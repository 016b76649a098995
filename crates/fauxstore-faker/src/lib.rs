//! # fauxstore-faker: fake value generation
//!
//! The generator half of fauxstore: a [`Faker`] instance exposes named
//! methods producing synthetic names, addresses, numbers, timestamps and
//! identifiers, plus a name-dispatch table so callers can select a
//! generator by string at declaration time.
//!
//! A `Faker` is meant to live for the duration of one entity: the identity
//! cluster (first name, last name, username, email) is memoized per
//! instance so values generated for the same record cohere.

pub mod data;
pub mod faker;
pub mod value;

pub use faker::{generator_names, seed, Faker};
pub use value::{FakeValue, GeoPoint, Key, UserRef, ValueKind};
