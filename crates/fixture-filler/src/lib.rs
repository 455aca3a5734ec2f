//! Recursive random object-graph filler for test fixtures.
//!
//! This crate populates object graphs of registered types with random,
//! type-appropriate values, so test fixtures don't need hand-written sample
//! data. Given a target type the [`Filler`] recursively discovers settable
//! properties (and constructor parameters where needed) and synthesizes a
//! value for each one: scalars from registered generators, collections
//! filled with recursively generated elements, nested objects filled
//! recursively, interfaces resolved via configured implementations or a
//! mocking provider, enums picked at random.
//!
//! # Architecture
//!
//! ```text
//! TypeRegistry (fill-core, YAML or code)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │      Filler      │
//! │                  │
//! │  - setup         │   per-type FillConfig resolution
//! │  - rng (StdRng)  │   seeded or entropy
//! └────────┬─────────┘
//!          │ classify → { generator │ map │ list │ abstract │ poco │ enum }
//!          ▼
//!    Value { scalars, lists, maps, objects, enum picks }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_core::TypeRegistry;
//! use fixture_filler::{Filler, FillerSetup};
//!
//! let registry = TypeRegistry::from_yaml(r#"
//! types:
//!   - name: Address
//!     kind: object
//!     properties:
//!       - name: city
//!         type: text
//!
//!   - name: Person
//!     kind: object
//!     properties:
//!       - name: name
//!         type: text
//!       - name: age
//!         type: int
//!       - name: home
//!         type: Address
//! "#).unwrap();
//!
//! let mut filler = Filler::with_seed(registry, FillerSetup::new(), 42);
//! let person = filler.create("Person").unwrap();
//!
//! assert!(person.get_field("name").unwrap().as_str().is_some());
//! assert!(person.get_field("home").unwrap().get_field("city").is_some());
//! ```
//!
//! # Errors
//!
//! Every failure is fatal to the current fill and surfaces as a
//! [`FillError`]; a failed call never returns a partially-populated value.
//! The one locally-resolved case is a list/map element type already open on
//! the cycle tracker, which produces an empty container by design.

pub mod classify;
mod collections;
pub mod error;
pub mod filler;
pub mod generators;
pub mod interfaces;
pub mod setup;
pub mod tracker;

// Re-exports for convenience
pub use classify::{classify, is_fillable, Strategy};
pub use error::FillError;
pub use filler::{CreateMany, Filler};
pub use interfaces::StubMocker;
pub use setup::{default_fill_config, FillerSetup};
pub use tracker::TypeTracker;
