//! Error types for fill operations.

use fill_core::{ModelError, TypeId};
use thiserror::Error;

/// Errors that can occur while filling an object graph.
///
/// Every variant is fatal to the current fill: the failed call returns no
/// partially-populated value.
#[derive(Debug, Error)]
pub enum FillError {
    /// No constructor of the type has parameters that can all be filled.
    #[error("no constructor of type [{0}] has parameters that can be filled with the current setup")]
    Construction(TypeId),

    /// An interface or abstract type has no generator, no configured
    /// implementation and no mocking provider.
    #[error("interface mocker missing and type [{0}] not registered for an implementation")]
    UnresolvedAbstractType(TypeId),

    /// A type reached the generator fallback without a registered generator.
    #[error("the type [{0}] was not registered in the randomizer")]
    UnregisteredType(TypeId),

    /// A circular type reference was detected and the configuration requests
    /// failure.
    #[error(
        "the type [{0}] was already encountered before, which probably means you have a circular \
         reference in your model; ignore the properties which cause this or register explicit \
         generators for them"
    )]
    CircularReference(TypeId),

    /// A map key generator produced a key that already exists. The generator
    /// has too little entropy for the requested key count; this is never
    /// retried.
    #[error("generating a key of type [{0}] produced the same value twice; check your setup")]
    DuplicateKey(TypeId),

    /// A `fill` call received a value that is not an object instance.
    #[error("only object instances can be filled, got {0}")]
    NotFillable(String),

    /// Model or registry error.
    #[error(transparent)]
    Model(#[from] ModelError),
}
