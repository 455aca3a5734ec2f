//! Generator and mocking seams.
//!
//! A [`ValueGenerator`] is a value-producing strategy registered against a
//! type or a specific property. The engine only ever calls `generate`; what
//! the value looks like is entirely up to the registered strategy. Closures
//! implement the trait directly:
//!
//! ```rust
//! use fill_core::{Value, ValueGenerator};
//! use rand::RngCore;
//!
//! let fixed = |_rng: &mut dyn RngCore| Value::Int32(7);
//! let mut rng = rand::thread_rng();
//! assert_eq!(fixed.generate(&mut rng), Value::Int32(7));
//! ```

use crate::types::TypeDescriptor;
use crate::values::Value;
use rand::RngCore;
use std::sync::Arc;

/// A value-producing strategy for one type or property.
///
/// Implementations must be deterministic given the RNG stream, so a seeded
/// fill reproduces the same graph.
pub trait ValueGenerator: Send + Sync {
    /// Produce one value.
    fn generate(&self, rng: &mut dyn RngCore) -> Value;
}

impl<F> ValueGenerator for F
where
    F: Fn(&mut dyn RngCore) -> Value + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        self(rng)
    }
}

/// Shared handle to a registered generator.
pub type SharedGenerator = Arc<dyn ValueGenerator>;

/// Produces stand-in instances for interface types that have no configured
/// implementation.
///
/// The returned value must be an object whose `type_name` resolves in the
/// registry the filler runs against (typically the interface type itself),
/// because the filler still populates the stand-in's settable properties
/// after mocking it.
pub trait InterfaceMocker: Send + Sync {
    /// Produce an instance implementing the given interface type.
    fn create(&self, interface: &TypeDescriptor, rng: &mut dyn RngCore) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_closure_generator() {
        let gen = |_rng: &mut dyn RngCore| Value::Text("fixed".to_string());
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(gen.generate(&mut rng), Value::Text("fixed".to_string()));
    }

    #[test]
    fn test_shared_generator_object_safety() {
        let shared: SharedGenerator = Arc::new(|_rng: &mut dyn RngCore| Value::Bool(true));
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(shared.generate(&mut rng), Value::Bool(true));
    }
}
