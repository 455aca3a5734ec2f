//! Candidate-pick and constant generators.

use fill_core::{Value, ValueGenerator};
use rand::{Rng, RngCore};

/// Picks one of several candidate values uniformly at random. An empty
/// candidate list produces `Null`.
#[derive(Debug, Clone)]
pub struct OneOf {
    values: Vec<Value>,
}

impl OneOf {
    /// Create a pick generator over the given candidates.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl ValueGenerator for OneOf {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        if self.values.is_empty() {
            return Value::Null;
        }
        self.values[rng.gen_range(0..self.values.len())].clone()
    }
}

/// Always produces the same value.
#[derive(Debug, Clone)]
pub struct StaticValue {
    value: Value,
}

impl StaticValue {
    /// Create a constant generator.
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl ValueGenerator for StaticValue {
    fn generate(&self, _rng: &mut dyn RngCore) -> Value {
        self.value.clone()
    }
}
