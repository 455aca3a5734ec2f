//! Numeric range generators.

use fill_core::{Value, ValueGenerator};
use rand::{Rng, RngCore};

/// Generates a random `big_int` in an inclusive range.
#[derive(Debug, Clone)]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// Create a generator for the inclusive range `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "int range must satisfy min <= max");
        Self { min, max }
    }
}

impl ValueGenerator for IntRange {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        Value::Int64(rng.gen_range(self.min..=self.max))
    }
}

/// Generates a random `double` in an inclusive range. The zero-to-one unit
/// range is the default for floating point scalars.
#[derive(Debug, Clone)]
pub struct DoubleRange {
    min: f64,
    max: f64,
}

impl DoubleRange {
    /// Create a generator for the inclusive range `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "double range must satisfy min <= max");
        Self { min, max }
    }

    /// The unit range `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl ValueGenerator for DoubleRange {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        Value::Float64(rng.gen_range(self.min..=self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = IntRange::new(10, 20);

        for _ in 0..100 {
            let value = generator.generate(&mut rng);
            let v = value.as_i64().expect("int range produces big_int");
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_int_range_degenerate() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = IntRange::new(7, 7).generate(&mut rng);
        assert_eq!(value, Value::Int64(7));
    }

    #[test]
    fn test_double_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = DoubleRange::new(0.0, 100.0);

        for _ in 0..100 {
            let value = generator.generate(&mut rng);
            let v = value.as_f64().expect("double range produces double");
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
