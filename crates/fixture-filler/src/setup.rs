//! Setup management: which configuration applies to which target type.
//!
//! A [`FillerSetup`] holds one default [`FillConfig`] plus optional
//! per-type overrides. Every object the filler enters resolves its own
//! configuration by concrete type, falling back to the default. Resolved
//! configurations are handed out as `Arc` snapshots so every recursive
//! frame reads the same immutable tables.

use crate::generators::{DateTimeRange, DoubleRange, DurationRange, MnemonicString, UuidV4};
use chrono::DateTime;
use fill_core::{FillConfig, ScalarKind, TypeId, Value};
use rand::{Rng, RngCore};
use std::collections::HashMap;
use std::sync::Arc;

/// A fill configuration with default generators registered for every
/// built-in scalar type.
///
/// This is the starting point for customized configurations:
///
/// ```rust
/// use fixture_filler::setup::default_fill_config;
///
/// let config = default_fill_config().with_list_items(2, 4);
/// ```
pub fn default_fill_config() -> FillConfig {
    FillConfig::new()
        .with_generator_for(ScalarKind::Bool.type_id(), |rng: &mut dyn RngCore| {
            Value::Bool(rng.gen())
        })
        .with_generator_for(ScalarKind::Int16.type_id(), |rng: &mut dyn RngCore| {
            Value::Int16(rng.gen())
        })
        .with_generator_for(ScalarKind::Int32.type_id(), |rng: &mut dyn RngCore| {
            Value::Int32(rng.gen())
        })
        .with_generator_for(ScalarKind::Int64.type_id(), |rng: &mut dyn RngCore| {
            Value::Int64(rng.gen())
        })
        .with_generator_for(ScalarKind::Float32.type_id(), |rng: &mut dyn RngCore| {
            Value::Float32(rng.gen())
        })
        .with_generator_for(ScalarKind::Float64.type_id(), DoubleRange::unit())
        .with_generator_for(ScalarKind::Char.type_id(), |rng: &mut dyn RngCore| {
            Value::Char(rng.gen_range(b'a'..=b'z') as char)
        })
        .with_generator_for(ScalarKind::Text.type_id(), MnemonicString::new(20))
        .with_generator_for(ScalarKind::Bytes.type_id(), |rng: &mut dyn RngCore| {
            let mut bytes = vec![0u8; 16];
            rng.fill_bytes(&mut bytes);
            Value::Bytes(bytes)
        })
        .with_generator_for(ScalarKind::Uuid.type_id(), UuidV4)
        .with_generator_for(
            ScalarKind::DateTime.type_id(),
            DateTimeRange::since(DateTime::UNIX_EPOCH),
        )
        .with_generator_for(
            ScalarKind::Duration.type_id(),
            DurationRange::new(0, 86_400),
        )
}

/// Resolves the right [`FillConfig`] for a given target type.
#[derive(Debug, Clone)]
pub struct FillerSetup {
    default: Arc<FillConfig>,
    per_type: HashMap<TypeId, Arc<FillConfig>>,
}

impl FillerSetup {
    /// Create a setup whose default configuration carries the built-in
    /// scalar generators.
    pub fn new() -> Self {
        Self {
            default: Arc::new(default_fill_config()),
            per_type: HashMap::new(),
        }
    }

    /// Replace the default configuration wholesale.
    pub fn with_default_config(mut self, config: FillConfig) -> Self {
        self.default = Arc::new(config);
        self
    }

    /// Use a dedicated configuration whenever an object of the given type is
    /// being filled. Nested objects of other types fall back to the default.
    pub fn with_type_config(mut self, type_name: impl Into<TypeId>, config: FillConfig) -> Self {
        self.per_type.insert(type_name.into(), Arc::new(config));
        self
    }

    /// Resolve the configuration for a target type, falling back to the
    /// default when no type-specific one was registered.
    pub fn config_for(&self, type_name: &TypeId) -> Arc<FillConfig> {
        self.per_type
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    /// The default configuration.
    pub fn default_config(&self) -> Arc<FillConfig> {
        Arc::clone(&self.default)
    }
}

impl Default for FillerSetup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_scalar_has_a_default_generator() {
        let config = default_fill_config();
        let mut rng = StdRng::seed_from_u64(42);

        for kind in ScalarKind::ALL {
            let generator = config
                .generator_for(&kind.type_id())
                .unwrap_or_else(|| panic!("no default generator for {}", kind.type_name()));
            let value = generator.generate(&mut rng);
            assert!(
                value.matches_scalar(kind),
                "default generator for {} produced {:?}",
                kind.type_name(),
                value
            );
        }
    }

    #[test]
    fn test_config_resolution_falls_back_to_default() {
        let setup = FillerSetup::new()
            .with_type_config("Person", default_fill_config().with_list_items(2, 2));

        assert_eq!(
            setup.config_for(&TypeId::new("Person")).list_bounds(),
            (2, 2)
        );
        assert_eq!(
            setup.config_for(&TypeId::new("Address")).list_bounds(),
            setup.default_config().list_bounds()
        );
    }

    #[test]
    fn test_default_text_is_non_empty() {
        let config = default_fill_config();
        let mut rng = StdRng::seed_from_u64(42);
        let value = config
            .generator_for(&ScalarKind::Text.type_id())
            .unwrap()
            .generate(&mut rng);
        assert!(!value.as_str().unwrap().is_empty());
    }
}
