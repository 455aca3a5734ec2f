//! The filler: recursive fill/instantiate engine.
//!
//! [`Filler`] walks a type's settable properties (inherited ones included),
//! resolves a value for each one according to the dispatch priority
//! (registered generator, map, list, interface/abstract, nested object,
//! enum, generator fallback), and recurses into nested objects under cycle
//! tracking. One [`TypeTracker`] is owned by each top-level `create`/`fill`
//! call and shared across the whole recursive subtree, constructor
//! arguments included.

use crate::classify::is_fillable;
use crate::error::FillError;
use crate::setup::FillerSetup;
use crate::tracker::TypeTracker;
use fill_core::{
    Constructor, CyclePolicy, FillConfig, PropertyKey, ResolvedProperty, TypeDescriptor, TypeId,
    TypeKind, TypeRegistry, Value, VisitOrder,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fills object graphs of registered types with random, type-appropriate
/// values.
///
/// A filler owns its RNG, its [`FillerSetup`] and a registry snapshot. It is
/// synchronous and single-threaded per call; a `create` or `fill` runs to
/// completion (or failure) before returning, and a failed fill returns no
/// partially-populated value.
///
/// # Example
///
/// ```rust
/// use fill_core::{Property, TypeDescriptor, TypeRegistry};
/// use fixture_filler::{Filler, FillerSetup};
///
/// let mut registry = TypeRegistry::new();
/// registry.register(TypeDescriptor::object(
///     "Address",
///     vec![Property::new("city", "text")],
/// ));
/// registry.validate().unwrap();
///
/// let mut filler = Filler::with_seed(registry, FillerSetup::new(), 42);
/// let address = filler.create("Address").unwrap();
/// assert!(!address.get_field("city").unwrap().as_str().unwrap().is_empty());
/// ```
pub struct Filler {
    pub(crate) registry: Arc<TypeRegistry>,
    pub(crate) setup: FillerSetup,
    pub(crate) rng: StdRng,
}

impl Filler {
    /// Create a filler seeded from entropy. Independent calls produce
    /// different graphs.
    pub fn new(registry: TypeRegistry, setup: FillerSetup) -> Self {
        Self {
            registry: Arc::new(registry),
            setup,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a filler with an explicit seed for reproducible fixtures.
    pub fn with_seed(registry: TypeRegistry, setup: FillerSetup, seed: u64) -> Self {
        Self {
            registry: Arc::new(registry),
            setup,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The registry this filler runs against.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The setup this filler resolves configurations from.
    pub fn setup(&self) -> &FillerSetup {
        &self.setup
    }

    /// Create one fully-filled instance of the given type.
    pub fn create(&mut self, type_name: impl Into<TypeId>) -> Result<Value, FillError> {
        let type_name = type_name.into();
        let config = self.setup.config_for(&type_name);
        let mut tracker = TypeTracker::new();
        self.resolve_value(&type_name, &config, &mut tracker)
    }

    /// Lazily create several fully-filled instances. Each yielded instance
    /// gets a fresh cycle tracker; errors are yielded per item.
    pub fn create_many(
        &mut self,
        type_name: impl Into<TypeId>,
        count: usize,
    ) -> CreateMany<'_> {
        CreateMany {
            filler: self,
            type_name: type_name.into(),
            remaining: count,
        }
    }

    /// Fill the settable properties of an existing object instance in place.
    pub fn fill(&mut self, instance: &mut Value) -> Result<(), FillError> {
        let Some(type_name) = instance.instance_type().cloned() else {
            return Err(FillError::NotFillable(format!("{instance:?}")));
        };
        if instance.as_object().is_none() {
            return Err(FillError::NotFillable(format!("{instance:?}")));
        }
        let mut tracker = TypeTracker::new();
        tracker.push(type_name);
        let result = self.fill_properties(instance, &mut tracker);
        tracker.pop();
        result
    }

    /// Resolve a value for a type. Dispatch priority: registered generator,
    /// map, list, interface/abstract, plain object, enum, generator
    /// fallback.
    pub(crate) fn resolve_value(
        &mut self,
        type_name: &TypeId,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        let registry = Arc::clone(&self.registry);
        let descriptor = registry.get(type_name)?;

        if config.generator_for(type_name).is_some() {
            return self.random_value(descriptor, config);
        }
        match &descriptor.kind {
            TypeKind::Map { key, value } => self.fill_map(descriptor, key, value, config, tracker),
            TypeKind::List { element } => self.fill_list(descriptor, element, config, tracker),
            TypeKind::Interface { .. } | TypeKind::Object { is_abstract: true, .. } => {
                self.resolve_abstract(descriptor, config, tracker)
            }
            TypeKind::Object { .. } if registry.has_properties(descriptor) => {
                self.fill_object(descriptor, config, tracker)
            }
            TypeKind::Enum { variants } if !variants.is_empty() => {
                let index = self.rng.gen_range(0..variants.len());
                Ok(Value::Enum {
                    type_name: descriptor.name.clone(),
                    variant: variants[index].clone(),
                })
            }
            _ => self.random_value(descriptor, config),
        }
    }

    /// Generator fallback: the configured generator, the type's zero value
    /// when unknown types are ignored, otherwise an error.
    pub(crate) fn random_value(
        &mut self,
        descriptor: &TypeDescriptor,
        config: &FillConfig,
    ) -> Result<Value, FillError> {
        if let Some(generator) = config.generator_for(&descriptor.name) {
            return Ok(generator.generate(&mut self.rng));
        }
        if config.ignore_unknown_types() {
            debug!(type_name = %descriptor.name, "no generator registered, substituting the default value");
            return Ok(descriptor.default_value());
        }
        warn!(type_name = %descriptor.name, "type was not registered in the randomizer");
        Err(FillError::UnregisteredType(descriptor.name.clone()))
    }

    /// Cycle-guarded object fill: check the tracker, construct, fill
    /// properties, pop.
    pub(crate) fn fill_object(
        &mut self,
        descriptor: &TypeDescriptor,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        if tracker.contains(&descriptor.name) {
            return cycle_outcome(descriptor, config);
        }
        tracker.push(descriptor.name.clone());
        let result = self
            .construct(descriptor, config, tracker)
            .and_then(|mut instance| {
                self.fill_properties(&mut instance, tracker)?;
                Ok(instance)
            });
        // Pop once the object is complete so later siblings may reuse the
        // same type.
        tracker.pop();
        result
    }

    /// Select a usable constructor and build a bare instance. A
    /// zero-argument constructor (explicit or implicit) is used directly;
    /// otherwise candidates are tried by ascending parameter count and the
    /// first one whose parameters all pass the validity pre-check is filled
    /// and invoked.
    fn construct(
        &mut self,
        descriptor: &TypeDescriptor,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        let registry = Arc::clone(&self.registry);
        let TypeKind::Object {
            is_abstract: false,
            constructors,
            ..
        } = &descriptor.kind
        else {
            warn!(type_name = %descriptor.name, "type cannot be instantiated directly");
            return Err(FillError::Construction(descriptor.name.clone()));
        };

        if constructors.is_empty() || constructors.iter().any(|c| c.params.is_empty()) {
            return Ok(Value::empty_object(descriptor.name.clone()));
        }

        let mut candidates: Vec<&Constructor> = constructors.iter().collect();
        candidates.sort_by_key(|c| c.params.len());

        for candidate in candidates {
            let all_fillable = candidate
                .params
                .iter()
                .all(|p| is_fillable(&registry, &p.param_type, config));
            if !all_fillable {
                continue;
            }
            let mut fields = HashMap::new();
            for param in &candidate.params {
                let value = self.resolve_value(&param.param_type, config, tracker)?;
                fields.insert(param.name.clone(), value);
            }
            return Ok(Value::Object {
                type_name: descriptor.name.clone(),
                fields,
            });
        }

        warn!(type_name = %descriptor.name, "no constructor has parameters that can all be filled");
        Err(FillError::Construction(descriptor.name.clone()))
    }

    /// Fill every settable property of an object instance. The instance
    /// resolves its own configuration by concrete type.
    pub(crate) fn fill_properties(
        &mut self,
        instance: &mut Value,
        tracker: &mut TypeTracker,
    ) -> Result<(), FillError> {
        let registry = Arc::clone(&self.registry);
        let Value::Object { type_name, fields } = instance else {
            return Err(FillError::NotFillable(format!("{instance:?}")));
        };
        let descriptor = registry.get(type_name)?;
        let config = self.setup.config_for(type_name);

        let properties = registry.settable_properties(descriptor)?;
        if properties.is_empty() {
            return Ok(());
        }

        for property in order_properties(&config, properties) {
            if config.is_type_ignored(&property.property_type) {
                continue;
            }
            let key = PropertyKey::new(property.declared_in.clone(), property.name.clone());
            if config.is_property_ignored(&key) {
                continue;
            }
            // Property-specific generators win over every type-level
            // strategy.
            if let Some(generator) = config.property_generator(&key) {
                let value = generator.generate(&mut self.rng);
                fields.insert(property.name, value);
                continue;
            }
            let value = self.resolve_value(&property.property_type, &config, tracker)?;
            fields.insert(property.name, value);
        }
        Ok(())
    }
}

/// Outcome of a detected circular reference, per the configured policy.
pub(crate) fn cycle_outcome(
    descriptor: &TypeDescriptor,
    config: &FillConfig,
) -> Result<Value, FillError> {
    match config.cycle_policy() {
        CyclePolicy::Fail => {
            warn!(type_name = %descriptor.name, "circular type reference detected");
            Err(FillError::CircularReference(descriptor.name.clone()))
        }
        CyclePolicy::UseDefault => {
            debug!(type_name = %descriptor.name, "circular type reference detected, substituting the default value");
            Ok(descriptor.default_value())
        }
    }
}

/// Build the visitation queue: properties marked first (in registration
/// order), then unmarked properties in declaration order, then properties
/// marked last.
fn order_properties(
    config: &FillConfig,
    properties: Vec<ResolvedProperty>,
) -> Vec<ResolvedProperty> {
    let marks = config.visit_marks();
    if marks.is_empty() {
        return properties;
    }

    let mut slots: Vec<Option<ResolvedProperty>> = properties.into_iter().map(Some).collect();
    let mut take = |key: &PropertyKey| {
        slots
            .iter_mut()
            .find(|slot| {
                slot.as_ref()
                    .is_some_and(|p| p.declared_in == key.declaring_type && p.name == key.name)
            })
            .and_then(Option::take)
    };

    let mut first = Vec::new();
    let mut last = Vec::new();
    for (key, order) in marks {
        match order {
            VisitOrder::First => first.extend(take(key)),
            VisitOrder::Last => last.extend(take(key)),
        }
    }

    let mut queue = first;
    queue.extend(slots.into_iter().flatten());
    queue.extend(last);
    queue
}

/// Lazy iterator over freshly created instances, one fill per `next`.
pub struct CreateMany<'a> {
    filler: &'a mut Filler,
    type_name: TypeId,
    remaining: usize,
}

impl Iterator for CreateMany<'_> {
    type Item = Result<Value, FillError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.filler.create(self.type_name.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CreateMany<'_> {}
