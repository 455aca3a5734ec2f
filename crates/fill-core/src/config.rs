//! Fill configuration for one target type.
//!
//! A [`FillConfig`] holds every override the filler consults while
//! populating a graph: generator tables keyed by type or by property,
//! ignore sets, explicit visit ordering, interface implementations, the
//! mocking provider, collection size bounds, and the unknown-type and
//! cycle policies. Configurations are built once during setup and read-only
//! while a fill is in flight.

use crate::generator::{InterfaceMocker, SharedGenerator, ValueGenerator};
use crate::types::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Structural identity of a property: declaring type plus name.
///
/// Two keys compare equal whenever both components match, so an override
/// registered during setup applies to every later resolution of the same
/// property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey {
    /// Type the property is declared on
    pub declaring_type: TypeId,

    /// Property name
    pub name: String,
}

impl PropertyKey {
    /// Create a property key.
    pub fn new(declaring_type: impl Into<TypeId>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}

/// Explicit position of a property in the visitation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOrder {
    /// Visit before all unmarked properties
    First,
    /// Visit after all unmarked properties
    Last,
}

/// What to do when a circular type reference is detected during an object
/// fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Fail the fill with a circular-reference error
    #[default]
    Fail,
    /// Substitute the type's zero/absent value and continue
    UseDefault,
}

/// The resolved set of overrides, generators and bounds applied while
/// filling one target type's graph.
#[derive(Clone, Default)]
pub struct FillConfig {
    type_generators: HashMap<TypeId, SharedGenerator>,
    property_generators: HashMap<PropertyKey, SharedGenerator>,
    ignored_types: HashSet<TypeId>,
    ignored_properties: HashSet<PropertyKey>,
    visit_marks: Vec<(PropertyKey, VisitOrder)>,
    implementations: HashMap<TypeId, TypeId>,
    mocker: Option<Arc<dyn InterfaceMocker>>,
    list_bounds: Option<(usize, usize)>,
    map_bounds: Option<(usize, usize)>,
    ignore_unknown_types: bool,
    cycle_policy: CyclePolicy,
}

/// Default element-count bounds for list fills, inclusive.
pub const DEFAULT_LIST_BOUNDS: (usize, usize) = (1, 25);

/// Default key-count bounds for map fills, inclusive.
pub const DEFAULT_MAP_BOUNDS: (usize, usize) = (1, 10);

impl FillConfig {
    /// Create an empty configuration with default bounds and policies.
    ///
    /// No generators are registered; the filler crate's setup layer seeds
    /// scalar defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator for every occurrence of a type.
    pub fn with_generator_for(
        mut self,
        type_name: impl Into<TypeId>,
        generator: impl ValueGenerator + 'static,
    ) -> Self {
        self.type_generators
            .insert(type_name.into(), Arc::new(generator));
        self
    }

    /// Register a generator for one specific property, identified by
    /// declaring type and name. Property generators win over every
    /// type-level strategy.
    pub fn with_property_generator(
        mut self,
        declaring_type: impl Into<TypeId>,
        property: impl Into<String>,
        generator: impl ValueGenerator + 'static,
    ) -> Self {
        self.property_generators.insert(
            PropertyKey::new(declaring_type, property),
            Arc::new(generator),
        );
        self
    }

    /// Skip every property whose declared type matches.
    pub fn with_ignored_type(mut self, type_name: impl Into<TypeId>) -> Self {
        self.ignored_types.insert(type_name.into());
        self
    }

    /// Skip one specific property.
    pub fn with_ignored_property(
        mut self,
        declaring_type: impl Into<TypeId>,
        property: impl Into<String>,
    ) -> Self {
        self.ignored_properties
            .insert(PropertyKey::new(declaring_type, property));
        self
    }

    /// Mark a property to be visited first or last. Marks of the same kind
    /// keep the order they were registered in.
    pub fn with_property_order(
        mut self,
        declaring_type: impl Into<TypeId>,
        property: impl Into<String>,
        order: VisitOrder,
    ) -> Self {
        self.visit_marks
            .push((PropertyKey::new(declaring_type, property), order));
        self
    }

    /// Resolve an interface or abstract type to a concrete implementation
    /// type.
    pub fn with_implementation(
        mut self,
        interface: impl Into<TypeId>,
        implementation: impl Into<TypeId>,
    ) -> Self {
        self.implementations
            .insert(interface.into(), implementation.into());
        self
    }

    /// Install a mocking provider for interface types without a configured
    /// implementation.
    pub fn with_mocker(mut self, mocker: impl InterfaceMocker + 'static) -> Self {
        self.mocker = Some(Arc::new(mocker));
        self
    }

    /// Set the inclusive element-count bounds for list fills.
    pub fn with_list_items(mut self, min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "list bounds must satisfy min <= max");
        self.list_bounds = Some((min, max));
        self
    }

    /// Set the inclusive key-count bounds for map fills.
    pub fn with_map_keys(mut self, min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "map bounds must satisfy min <= max");
        self.map_bounds = Some((min, max));
        self
    }

    /// Produce a type's zero value instead of failing when it reaches the
    /// generator fallback without a registered generator.
    pub fn with_ignore_unknown_types(mut self, ignore: bool) -> Self {
        self.ignore_unknown_types = ignore;
        self
    }

    /// Set the circular-reference policy.
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Look up the generator registered for a type.
    pub fn generator_for(&self, type_name: &TypeId) -> Option<&SharedGenerator> {
        self.type_generators.get(type_name)
    }

    /// Look up the generator registered for a specific property.
    pub fn property_generator(&self, key: &PropertyKey) -> Option<&SharedGenerator> {
        self.property_generators.get(key)
    }

    /// Whether properties of this type are skipped.
    pub fn is_type_ignored(&self, type_name: &TypeId) -> bool {
        self.ignored_types.contains(type_name)
    }

    /// Whether this specific property is skipped.
    pub fn is_property_ignored(&self, key: &PropertyKey) -> bool {
        self.ignored_properties.contains(key)
    }

    /// Explicit visit marks, in registration order.
    pub fn visit_marks(&self) -> &[(PropertyKey, VisitOrder)] {
        &self.visit_marks
    }

    /// The configured implementation type for an interface, if any.
    pub fn implementation_of(&self, interface: &TypeId) -> Option<&TypeId> {
        self.implementations.get(interface)
    }

    /// The configured mocking provider, if any.
    pub fn mocker(&self) -> Option<&Arc<dyn InterfaceMocker>> {
        self.mocker.as_ref()
    }

    /// Inclusive element-count bounds for list fills.
    pub fn list_bounds(&self) -> (usize, usize) {
        self.list_bounds.unwrap_or(DEFAULT_LIST_BOUNDS)
    }

    /// Inclusive key-count bounds for map fills.
    pub fn map_bounds(&self) -> (usize, usize) {
        self.map_bounds.unwrap_or(DEFAULT_MAP_BOUNDS)
    }

    /// Whether unknown types fall back to their zero value.
    pub fn ignore_unknown_types(&self) -> bool {
        self.ignore_unknown_types
    }

    /// The circular-reference policy.
    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }
}

impl fmt::Debug for FillConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FillConfig")
            .field("type_generators", &self.type_generators.len())
            .field("property_generators", &self.property_generators.len())
            .field("ignored_types", &self.ignored_types.len())
            .field("ignored_properties", &self.ignored_properties.len())
            .field("visit_marks", &self.visit_marks)
            .field("implementations", &self.implementations)
            .field("has_mocker", &self.mocker.is_some())
            .field("list_bounds", &self.list_bounds())
            .field("map_bounds", &self.map_bounds())
            .field("ignore_unknown_types", &self.ignore_unknown_types)
            .field("cycle_policy", &self.cycle_policy)
            .finish()
    }
}
