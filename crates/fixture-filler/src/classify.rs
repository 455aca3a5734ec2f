//! Type classification: which generation strategy applies to a type.

use fill_core::{FillConfig, TypeDescriptor, TypeId, TypeKind, TypeRegistry};
use std::collections::HashSet;

/// The generation strategy selected for a type. First match wins, checked
/// in the order the variants are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A generator is registered for the type in the configuration
    Generator,
    /// Associative container fill
    Map,
    /// Ordered sequence fill
    List,
    /// Interface or abstract type resolution
    Abstract,
    /// Plain object: construct, then fill properties recursively
    Poco,
    /// Uniform random variant pick
    Enum,
    /// No strategy applies; the generator fallback decides (fail, or zero
    /// value when unknown types are ignored)
    Unsupported,
}

/// Classify a type against a configuration.
///
/// A type counts as a plain object ("POCO") when it is a non-abstract
/// object declaring at least one property on itself or an ancestor.
pub fn classify(
    registry: &TypeRegistry,
    descriptor: &TypeDescriptor,
    config: &FillConfig,
) -> Strategy {
    if config.generator_for(&descriptor.name).is_some() {
        return Strategy::Generator;
    }
    match &descriptor.kind {
        TypeKind::Map { .. } => Strategy::Map,
        TypeKind::List { .. } => Strategy::List,
        TypeKind::Interface { .. } | TypeKind::Object { is_abstract: true, .. } => {
            Strategy::Abstract
        }
        TypeKind::Object { .. } if registry.has_properties(descriptor) => Strategy::Poco,
        TypeKind::Enum { .. } => Strategy::Enum,
        _ => Strategy::Unsupported,
    }
}

/// Validity pre-check used when selecting constructors: whether a fill of
/// this type can succeed under the given configuration.
///
/// This is pure predicate evaluation; nothing is generated. A type is valid
/// when it has a generator, is a list/map whose element/key/value types are
/// themselves valid, is a plain object, or is an interface/abstract type
/// with a configured implementation or a mocking provider. Enumerations are
/// deliberately not valid here; register a generator to pass one as a
/// constructor argument.
pub fn is_fillable(registry: &TypeRegistry, type_name: &TypeId, config: &FillConfig) -> bool {
    let mut visiting = HashSet::new();
    is_fillable_inner(registry, type_name, config, &mut visiting)
}

fn is_fillable_inner(
    registry: &TypeRegistry,
    type_name: &TypeId,
    config: &FillConfig,
    visiting: &mut HashSet<TypeId>,
) -> bool {
    let Some(descriptor) = registry.lookup(type_name) else {
        return false;
    };
    if config.generator_for(type_name).is_some() {
        return true;
    }
    if !visiting.insert(type_name.clone()) {
        // Already being checked further up; the fill-time cycle machinery
        // owns this case.
        return true;
    }
    match &descriptor.kind {
        TypeKind::List { element } => is_fillable_inner(registry, element, config, visiting),
        TypeKind::Map { key, value } => {
            is_fillable_inner(registry, key, config, visiting)
                && is_fillable_inner(registry, value, config, visiting)
        }
        TypeKind::Interface { .. } | TypeKind::Object { is_abstract: true, .. } => {
            config.implementation_of(type_name).is_some() || config.mocker().is_some()
        }
        TypeKind::Object { .. } => registry.has_properties(descriptor),
        _ => false,
    }
}
