//! The type registry: the filler's view of the host type system.
//!
//! A [`TypeRegistry`] maps names to [`TypeDescriptor`]s. It is pre-seeded
//! with the built-in scalars, extended with model types either in code or
//! from a YAML model file, and validated so that every reference inside the
//! model resolves before any fill runs.

use crate::types::{ScalarKind, TypeDescriptor, TypeId, TypeKind};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Error type for model and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Error reading a model file
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing model YAML
    #[error("failed to parse model YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A referenced type name is not registered
    #[error("type is not registered: {0}")]
    UnknownType(TypeId),

    /// A model file declares the same type twice (or shadows a built-in)
    #[error("type is declared more than once: {0}")]
    DuplicateType(TypeId),

    /// An enumeration declares no variants
    #[error("enum type {0} declares no variants")]
    EmptyEnum(TypeId),

    /// A base reference points at something that cannot be inherited from
    #[error("base of {type_name} must be an object type, found {base}")]
    InvalidBase {
        /// The inheriting type
        type_name: TypeId,
        /// The offending base reference
        base: TypeId,
    },

    /// An inheritance chain loops back on itself
    #[error("inheritance chain of {0} loops back on itself")]
    BaseCycle(TypeId),

    /// The model file declares a version this build does not understand
    #[error("unsupported model version: {0}")]
    UnsupportedVersion(u32),
}

/// The model file version this build reads.
pub const MODEL_VERSION: u32 = 1;

/// A property as seen on a concrete type after walking its ancestor chain.
///
/// `declared_in` names the type whose declaration won (derived declarations
/// shadow base ones); it is the declaring-type half of the property's
/// override identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty {
    /// Property name
    pub name: String,

    /// Declared property type
    pub property_type: TypeId,

    /// The type whose declaration this is
    pub declared_in: TypeId,

    /// Whether a setter is reachable, directly or on an ancestor declaration
    pub settable: bool,
}

fn default_version() -> u32 {
    1
}

/// On-disk model file: a version plus named type definitions.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ModelFile {
    #[serde(default = "default_version")]
    version: u32,
    types: Vec<TypeDescriptor>,
}

/// Name-to-descriptor table for every type the filler can encounter.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<TypeId, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create a registry holding only the built-in scalar types.
    pub fn new() -> Self {
        let mut types = HashMap::new();
        for kind in ScalarKind::ALL {
            let descriptor = TypeDescriptor::scalar(kind);
            types.insert(descriptor.name.clone(), descriptor);
        }
        Self { types }
    }

    /// Load a registry from a YAML model file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a registry from a YAML model string. The built-in scalars are
    /// registered first; the loaded model may reference but not re-declare
    /// them. The result is validated.
    pub fn from_yaml(yaml: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_yaml::from_str(yaml)?;
        if file.version != MODEL_VERSION {
            return Err(ModelError::UnsupportedVersion(file.version));
        }
        let mut registry = Self::new();
        for descriptor in file.types {
            if registry.types.contains_key(&descriptor.name) {
                return Err(ModelError::DuplicateType(descriptor.name));
            }
            registry.register(descriptor);
        }
        registry.validate()?;
        Ok(registry)
    }

    /// Register a type descriptor, replacing any previous registration of
    /// the same name.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Register several descriptors at once.
    pub fn register_all(&mut self, descriptors: impl IntoIterator<Item = TypeDescriptor>) {
        for descriptor in descriptors {
            self.register(descriptor);
        }
    }

    /// Look up a type descriptor by name.
    pub fn lookup(&self, name: &TypeId) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Get a type descriptor by name, failing if it is not registered.
    pub fn get(&self, name: &TypeId) -> Result<&TypeDescriptor, ModelError> {
        self.types
            .get(name)
            .ok_or_else(|| ModelError::UnknownType(name.clone()))
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &TypeId) -> bool {
        self.types.contains_key(name)
    }

    /// All registered type names.
    pub fn type_names(&self) -> Vec<&TypeId> {
        self.types.keys().collect()
    }

    /// Whether a type declares at least one property, on itself or anywhere
    /// up its ancestor chain.
    pub fn has_properties(&self, descriptor: &TypeDescriptor) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(descriptor);
        while let Some(d) = current {
            if !seen.insert(d.name.clone()) {
                return false;
            }
            let (properties, base) = match &d.kind {
                TypeKind::Object {
                    properties, base, ..
                } => (properties, base.as_ref()),
                TypeKind::Interface { properties } => (properties, None),
                _ => return false,
            };
            if !properties.is_empty() {
                return true;
            }
            current = base.and_then(|b| self.lookup(b));
        }
        false
    }

    /// Enumerate the settable properties of a type: every declaration across
    /// the ancestor chain, derived declarations first and shadowing base
    /// ones. A read-only derived declaration is still settable when a
    /// declaration of the same name deeper in the chain carries a setter.
    pub fn settable_properties(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Result<Vec<ResolvedProperty>, ModelError> {
        let mut resolved: Vec<ResolvedProperty> = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(descriptor);

        while let Some(d) = current {
            if !seen.insert(d.name.clone()) {
                return Err(ModelError::BaseCycle(descriptor.name.clone()));
            }
            let (properties, base) = match &d.kind {
                TypeKind::Object {
                    properties, base, ..
                } => (properties.as_slice(), base.as_ref()),
                TypeKind::Interface { properties } => (properties.as_slice(), None),
                _ => (&[][..], None),
            };
            for property in properties {
                if let Some(existing) = resolved.iter_mut().find(|p| p.name == property.name) {
                    // Shadowed base declaration; a settable one unhides a
                    // read-only derived view.
                    if !existing.settable && property.settable {
                        existing.settable = true;
                    }
                } else {
                    resolved.push(ResolvedProperty {
                        name: property.name.clone(),
                        property_type: property.property_type.clone(),
                        declared_in: d.name.clone(),
                        settable: property.settable,
                    });
                }
            }
            current = match base {
                Some(b) => Some(self.get(b)?),
                None => None,
            };
        }

        resolved.retain(|p| p.settable);
        Ok(resolved)
    }

    /// Check that every reference inside the registry resolves: property,
    /// constructor, element, key, value and base types exist; enums have
    /// variants; base chains point at objects and do not loop.
    pub fn validate(&self) -> Result<(), ModelError> {
        for descriptor in self.types.values() {
            match &descriptor.kind {
                TypeKind::Scalar { .. } => {}
                TypeKind::List { element } => {
                    self.get(element)?;
                }
                TypeKind::Map { key, value } => {
                    self.get(key)?;
                    self.get(value)?;
                }
                TypeKind::Enum { variants } => {
                    if variants.is_empty() {
                        return Err(ModelError::EmptyEnum(descriptor.name.clone()));
                    }
                }
                TypeKind::Object {
                    base,
                    properties,
                    constructors,
                    ..
                } => {
                    for property in properties {
                        self.get(&property.property_type)?;
                    }
                    for constructor in constructors {
                        for param in &constructor.params {
                            self.get(&param.param_type)?;
                        }
                    }
                    if let Some(base) = base {
                        let base_descriptor = self.get(base)?;
                        if !matches!(base_descriptor.kind, TypeKind::Object { .. }) {
                            return Err(ModelError::InvalidBase {
                                type_name: descriptor.name.clone(),
                                base: base.clone(),
                            });
                        }
                        self.check_base_chain(descriptor)?;
                    }
                }
                TypeKind::Interface { properties } => {
                    for property in properties {
                        self.get(&property.property_type)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_base_chain(&self, descriptor: &TypeDescriptor) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        let mut current = Some(descriptor);
        while let Some(d) = current {
            if !seen.insert(d.name.clone()) {
                return Err(ModelError::BaseCycle(descriptor.name.clone()));
            }
            current = match &d.kind {
                TypeKind::Object {
                    base: Some(base), ..
                } => Some(self.get(base)?),
                _ => None,
            };
        }
        Ok(())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
