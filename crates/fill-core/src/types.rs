//! Type descriptors for the fixture-filler framework.
//!
//! This module defines the type universe the filler operates on. A fixture
//! model is a set of named [`TypeDescriptor`]s: scalar leaf types, list and
//! map containers, enumerations, plain object types with properties and
//! constructors, and interfaces. Descriptors are plain data; all behavior
//! (classification, generation, traversal) lives in the `fixture-filler`
//! crate.
//!
//! ## YAML Format
//!
//! Type definitions are referenced by name and tagged by `kind`:
//!
//! ```yaml
//! types:
//!   - name: Address
//!     kind: object
//!     properties:
//!       - name: city
//!         type: text
//!       - name: zip
//!         type: text
//!
//!   - name: Tags
//!     kind: list
//!     element: text
//! ```
//!
//! Scalar types (`bool`, `int`, `text`, `uuid`, ...) are pre-registered by
//! [`TypeRegistry::new`](crate::registry::TypeRegistry::new) and never appear
//! in model files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural identity of a type: its registered name.
///
/// Two `TypeId`s compare equal whenever they carry the same name, regardless
/// of where they were produced. Configuration tables and the cycle tracker
/// rely on this: an override registered against `"Person"` applies to every
/// lookup of `"Person"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Create a type id from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The type name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&TypeId> for TypeId {
    fn from(id: &TypeId) -> Self {
        id.clone()
    }
}

/// Built-in scalar types.
///
/// Every scalar is pre-registered under the name returned by
/// [`ScalarKind::type_name`], so a property can say `type: uuid` without any
/// model-side declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// Boolean value
    Bool,

    /// 16-bit signed integer
    #[serde(rename = "small_int")]
    Int16,

    /// 32-bit signed integer
    #[serde(rename = "int")]
    Int32,

    /// 64-bit signed integer
    #[serde(rename = "big_int")]
    Int64,

    /// 32-bit IEEE 754 floating point
    #[serde(rename = "float")]
    Float32,

    /// 64-bit IEEE 754 floating point
    #[serde(rename = "double")]
    Float64,

    /// Single character
    Char,

    /// Unlimited text
    Text,

    /// Binary data
    Bytes,

    /// UUID (128-bit)
    Uuid,

    /// Instant with timezone (UTC)
    DateTime,

    /// Time duration
    Duration,
}

impl ScalarKind {
    /// All scalar kinds, in registration order.
    pub const ALL: [ScalarKind; 12] = [
        ScalarKind::Bool,
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Char,
        ScalarKind::Text,
        ScalarKind::Bytes,
        ScalarKind::Uuid,
        ScalarKind::DateTime,
        ScalarKind::Duration,
    ];

    /// The registered name of this scalar type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int16 => "small_int",
            Self::Int32 => "int",
            Self::Int64 => "big_int",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Char => "char",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Uuid => "uuid",
            Self::DateTime => "date_time",
            Self::Duration => "duration",
        }
    }

    /// The [`TypeId`] this scalar is registered under.
    pub fn type_id(&self) -> TypeId {
        TypeId::new(self.type_name())
    }
}

/// A settable or read-only property declared on an object or interface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,

    /// Declared type of the property
    #[serde(rename = "type")]
    pub property_type: TypeId,

    /// Whether this declaration carries a setter. A read-only re-declaration
    /// can still be assigned through a settable declaration on an ancestor.
    #[serde(default = "default_settable")]
    pub settable: bool,
}

fn default_settable() -> bool {
    true
}

impl Property {
    /// Create a settable property.
    pub fn new(name: impl Into<String>, property_type: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            settable: true,
        }
    }

    /// Create a read-only property (no setter on this declaration).
    pub fn read_only(name: impl Into<String>, property_type: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            settable: false,
        }
    }
}

/// A constructor parameter. The generated argument is stored on the new
/// instance under the parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub param_type: TypeId,
}

impl Param {
    /// Create a constructor parameter.
    pub fn new(name: impl Into<String>, param_type: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// A constructor overload of an object type.
///
/// An object type whose `constructors` list is empty has an implicit
/// zero-argument constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    /// Parameter list, in declaration order
    #[serde(default)]
    pub params: Vec<Param>,
}

impl Constructor {
    /// Create a constructor with the given parameters.
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Create a zero-argument constructor.
    pub fn nullary() -> Self {
        Self { params: Vec::new() }
    }
}

/// Classification of a type, tagged by `kind` in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    /// Built-in scalar leaf type
    Scalar {
        /// Which scalar
        scalar: ScalarKind,
    },

    /// Ordered sequence container with one element type
    List {
        /// Element type
        element: TypeId,
    },

    /// Associative container with unique keys
    Map {
        /// Key type
        key: TypeId,
        /// Value type
        value: TypeId,
    },

    /// Enumeration with a fixed variant set
    Enum {
        /// Variant names, in declaration order
        variants: Vec<String>,
    },

    /// Plain object type with properties and constructors
    Object {
        /// Base type this object inherits properties from
        #[serde(default)]
        base: Option<TypeId>,

        /// Whether this type is abstract (cannot be instantiated directly)
        #[serde(rename = "abstract", default)]
        is_abstract: bool,

        /// Declared properties, in declaration order
        #[serde(default)]
        properties: Vec<Property>,

        /// Constructor overloads; empty means an implicit zero-argument one
        #[serde(default)]
        constructors: Vec<Constructor>,
    },

    /// Interface contract; resolved via a configured implementation or a
    /// mocking provider
    Interface {
        /// Properties declared on the interface
        #[serde(default)]
        properties: Vec<Property>,
    },
}

/// A named type in the fixture model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Registered type name
    pub name: TypeId,

    /// Classification and shape
    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a descriptor from a name and kind.
    pub fn new(name: impl Into<TypeId>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Descriptor for a built-in scalar, registered under its canonical name.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self {
            name: kind.type_id(),
            kind: TypeKind::Scalar { scalar: kind },
        }
    }

    /// Concrete object type with the given properties.
    pub fn object(name: impl Into<TypeId>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object {
                base: None,
                is_abstract: false,
                properties,
                constructors: Vec::new(),
            },
        }
    }

    /// Abstract object type with the given properties.
    pub fn abstract_object(name: impl Into<TypeId>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object {
                base: None,
                is_abstract: true,
                properties,
                constructors: Vec::new(),
            },
        }
    }

    /// Interface type with the given properties.
    pub fn interface(name: impl Into<TypeId>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface { properties },
        }
    }

    /// List type with the given element type.
    pub fn list(name: impl Into<TypeId>, element: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::List {
                element: element.into(),
            },
        }
    }

    /// Map type with the given key and value types.
    pub fn map(
        name: impl Into<TypeId>,
        key: impl Into<TypeId>,
        value: impl Into<TypeId>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Map {
                key: key.into(),
                value: value.into(),
            },
        }
    }

    /// Enumeration type with the given variants.
    pub fn enumeration(
        name: impl Into<TypeId>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Enum {
                variants: variants.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Set the base type. No effect on non-object kinds.
    pub fn with_base(mut self, base: impl Into<TypeId>) -> Self {
        if let TypeKind::Object { base: b, .. } = &mut self.kind {
            *b = Some(base.into());
        }
        self
    }

    /// Add a constructor overload. No effect on non-object kinds.
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        if let TypeKind::Object { constructors, .. } = &mut self.kind {
            constructors.push(constructor);
        }
        self
    }

    /// Whether instances of this type are reference values (objects,
    /// interfaces, lists, maps) as opposed to scalar or enum values.
    pub fn is_reference(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::List { .. }
                | TypeKind::Map { .. }
                | TypeKind::Object { .. }
                | TypeKind::Interface { .. }
        )
    }

    /// Whether this type is an interface or an abstract object.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Interface { .. } | TypeKind::Object { is_abstract: true, .. }
        )
    }
}
