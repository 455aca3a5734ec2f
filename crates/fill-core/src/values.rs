//! Value representations for the fixture-filler framework.
//!
//! This module defines [`Value`], the currency of every generated object
//! graph. A fill operation produces a tree of `Value`s: scalar leaves,
//! lists, maps, enum picks, and objects holding named fields. Generated
//! graphs have no shared ownership; every nested value belongs exclusively
//! to its container.

use crate::types::{ScalarKind, TypeDescriptor, TypeId, TypeKind};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// A generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Single character
    Char(char),

    /// String value
    Text(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Instant with timezone
    DateTime(DateTime<Utc>),

    /// Time duration
    Duration(Duration),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// Associative entries with unique keys. Keys are arbitrary values, so
    /// entries are kept as pairs rather than in a hashed container.
    Map(Vec<(Value, Value)>),

    /// Object instance with named fields
    Object {
        /// The instance's type
        type_name: TypeId,
        /// Field values by property name
        fields: HashMap<String, Value>,
    },

    /// Enumeration pick
    Enum {
        /// The enumeration type
        type_name: TypeId,
        /// Chosen variant name
        variant: String,
    },

    /// Absent value
    Null,
}

impl Value {
    /// Create an empty object instance of the given type.
    pub fn empty_object(type_name: impl Into<TypeId>) -> Self {
        Self::Object {
            type_name: type_name.into(),
            fields: HashMap::new(),
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64, widening from smaller integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int16(i) => Some(*i as i64),
            Self::Int32(i) => Some(*i as i64),
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as map entries.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get this value's object fields.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Self::Object { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// The type of this value, when it carries one (objects and enum picks).
    pub fn instance_type(&self) -> Option<&TypeId> {
        match self {
            Self::Object { type_name, .. } | Self::Enum { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    /// Get an object field by property name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(name))
    }

    /// Whether this value's runtime representation matches a scalar kind.
    pub fn matches_scalar(&self, kind: ScalarKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), ScalarKind::Bool)
                | (Self::Int16(_), ScalarKind::Int16)
                | (Self::Int32(_), ScalarKind::Int32)
                | (Self::Int64(_), ScalarKind::Int64)
                | (Self::Float32(_), ScalarKind::Float32)
                | (Self::Float64(_), ScalarKind::Float64)
                | (Self::Char(_), ScalarKind::Char)
                | (Self::Text(_), ScalarKind::Text)
                | (Self::Bytes(_), ScalarKind::Bytes)
                | (Self::Uuid(_), ScalarKind::Uuid)
                | (Self::DateTime(_), ScalarKind::DateTime)
                | (Self::Duration(_), ScalarKind::Duration)
        )
    }
}

impl TypeDescriptor {
    /// The zero/absent value of this type: scalar zeros, the first variant
    /// for enumerations, `Null` for reference types.
    pub fn default_value(&self) -> Value {
        match &self.kind {
            TypeKind::Scalar { scalar } => match scalar {
                ScalarKind::Bool => Value::Bool(false),
                ScalarKind::Int16 => Value::Int16(0),
                ScalarKind::Int32 => Value::Int32(0),
                ScalarKind::Int64 => Value::Int64(0),
                ScalarKind::Float32 => Value::Float32(0.0),
                ScalarKind::Float64 => Value::Float64(0.0),
                ScalarKind::Char => Value::Char('\0'),
                ScalarKind::Text => Value::Text(String::new()),
                ScalarKind::Bytes => Value::Bytes(Vec::new()),
                ScalarKind::Uuid => Value::Uuid(Uuid::nil()),
                ScalarKind::DateTime => Value::DateTime(DateTime::UNIX_EPOCH),
                ScalarKind::Duration => Value::Duration(Duration::zero()),
            },
            TypeKind::Enum { variants } => match variants.first() {
                Some(variant) => Value::Enum {
                    type_name: self.name.clone(),
                    variant: variant.clone(),
                },
                None => Value::Null,
            },
            TypeKind::List { .. }
            | TypeKind::Map { .. }
            | TypeKind::Object { .. }
            | TypeKind::Interface { .. } => Value::Null,
        }
    }
}
