//! Schema attribute: a named, typed slot.

use crate::attribute_name::AttributeName;
use crate::types::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, typed slot in a schema.
///
/// Two attributes are equal when both name and type match; names are
/// case-sensitive and trimmed (see [`AttributeName`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    name: AttributeName,
    ty: ValueType,
}

impl Attribute {
    pub fn new(name: impl Into<AttributeName>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// The attribute's name.
    pub fn name(&self) -> &AttributeName {
        &self.name
    }

    /// The attribute's declared type.
    pub fn value_type(&self) -> ValueType {
        self.ty
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ty)
    }
}
