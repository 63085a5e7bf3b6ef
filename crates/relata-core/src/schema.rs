//! Relation schema: an unordered set of uniquely named attributes.

use crate::attribute::Attribute;
use crate::attribute_name::AttributeName;
use crate::error::{CoreError, CoreResult};
use crate::types::ValueType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An unordered set of uniquely named attributes.
///
/// Two schemas are equal when their attribute sets are equal, regardless of
/// the order attributes were added in. The zero-attribute (nullary) schema is
/// valid; it is the schema of the two nullary relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Schema {
    attributes: BTreeMap<AttributeName, ValueType>,
}

impl Schema {
    /// The nullary schema with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of attributes in the schema.
    pub fn degree(&self) -> usize {
        self.attributes.len()
    }

    /// True for the nullary schema.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get the attribute with the given name.
    ///
    /// The name is trimmed before lookup and matched case-sensitively.
    pub fn attribute(&self, name: &str) -> CoreResult<Attribute> {
        let name = name.trim();
        match self.attributes.get_key_value(name) {
            Some((n, ty)) => Ok(Attribute::new(n.clone(), *ty)),
            None => Err(CoreError::AttributeNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Check whether an attribute with the given name exists.
    ///
    /// The name is trimmed before lookup and matched case-sensitively.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name.trim())
    }

    /// Iterate all attributes in canonical (name) order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes
            .iter()
            .map(|(name, ty)| Attribute::new(name.clone(), *ty))
    }

    /// Iterate attribute names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &AttributeName> {
        self.attributes.keys()
    }

    pub(crate) fn value_type(&self, name: &str) -> Option<ValueType> {
        self.attributes.get(name.trim()).copied()
    }

    pub(crate) fn from_attributes(attributes: BTreeMap<AttributeName, ValueType>) -> Self {
        Self { attributes }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", name, ty)?;
        }
        write!(f, "}}")
    }
}

/// Accumulates attributes for a [`Schema`].
///
/// Re-adding an attribute with the same name and type is a no-op; re-adding a
/// name with a different type fails with
/// [`CoreError::AttributeTypeConflict`]. Building from an empty builder
/// yields the nullary schema.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    attributes: BTreeMap<AttributeName, ValueType>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute with the given name and type.
    pub fn with_attribute(
        &mut self,
        name: impl Into<AttributeName>,
        ty: ValueType,
    ) -> CoreResult<&mut Self> {
        let name = name.into();
        match self.attributes.get(&name) {
            Some(existing) if *existing != ty => Err(CoreError::AttributeTypeConflict {
                name: name.into_inner(),
                existing: *existing,
                offered: ty,
            }),
            Some(_) => Ok(self),
            None => {
                self.attributes.insert(name, ty);
                Ok(self)
            }
        }
    }

    /// Add an existing attribute.
    pub fn with(&mut self, attribute: &Attribute) -> CoreResult<&mut Self> {
        self.with_attribute(attribute.name().clone(), attribute.value_type())
    }

    /// Snapshot the accumulated attributes into a schema.
    ///
    /// The builder stays usable afterwards; building again without further
    /// additions yields an equal schema.
    pub fn build(&self) -> Schema {
        Schema {
            attributes: self.attributes.clone(),
        }
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
