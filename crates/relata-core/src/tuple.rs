//! Tuple: an unordered set of attributes with their values.

use crate::attribute::Attribute;
use crate::attribute_name::AttributeName;
use crate::error::{CoreError, CoreResult};
use crate::schema::Schema;
use crate::types::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// An immutable row: a schema plus one value per attribute.
///
/// Every value's runtime type matches its attribute's declared type, and no
/// value is ever null. Two tuples are equal when they have the same schema
/// and the same value for every attribute. The zero-attribute tuple is valid
/// and unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tuple {
    schema: Schema,
    values: BTreeMap<AttributeName, Value>,
}

impl Tuple {
    /// The unique tuple with no attributes.
    pub fn empty() -> Self {
        Self {
            schema: Schema::empty(),
            values: BTreeMap::new(),
        }
    }

    /// The tuple's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of attributes in the tuple.
    pub fn degree(&self) -> usize {
        self.schema.degree()
    }

    /// Get the value of the attribute with the given name.
    ///
    /// The name is trimmed before lookup and matched case-sensitively.
    pub fn value(&self, name: &str) -> CoreResult<&Value> {
        let name = name.trim();
        self.values
            .get(name)
            .ok_or_else(|| CoreError::AttributeNotFound {
                name: name.to_string(),
            })
    }

    /// Iterate all attribute name/value pairs in canonical (name) order.
    pub fn values(&self) -> impl Iterator<Item = (&AttributeName, &Value)> {
        self.values.iter()
    }

    pub(crate) fn from_parts(schema: Schema, values: BTreeMap<AttributeName, Value>) -> Self {
        Self { schema, values }
    }
}

/// Accumulates named values for a [`Tuple`].
///
/// The tuple's schema is determined by the accumulated names and the runtime
/// types of their values. Writing the same name again overwrites the previous
/// value if the type is unchanged; a type change fails with
/// [`CoreError::AttributeTypeConflict`]. Building from an empty builder
/// yields the empty tuple.
#[derive(Debug, Default)]
pub struct TupleBuilder {
    values: BTreeMap<AttributeName, Value>,
}

impl TupleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, inferring the attribute type from the value itself.
    pub fn with_value(
        &mut self,
        name: impl Into<AttributeName>,
        value: impl Into<Value>,
    ) -> CoreResult<&mut Self> {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.values.get(&name) {
            if existing.value_type() != value.value_type() {
                return Err(CoreError::AttributeTypeConflict {
                    name: name.into_inner(),
                    existing: existing.value_type(),
                    offered: value.value_type(),
                });
            }
        }
        self.values.insert(name, value);
        Ok(self)
    }

    /// Add a value for an existing attribute, checking it against the
    /// attribute's declared type.
    pub fn with_attribute_value(
        &mut self,
        attribute: &Attribute,
        value: impl Into<Value>,
    ) -> CoreResult<&mut Self> {
        let value = value.into();
        if value.value_type() != attribute.value_type() {
            return Err(CoreError::AttributeTypeConflict {
                name: attribute.name().as_str().to_string(),
                existing: attribute.value_type(),
                offered: value.value_type(),
            });
        }
        self.with_value(attribute.name().clone(), value)
    }

    /// Snapshot the accumulated values into a tuple.
    ///
    /// The builder stays usable afterwards; building again without further
    /// additions yields an equal tuple.
    pub fn build(&self) -> Tuple {
        let attributes = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.value_type()))
            .collect();
        Tuple {
            schema: Schema::from_attributes(attributes),
            values: self.values.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tuple_test.rs"]
mod tests;
