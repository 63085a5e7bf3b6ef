//! Projection of a relation onto a subset of its attributes.

use crate::expression::Expression;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder, SchemaBuilder, TupleBuilder};
use std::collections::BTreeSet;

/// Produces a relation narrowed to a subset of the input's attributes.
///
/// In the default include mode the named attributes survive; after
/// [`exclude_attributes`](Self::exclude_attributes) they are dropped and the
/// rest survive. Every name must exist in the input schema or evaluation
/// fails with [`CoreError::AttributeNotFound`]. Names are trimmed, so
/// `" a "` and `"a"` select the same attribute.
///
/// Projecting every attribute away collapses the input to a nullary
/// relation: a non-empty input becomes the relation holding the single
/// empty tuple, an empty input becomes the empty nullary relation.
pub struct Project {
    input: Box<dyn Expression>,
    names: BTreeSet<String>,
    included: bool,
}

impl Project {
    pub fn new<I, S>(input: impl Expression + 'static, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            input: Box::new(input),
            names: names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .collect(),
            included: true,
        }
    }

    /// Keep only the named attributes. This is the default mode.
    pub fn include_attributes(mut self) -> Self {
        self.included = true;
        self
    }

    /// Drop the named attributes, keeping the rest.
    pub fn exclude_attributes(mut self) -> Self {
        self.included = false;
        self
    }
}

impl Expression for Project {
    fn execute(&self) -> CoreResult<Relation> {
        let input = self.input.execute()?;
        let schema = input.schema();

        for name in &self.names {
            if !schema.has_attribute(name) {
                return Err(CoreError::AttributeNotFound { name: name.clone() });
            }
        }

        let mut projected = SchemaBuilder::new();
        for attribute in schema.attributes() {
            if self.names.contains(attribute.name().as_str()) == self.included {
                projected.with(&attribute)?;
            }
        }
        let projected = projected.build();

        if projected.is_empty() && !input.is_empty() {
            log::debug!(
                "projection to zero attributes collapses {} tuples",
                input.cardinality()
            );
        }

        let mut result = RelationBuilder::new();
        result.with_schema(projected.clone());
        for tuple in input.tuples() {
            let mut narrowed = TupleBuilder::new();
            for attribute in projected.attributes() {
                narrowed.with_value(
                    attribute.name().clone(),
                    tuple.value(attribute.name().as_str())?.clone(),
                )?;
            }
            result.with_tuple(narrowed.build())?;
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
