//! Renaming of a relation's attributes.

use crate::expression::Expression;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder, SchemaBuilder, TupleBuilder};
use std::collections::BTreeMap;

/// Produces a relation with attributes renamed according to a mapping.
///
/// Mappings accumulate through [`with_mapping`](Self::with_mapping) and all
/// substitutions apply simultaneously, so swaps like `a -> b`, `b -> a` work.
/// At evaluation time every mapped source must exist in the input schema and
/// every target must be free, unless the target is itself renamed away by
/// another mapping. A mapping whose source equals its target is dropped
/// before validation; with no effective mappings the input passes through
/// unchanged.
pub struct Rename {
    input: Box<dyn Expression>,
    mappings: BTreeMap<String, String>,
}

impl Rename {
    pub fn new(input: impl Expression + 'static) -> Self {
        Self {
            input: Box::new(input),
            mappings: BTreeMap::new(),
        }
    }

    /// Map the attribute `name` to `target`. Both names are trimmed; a later
    /// mapping for the same source replaces the earlier one.
    pub fn with_mapping(mut self, name: impl AsRef<str>, target: impl AsRef<str>) -> Self {
        self.mappings.insert(
            name.as_ref().trim().to_string(),
            target.as_ref().trim().to_string(),
        );
        self
    }
}

impl Expression for Rename {
    fn execute(&self) -> CoreResult<Relation> {
        let input = self.input.execute()?;
        if self.mappings.is_empty() {
            return Ok(input);
        }

        let schema = input.schema();

        // Self-mappings are no-ops; drop them all before validating so a
        // target that collides only with a dropped entry is still accepted.
        let mappings: BTreeMap<&str, &str> = self
            .mappings
            .iter()
            .filter(|(name, target)| name != target)
            .map(|(name, target)| (name.as_str(), target.as_str()))
            .collect();
        if mappings.is_empty() {
            return Ok(input);
        }

        for (name, target) in &mappings {
            if !schema.has_attribute(name) {
                return Err(CoreError::AttributeNotFound {
                    name: (*name).to_string(),
                });
            }
            if !mappings.contains_key(target) && schema.has_attribute(target) {
                return Err(CoreError::AttributeAlreadyExists {
                    existing: schema.attribute(target)?,
                });
            }
        }

        let mut renamed_schema = SchemaBuilder::new();
        for attribute in schema.attributes() {
            match mappings.get(attribute.name().as_str()) {
                Some(target) => renamed_schema.with_attribute(*target, attribute.value_type())?,
                None => renamed_schema.with(&attribute)?,
            };
        }

        let mut result = RelationBuilder::new();
        result.with_schema(renamed_schema.build());
        for tuple in input.tuples() {
            let mut renamed = TupleBuilder::new();
            for (name, value) in tuple.values() {
                match mappings.get(name.as_str()) {
                    Some(target) => renamed.with_value(*target, value.clone())?,
                    None => renamed.with_value(name.clone(), value.clone())?,
                };
            }
            result.with_tuple(renamed.build())?;
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "rename_test.rs"]
mod tests;
