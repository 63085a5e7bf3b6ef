//! Natural join of two relations.

use crate::expression::Expression;
use crate::ops::merge_tuples;
use relata_core::{AttributeName, CoreResult, Relation, RelationBuilder, SchemaBuilder, Tuple};

/// Produces a relation pairing the operands' tuples on equality of their
/// common attributes.
///
/// The result schema is the union of both attribute sets; an attribute
/// shared by both operands must carry the same type on each side, otherwise
/// evaluation fails with [`CoreError::AttributeTypeConflict`](relata_core::CoreError::AttributeTypeConflict)
/// while the merged schema is built. With no common attributes the result
/// equals the Cartesian product.
pub struct Join {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Join {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for Join {
    fn execute(&self) -> CoreResult<Relation> {
        let left = self.left.execute()?;
        let right = self.right.execute()?;

        // Shared attributes with conflicting types fail here.
        let mut schema = SchemaBuilder::new();
        for attribute in left.schema().attributes().chain(right.schema().attributes()) {
            schema.with(&attribute)?;
        }

        let common: Vec<&AttributeName> = left
            .schema()
            .names()
            .filter(|name| right.schema().has_attribute(name.as_str()))
            .collect();

        log::trace!(
            "join pairs {} x {} tuples on {} common attributes",
            left.cardinality(),
            right.cardinality(),
            common.len()
        );

        let mut result = RelationBuilder::new();
        result.with_schema(schema.build());
        for left_tuple in left.tuples() {
            for right_tuple in right.tuples() {
                if tuples_match(left_tuple, right_tuple, &common)? {
                    result.with_tuple(merge_tuples(left_tuple, right_tuple)?)?;
                }
            }
        }
        result.build()
    }
}

fn tuples_match(left: &Tuple, right: &Tuple, common: &[&AttributeName]) -> CoreResult<bool> {
    for name in common {
        if left.value(name.as_str())? != right.value(name.as_str())? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
