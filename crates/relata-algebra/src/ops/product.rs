//! Cartesian product of two relations.

use crate::expression::Expression;
use crate::ops::merge_tuples;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder, SchemaBuilder};

/// Produces a relation pairing every left tuple with every right tuple.
///
/// The operand schemas must be attribute-disjoint; a shared attribute name
/// fails evaluation with [`CoreError::AttributeAlreadyExists`] naming the
/// first colliding attribute. The result schema is the union of both
/// attribute sets and the result cardinality is the product of the operand
/// cardinalities, so cost grows quadratically with input size.
pub struct Product {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Product {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for Product {
    fn execute(&self) -> CoreResult<Relation> {
        let left = self.left.execute()?;
        let right = self.right.execute()?;

        for attribute in left.schema().attributes() {
            if right.schema().has_attribute(attribute.name().as_str()) {
                return Err(CoreError::AttributeAlreadyExists {
                    existing: attribute,
                });
            }
        }

        let mut schema = SchemaBuilder::new();
        for attribute in left.schema().attributes().chain(right.schema().attributes()) {
            schema.with(&attribute)?;
        }

        log::trace!(
            "product pairs {} x {} tuples",
            left.cardinality(),
            right.cardinality()
        );

        let mut result = RelationBuilder::new();
        result.with_schema(schema.build());
        for left_tuple in left.tuples() {
            for right_tuple in right.tuples() {
                result.with_tuple(merge_tuples(left_tuple, right_tuple)?)?;
            }
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
