//! Set intersection of two relations.

use crate::expression::Expression;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder};

/// Produces a relation containing every tuple present in both operands.
///
/// Both operands must evaluate to relations with equal schemas; the left
/// schema is the reference, and a differing right relation fails evaluation
/// with [`CoreError::RelationSchemaMismatch`]. On the nullary relations this
/// behaves as Boolean AND.
pub struct Intersect {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Intersect {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for Intersect {
    fn execute(&self) -> CoreResult<Relation> {
        let left = self.left.execute()?;
        let right = self.right.execute()?;
        if right.schema() != left.schema() {
            return Err(CoreError::RelationSchemaMismatch {
                relation: right,
                expected: left.schema().clone(),
            });
        }

        // Probing the smaller side bounds the work by the smaller cardinality.
        let (probe, other) = if left.cardinality() <= right.cardinality() {
            (&left, &right)
        } else {
            (&right, &left)
        };

        let mut result = RelationBuilder::new();
        result.with_schema(left.schema().clone());
        for tuple in probe.tuples() {
            if other.contains(tuple) {
                result.with_tuple(tuple.clone())?;
            }
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "intersect_test.rs"]
mod tests;
