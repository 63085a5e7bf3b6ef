//! Set difference of two relations.

use crate::expression::Expression;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder};

/// Produces a relation containing the left operand's tuples that are absent
/// from the right operand.
///
/// The operation is asymmetric: `Difference::new(a, b)` and
/// `Difference::new(b, a)` generally differ. Both operands must evaluate to
/// relations with equal schemas; the left schema is the reference, and a
/// differing right relation fails evaluation with
/// [`CoreError::RelationSchemaMismatch`].
pub struct Difference {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Difference {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for Difference {
    fn execute(&self) -> CoreResult<Relation> {
        let left = self.left.execute()?;
        let right = self.right.execute()?;
        if right.schema() != left.schema() {
            return Err(CoreError::RelationSchemaMismatch {
                relation: right,
                expected: left.schema().clone(),
            });
        }

        let mut result = RelationBuilder::new();
        result.with_schema(left.schema().clone());
        for tuple in left.tuples() {
            if !right.contains(tuple) {
                result.with_tuple(tuple.clone())?;
            }
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "difference_test.rs"]
mod tests;
