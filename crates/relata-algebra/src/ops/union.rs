//! Set union of two relations.

use crate::expression::Expression;
use relata_core::{CoreError, CoreResult, Relation, RelationBuilder};

/// Produces a relation containing every tuple present in either operand.
///
/// Both operands must evaluate to relations with equal schemas; the left
/// schema is the reference, and a differing right relation fails evaluation
/// with [`CoreError::RelationSchemaMismatch`]. Duplicates collapse under set
/// semantics. On the nullary relations this behaves as Boolean OR.
pub struct Union {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Union {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for Union {
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
        for tuple in left.tuples().chain(right.tuples()) {
            result.with_tuple(tuple.clone())?;
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "union_test.rs"]
mod tests;
