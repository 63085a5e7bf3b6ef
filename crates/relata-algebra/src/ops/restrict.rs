//! Restriction of a relation to tuples satisfying a predicate.

use crate::expression::Expression;
use relata_core::{CoreResult, Relation, RelationBuilder, Tuple};

/// Produces a relation keeping exactly the tuples the predicate accepts.
///
/// The predicate receives the whole evaluated input relation alongside each
/// candidate tuple, so it can consult relation-level facts such as
/// cardinality. The schema passes through unchanged and evaluation never
/// fails on the relation's contents.
pub struct Restrict {
    input: Box<dyn Expression>,
    predicate: Box<dyn Fn(&Relation, &Tuple) -> bool>,
}

impl Restrict {
    pub fn new(
        input: impl Expression + 'static,
        predicate: impl Fn(&Relation, &Tuple) -> bool + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            predicate: Box::new(predicate),
        }
    }
}

impl Expression for Restrict {
    fn execute(&self) -> CoreResult<Relation> {
        let input = self.input.execute()?;

        let mut result = RelationBuilder::new();
        result.with_schema(input.schema().clone());
        for tuple in input.tuples() {
            if (self.predicate)(&input, tuple) {
                result.with_tuple(tuple.clone())?;
            }
        }
        result.build()
    }
}

#[cfg(test)]
#[path = "restrict_test.rs"]
mod tests;
