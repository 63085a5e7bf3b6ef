//! The evaluation seam between relations and operators.

use relata_core::{CoreResult, Relation};

/// Anything that produces a relation when evaluated.
///
/// Operators take expressions as operands and implement `Expression`
/// themselves, so trees of operators nest to arbitrary depth without
/// materializing intermediate relations up front. Evaluation is re-entrant:
/// every call to [`execute`](Self::execute) recomputes from the operands and
/// nothing is cached in between, so an operand whose output changes between
/// calls is re-read each time.
pub trait Expression {
    /// Evaluate the expression into a relation.
    fn execute(&self) -> CoreResult<Relation>;
}

/// A relation is the identity expression: it evaluates to itself.
impl Expression for Relation {
    fn execute(&self) -> CoreResult<Relation> {
        Ok(self.clone())
    }
}

impl<'a, E: Expression + ?Sized> Expression for &'a E {
    fn execute(&self) -> CoreResult<Relation> {
        (**self).execute()
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    fn execute(&self) -> CoreResult<Relation> {
        (**self).execute()
    }
}
