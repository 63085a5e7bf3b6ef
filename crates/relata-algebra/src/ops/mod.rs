//! The eight relational operators.
//!
//! Every operator holds its operand expressions and implements
//! [`Expression`](crate::expression::Expression), so operators compose into
//! trees that evaluate lazily from the leaves up.

pub mod difference;
pub mod intersect;
pub mod join;
pub mod product;
pub mod project;
pub mod rename;
pub mod restrict;
pub mod union;

pub use difference::Difference;
pub use intersect::Intersect;
pub use join::Join;
pub use product::Product;
pub use project::Project;
pub use rename::Rename;
pub use restrict::Restrict;
pub use union::Union;

use relata_core::{CoreResult, Tuple, TupleBuilder};

/// Concatenate two tuples into one carrying the attributes of both.
///
/// Callers guarantee that shared attribute names agree on type and value;
/// product establishes disjointness first, join pairs only tuples whose
/// common attributes are equal.
pub(crate) fn merge_tuples(left: &Tuple, right: &Tuple) -> CoreResult<Tuple> {
    let mut merged = TupleBuilder::new();
    for (name, value) in left.values().chain(right.values()) {
        merged.with_value(name.clone(), value.clone())?;
    }
    Ok(merged.build())
}
