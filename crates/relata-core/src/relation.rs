//! Relation: an unordered, deduplicated set of tuples sharing one schema.

use crate::error::{CoreError, CoreResult};
use crate::schema::Schema;
use crate::tuple::Tuple;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static NULLARY_TRUE: LazyLock<Relation> = LazyLock::new(|| Relation {
    schema: Schema::empty(),
    tuples: BTreeSet::from([Tuple::empty()]),
});

static NULLARY_FALSE: LazyLock<Relation> = LazyLock::new(|| Relation {
    schema: Schema::empty(),
    tuples: BTreeSet::new(),
});

/// An immutable set of tuples sharing one schema.
///
/// Set semantics: duplicates collapse structurally and tuples carry no
/// order. Two relations are equal when both schema and tuple set are equal.
///
/// There are exactly two relations of degree zero, returned by
/// [`nullary_true`](Self::nullary_true) and
/// [`nullary_false`](Self::nullary_false); they act as the logical constants
/// of the algebra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Relation {
    schema: Schema,
    tuples: BTreeSet<Tuple>,
}

impl Relation {
    /// The nullary relation containing exactly the empty tuple.
    ///
    /// Identity for join and product, logical TRUE.
    pub fn nullary_true() -> &'static Relation {
        &NULLARY_TRUE
    }

    /// The nullary relation containing no tuples.
    ///
    /// Annihilator for join and product, identity for union, logical FALSE.
    pub fn nullary_false() -> &'static Relation {
        &NULLARY_FALSE
    }

    /// The relation's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of attributes in the schema.
    pub fn degree(&self) -> usize {
        self.schema.degree()
    }

    /// Number of tuples in the relation.
    pub fn cardinality(&self) -> usize {
        self.tuples.len()
    }

    /// Check if the relation doesn't contain any tuples.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterate tuples in canonical order.
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// Check if the tuple is present in the relation.
    pub fn contains(&self, tuple: &Tuple) -> bool {
        self.tuples.contains(tuple)
    }

    /// The relation's only tuple, or `None` unless cardinality is exactly 1.
    pub fn single_tuple(&self) -> Option<&Tuple> {
        if self.tuples.len() == 1 {
            self.tuples.iter().next()
        } else {
            None
        }
    }

    /// Check if the relation is a superset of the given relation.
    ///
    /// Relations with different schemas are never supersets of one another,
    /// whatever their tuple sets.
    pub fn is_superset_of(&self, other: &Relation) -> bool {
        self.schema == other.schema && other.tuples.is_subset(&self.tuples)
    }

    /// Check if the relation is a proper superset of the given relation.
    pub fn is_proper_superset_of(&self, other: &Relation) -> bool {
        self.is_superset_of(other) && self.cardinality() > other.cardinality()
    }

    /// Check if the relation is a subset of the given relation.
    ///
    /// Relations with different schemas are never subsets of one another,
    /// whatever their tuple sets.
    pub fn is_subset_of(&self, other: &Relation) -> bool {
        other.is_superset_of(self)
    }

    /// Check if the relation is a proper subset of the given relation.
    pub fn is_proper_subset_of(&self, other: &Relation) -> bool {
        other.is_proper_superset_of(self)
    }
}

/// Accumulates tuples for a [`Relation`].
///
/// The relation's schema is either pinned up front with
/// [`with_schema`](Self::with_schema) or adopted from the first tuple added;
/// every subsequent tuple must match it exactly or the addition fails with
/// [`CoreError::TupleSchemaMismatch`]. Duplicate tuples collapse. Building
/// with no schema and no tuples fails with
/// [`CoreError::InvalidConstruction`], since the schema of an empty relation
/// can't be inferred.
#[derive(Debug, Default)]
pub struct RelationBuilder {
    schema: Option<Schema>,
    tuples: BTreeSet<Tuple>,
}

impl RelationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the relation's schema explicitly.
    pub fn with_schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    /// Add a tuple, adopting its schema if none is pinned yet.
    pub fn with_tuple(&mut self, tuple: Tuple) -> CoreResult<&mut Self> {
        match &self.schema {
            Some(schema) if tuple.schema() != schema => {
                return Err(CoreError::TupleSchemaMismatch {
                    tuple,
                    expected: schema.clone(),
                });
            }
            Some(_) => {}
            None => self.schema = Some(tuple.schema().clone()),
        }
        self.tuples.insert(tuple);
        Ok(self)
    }

    /// Snapshot the accumulated tuples into a relation.
    ///
    /// The builder stays usable afterwards; building again without further
    /// additions yields an equal relation.
    pub fn build(&self) -> CoreResult<Relation> {
        match &self.schema {
            Some(schema) => Ok(Relation {
                schema: schema.clone(),
                tuples: self.tuples.clone(),
            }),
            None => Err(CoreError::InvalidConstruction),
        }
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
