//! relata-core - Core library for Relata
//!
//! This crate provides the relational data model: typed attributes, schemas,
//! tuples, and relations, together with the builders that enforce their
//! invariants and the shared error taxonomy. The algebra operators live in
//! the `relata-algebra` crate on top of these types.

pub mod attribute;
pub mod attribute_name;
pub mod error;
pub mod relation;
pub mod schema;
pub mod tuple;
pub mod types;

pub use attribute::Attribute;
pub use attribute_name::AttributeName;
pub use error::{CoreError, CoreResult};
pub use relation::{Relation, RelationBuilder};
pub use schema::{Schema, SchemaBuilder};
pub use tuple::{Tuple, TupleBuilder};
pub use types::{Value, ValueType};
