//! relata-algebra - Relational algebra operators for Relata
//!
//! This crate provides the classical algebra operators over the data model
//! from `relata-core`: union, intersection, difference, Cartesian product,
//! natural join, projection, renaming, and restriction. Operators consume
//! [`Expression`] operands and implement [`Expression`] themselves, so they
//! compose into lazily evaluated trees; a plain [`Relation`](relata_core::Relation)
//! is the leaf expression that evaluates to itself.

pub mod expression;
pub mod ops;

pub use expression::Expression;
pub use ops::{Difference, Intersect, Join, Product, Project, Rename, Restrict, Union};
