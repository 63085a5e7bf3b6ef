//! Error types for relata-core

use crate::attribute::Attribute;
use crate::relation::Relation;
use crate::schema::Schema;
use crate::tuple::Tuple;
use crate::types::ValueType;
use thiserror::Error;

/// Core error type for Relata
#[derive(Error, Debug)]
pub enum CoreError {
    /// R001: Attribute lookup failed
    #[error("[R001] Attribute not found: '{name}'")]
    AttributeNotFound { name: String },

    /// R002: Attribute collides with an already present one
    #[error("[R002] Attribute already exists: {existing}")]
    AttributeAlreadyExists { existing: Attribute },

    /// R003: Same attribute name bound to two different types
    #[error("[R003] Conflicting types for attribute '{name}': have {existing}, received {offered}")]
    AttributeTypeConflict {
        name: String,
        existing: ValueType,
        offered: ValueType,
    },

    /// R004: Relation schema differs from the expected schema
    #[error("[R004] Relation doesn't conform to the expected schema {expected}")]
    RelationSchemaMismatch { relation: Relation, expected: Schema },

    /// R005: Tuple schema differs from the expected schema
    #[error("[R005] Tuple doesn't conform to the expected schema {expected}")]
    TupleSchemaMismatch { tuple: Tuple, expected: Schema },

    /// R006: Required structural information is missing entirely
    #[error("[R006] Relation construction requires an explicit schema or at least one tuple")]
    InvalidConstruction,
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
