//! Error types for primitive generation and metadata projection

use crate::kind::PrimitiveKind;

/// Errors raised by the generation pipeline
///
/// Generation itself is deterministic, so every variant describes a broken
/// precondition rather than a transient failure. Callers report them as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrimitiveError {
    /// A generator produced no vertices (nothing to scale or bound)
    #[error("{0} generator produced an empty mesh")]
    EmptyMesh(PrimitiveKind),

    /// The scene template lacks a placeholder entry the projection writes into
    #[error("malformed template: missing `{0}`")]
    MalformedTemplate(String),

    /// Scale factor is NaN or infinite
    #[error("invalid scale {0} (must be finite)")]
    InvalidScale(f32),

    /// Resolution constants out of range
    #[error("invalid resolution: {0}")]
    InvalidResolution(String),

    /// Mesh streams violate the triangle-list invariants
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    /// Primitive name is not one of cube, plane, sphere, torus
    #[error("unknown primitive '{0}' (expected cube, plane, sphere or torus)")]
    UnknownPrimitive(String),
}
