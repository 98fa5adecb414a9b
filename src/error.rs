//! Errors raised while building and rewriting diagrams.
//!
//! Every operation in this crate fails fast: nothing is retried or silently
//! repaired, so each variant names the first violated condition.
use thiserror::Error;

/// The error type for diagram construction, composition and rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// A value has the wrong type, e.g. a functor image whose boundary is not the image of the
    /// generator's boundary.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("{boxes} generators given with {offsets} offsets")]
    LengthMismatch { boxes: usize, offsets: usize },

    /// Sequential composition of arrows whose boundaries disagree.
    #[error("cannot compose an arrow with target {target} and an arrow with domain {domain}")]
    CompositionMismatch { target: String, domain: String },

    /// Generator `position` does not fit in the wire stack at its stated offset.
    #[error(
        "generator {position} with {arity} input wires does not fit at offset {offset} of a stack of {width} wires"
    )]
    OffsetOutOfRange {
        position: usize,
        offset: usize,
        arity: usize,
        width: usize,
    },

    #[error("generators {left} and {right} do not commute")]
    Interchange { left: String, right: String },

    #[error("index {index} out of range for a diagram of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Normal form search revisited a diagram (or ran out of steps).
    #[error("no normal form for {diagram}: rewriting does not terminate after {steps} steps")]
    NonTermination { diagram: String, steps: usize },

    /// A map-backed functor has no image for an object or generator.
    #[error("no image for {kind} {name}")]
    MissingImage { kind: &'static str, name: String },
}

pub type Result<T, E = DiagramError> = std::result::Result<T, E>;
