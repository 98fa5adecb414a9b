use core::fmt::Debug;

use crate::error::Result;

pub trait Arrow: Sized {
    type Object: Clone + PartialEq + Debug;

    fn source(&self) -> Self::Object;
    fn target(&self) -> Self::Object;

    /// the identity morphism on `a`
    fn identity(a: &Self::Object) -> Self;

    /// Compose morphisms in diagrammatic order: `self ; other`
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DiagramError::CompositionMismatch`] if
    /// `self.target() != other.source()`.
    fn compose(&self, other: &Self) -> Result<Self>;
}

pub trait Monoidal: Arrow {
    /// the monoidal unit
    fn unit() -> Self::Object;

    /// `a \otimes b` of two objects
    fn tensor_objects(a: &Self::Object, b: &Self::Object) -> Self::Object;

    /// `f \otimes g` of two morphisms
    fn tensor(&self, other: &Self) -> Self;
}

/// Categories with an involutive, identity-on-objects reversal of arrows.
pub trait Dagger: Arrow {
    /// Given an `Arrow` with type `f : A → B`, construct its dagger `f† : B → A`.
    fn dagger(&self) -> Self;
}
