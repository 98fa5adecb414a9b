//! Layers: one box of a diagram together with the idle wires either side of it.
//!
//! ```text
//!   left      dom       right
//!  ──────┐  ┌─────┐  ┌───────
//!  ──────┤  │  f  │  ├───────
//!        │  └─────┘  │
//!   left      cod       right
//! ```
use core::fmt;

use crate::diagram::Diagram;
use crate::object::Type;

/// A box with wires `left` to its left and `right` to its right.
///
/// Construction is total: any two types and any box make a well-formed layer of type
/// `left ⊗ box.dom → left ⊗ box.cod ⊗ right`.
#[derive(Debug, Clone)]
pub struct Layer {
    left: Type,
    generator: Diagram,
    right: Type,
}

impl Layer {
    pub fn new(left: Type, generator: Diagram, right: Type) -> Self {
        Layer {
            left,
            generator,
            right,
        }
    }

    pub fn left(&self) -> &Type {
        &self.left
    }

    pub fn generator(&self) -> &Diagram {
        &self.generator
    }

    pub fn right(&self) -> &Type {
        &self.right
    }

    /// The `(left, generator, right)` triple.
    pub fn parts(&self) -> (&Type, &Diagram, &Type) {
        (&self.left, &self.generator, &self.right)
    }

    pub fn into_parts(self) -> (Type, Diagram, Type) {
        (self.left, self.generator, self.right)
    }

    /// The wires a layer is offset by, i.e. the length of `left`.
    pub fn offset(&self) -> usize {
        self.left.len()
    }

    pub fn dom(&self) -> Type {
        self.left
            .tensor(self.generator.dom())
            .tensor(&self.right)
    }

    pub fn cod(&self) -> Type {
        self.left
            .tensor(self.generator.cod())
            .tensor(&self.right)
    }

    pub fn dagger(&self) -> Layer {
        Layer::new(
            self.left.clone(),
            self.generator.dagger(),
            self.right.clone(),
        )
    }

    /// The layer as a diagram `Id(left) ⊗ generator ⊗ Id(right)`.
    pub fn to_diagram(&self) -> Diagram {
        Diagram::id(self.left.clone())
            .tensor(&self.generator)
            .tensor(&Diagram::id(self.right.clone()))
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right && self.generator == other.generator
    }
}

impl Eq for Layer {}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.left.is_empty() {
            write!(f, "Id({}) @ ", self.left)?;
        }
        write!(f, "{}", self.generator)?;
        if !self.right.is_empty() {
            write!(f, " @ Id({})", self.right)?;
        }
        Ok(())
    }
}
