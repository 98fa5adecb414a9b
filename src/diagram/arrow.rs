//! Sequential composition, tensor and dagger of diagrams.
use core::ops::{BitOr, Shr};

use num_traits::Zero;

use super::{Composite, Diagram};
use crate::category::*;
use crate::error::{DiagramError, Result};
use crate::layer::Layer;
use crate::object::Type;

impl Diagram {
    /// Compose in diagrammatic order: `self ; other`.
    ///
    /// # Errors
    ///
    /// [`DiagramError::CompositionMismatch`] if `self.cod() != other.dom()`.
    pub fn then(&self, other: &Diagram) -> Result<Diagram> {
        if self.cod() != other.dom() {
            return Err(DiagramError::CompositionMismatch {
                target: self.cod().to_string(),
                domain: other.dom().to_string(),
            });
        }

        let mut layers = self.layers().into_owned();
        layers.extend(other.layers().iter().cloned());
        Ok(Composite::from_layers(self.dom().clone(), other.cod().clone(), layers).into_diagram())
    }

    /// Parallel composition.
    ///
    /// The boxes of `self` come first, followed by those of `other` placed to the right of every
    /// output wire of `self`: `f.tensor(g) == (f ⊗ Id(g.dom)) ; (Id(f.cod) ⊗ g)`.
    pub fn tensor(&self, other: &Diagram) -> Diagram {
        let layers = self
            .layers()
            .iter()
            .map(|layer| {
                Layer::new(
                    layer.left().clone(),
                    layer.generator().clone(),
                    layer.right().tensor(other.dom()),
                )
            })
            .chain(other.layers().iter().map(|layer| {
                Layer::new(
                    self.cod().tensor(layer.left()),
                    layer.generator().clone(),
                    layer.right().clone(),
                )
            }))
            .collect();

        Composite::from_layers(
            self.dom() + other.dom(),
            self.cod() + other.cod(),
            layers,
        )
        .into_diagram()
    }

    /// Read the diagram backwards, reversing every box.
    pub fn dagger(&self) -> Diagram {
        match self {
            Diagram::Identity(x) => Diagram::Identity(x.clone()),
            Diagram::Generator(g) => Diagram::Generator(g.dagger()),
            Diagram::Composite(c) => Composite::from_layers(
                c.cod.clone(),
                c.dom.clone(),
                c.layers.iter().rev().map(Layer::dagger).collect(),
            )
            .into_diagram(),
        }
    }
}

impl Arrow for Diagram {
    type Object = Type;

    fn source(&self) -> Type {
        self.dom().clone()
    }

    fn target(&self) -> Type {
        self.cod().clone()
    }

    fn identity(a: &Type) -> Self {
        Diagram::id(a.clone())
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        self.then(other)
    }
}

impl Monoidal for Diagram {
    fn unit() -> Type {
        Type::zero()
    }

    fn tensor_objects(a: &Type, b: &Type) -> Type {
        a + b
    }

    fn tensor(&self, other: &Self) -> Self {
        Diagram::tensor(self, other)
    }
}

impl Dagger for Diagram {
    fn dagger(&self) -> Self {
        Diagram::dagger(self)
    }
}

impl Shr<&Diagram> for &Diagram {
    type Output = Result<Diagram>;

    fn shr(self, rhs: &Diagram) -> Self::Output {
        self.then(rhs)
    }
}

impl BitOr<&Diagram> for &Diagram {
    type Output = Diagram;

    fn bitor(self, rhs: &Diagram) -> Self::Output {
        self.tensor(rhs)
    }
}
