//! Structural equality and hashing of diagrams.
//!
//! Both are defined through [`Canonical`], so equal diagrams always hash equally.
use core::hash::{Hash, Hasher};

use super::Diagram;
use crate::generator::Generator;
use crate::object::Type;

/// The serialization equality is decided on: `(dom, cod, boxes, offsets)`, where a diagram
/// consisting of one generator spanning its whole wire stack is identified with that generator.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) enum Canonical<'a> {
    Generator(&'a Generator),
    Arrow {
        dom: &'a Type,
        cod: &'a Type,
        boxes: Vec<Canonical<'a>>,
        offsets: &'a [usize],
    },
}

impl Diagram {
    pub(crate) fn canonical(&self) -> Canonical<'_> {
        match self {
            Diagram::Identity(x) => Canonical::Arrow {
                dom: x,
                cod: x,
                boxes: vec![],
                offsets: &[],
            },
            Diagram::Generator(g) => Canonical::Generator(g),
            Diagram::Composite(c) => {
                if let [layer] = c.layers.as_slice() {
                    let inner = layer.generator();
                    if inner.dom() == &c.dom && inner.cod() == &c.cod {
                        if let generator @ Canonical::Generator(_) = inner.canonical() {
                            return generator;
                        }
                    }
                }
                Canonical::Arrow {
                    dom: &c.dom,
                    cod: &c.cod,
                    boxes: c.layers.iter().map(|l| l.generator().canonical()).collect(),
                    offsets: &c.offsets,
                }
            }
        }
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Diagram {}

impl Hash for Diagram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}
