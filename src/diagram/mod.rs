//! String diagrams: generators placed at offsets over an evolving stack of wires.
//!
//! A [`Diagram`] with domain `x ⊗ z` and codomain `y` built from boxes `f0 : x → y`,
//! `f1 : z → w` and `g : y ⊗ w → y` at offsets `[0, 1, 0]`:
//!
//! ```text
//!     x        z
//!   ┌────┐     │
//!   │ f0 │     │          layer 0:  f0 @ Id(z)
//!   └────┘   ┌────┐
//!     │      │ f1 │       layer 1:  Id(y) @ f1
//!     y      └────┘
//!     │        w
//!   ┌─────────────┐
//!   │      g      │       layer 2:  g
//!   └─────────────┘
//!          y
//! ```
//!
//! ```rust
//! use string_diagrams::prelude::*;
//!
//! let (x, y, z, w) = (Type::from("x"), Type::from("y"), Type::from("z"), Type::from("w"));
//! let f0 = Diagram::from(Generator::new("f0", x.clone(), y.clone()));
//! let f1 = Diagram::from(Generator::new("f1", z.clone(), w.clone()));
//! let g = Diagram::from(Generator::new("g", y.tensor(&w), y.clone()));
//!
//! let d = Diagram::new(x.tensor(&z), y, vec![f0.clone(), f1.clone(), g.clone()], vec![0, 1, 0]).unwrap();
//! assert_eq!(d, f0.tensor(&f1).then(&g).unwrap());
//! ```
mod arrow;
mod canonical;

use core::fmt;
use core::ops::{Bound, RangeBounds};
use std::borrow::Cow;

use crate::error::{DiagramError, Result};
use crate::generator::Generator;
use crate::layer::Layer;
use crate::object::Type;

/// A morphism of the free dagger monoidal category.
///
/// The three variants expose the same interface: a [`Diagram::Generator`] behaves exactly like
/// a composite with that single generator at offset `0`, and [`Diagram::Identity`] like a
/// composite with no generators. Equality is structural on `(dom, cod, boxes, offsets)`, so two
/// diagrams related by [interchange](Diagram::interchange) are different values.
///
/// Boxes are themselves diagrams; usually generators, but a box may be any diagram (see
/// [`Diagram::foliation`] and [`Diagram::flatten`]).
#[derive(Debug, Clone)]
pub enum Diagram {
    Identity(Type),
    Generator(Generator),
    Composite(Composite),
}

/// The general case of a [`Diagram`]: a non-empty list of layers.
#[derive(Debug, Clone)]
pub struct Composite {
    pub(crate) dom: Type,
    pub(crate) cod: Type,
    pub(crate) layers: Vec<Layer>,
    pub(crate) offsets: Vec<usize>,
}

impl Composite {
    /// Build from a layer sequence which is already known to compose.
    pub(crate) fn from_layers(dom: Type, cod: Type, layers: Vec<Layer>) -> Self {
        let offsets = layers.iter().map(Layer::offset).collect();
        Composite {
            dom,
            cod,
            layers,
            offsets,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Layers `start..end`, which must be in bounds.
    pub(crate) fn sub_diagram(&self, start: usize, end: usize) -> Diagram {
        if start == end {
            let wires = match self.layers.get(start) {
                Some(layer) => layer.dom(),
                None => self.cod.clone(),
            };
            return Diagram::Identity(wires);
        }
        let layers = self.layers[start..end].to_vec();
        let dom = layers[0].dom();
        let cod = layers[layers.len() - 1].cod();
        Composite::from_layers(dom, cod, layers).into_diagram()
    }

    /// Pick the most specific variant: no layers is an identity, and a single generator spanning
    /// the whole wire stack is that generator.
    pub(crate) fn into_diagram(self) -> Diagram {
        if self.layers.is_empty() {
            return Diagram::Identity(self.dom);
        }
        if let [layer] = self.layers.as_slice() {
            let spans_stack = layer.left().is_empty() && layer.right().is_empty();
            if let (true, Diagram::Generator(g)) = (spans_stack, layer.generator()) {
                return Diagram::Generator(g.clone());
            }
        }
        Diagram::Composite(self)
    }
}

impl Diagram {
    /// Build a diagram from boxes placed at offsets, checking that each box fits the wire stack
    /// left by the previous ones and that the final stack is `cod`.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::LengthMismatch`] if `boxes` and `offsets` differ in length
    /// - [`DiagramError::OffsetOutOfRange`] if a box overhangs the right end of the stack
    /// - [`DiagramError::CompositionMismatch`] if a box's domain disagrees with the wires under it,
    ///   or the final stack is not `cod`
    pub fn new(dom: Type, cod: Type, boxes: Vec<Diagram>, offsets: Vec<usize>) -> Result<Self> {
        if boxes.len() != offsets.len() {
            return Err(DiagramError::LengthMismatch {
                boxes: boxes.len(),
                offsets: offsets.len(),
            });
        }

        let mut scan = dom.clone();
        let mut layers = Vec::with_capacity(boxes.len());
        for (position, (generator, &offset)) in boxes.into_iter().zip(offsets.iter()).enumerate() {
            let arity = generator.dom().len();
            if offset.checked_add(arity).map_or(true, |end| end > scan.len()) {
                return Err(DiagramError::OffsetOutOfRange {
                    position,
                    offset,
                    arity,
                    width: scan.len(),
                });
            }
            let inputs = scan.slice(offset..offset + arity);
            if &inputs != generator.dom() {
                return Err(DiagramError::CompositionMismatch {
                    target: inputs.to_string(),
                    domain: generator.dom().to_string(),
                });
            }
            let left = scan.slice(..offset);
            let right = scan.slice(offset + arity..);
            scan = left.tensor(generator.cod()).tensor(&right);
            layers.push(Layer::new(left, generator, right));
        }

        if scan != cod {
            return Err(DiagramError::CompositionMismatch {
                target: scan.to_string(),
                domain: cod.to_string(),
            });
        }

        Ok(Composite {
            dom,
            cod,
            layers,
            offsets,
        }
        .into_diagram())
    }

    /// The identity diagram on `x`.
    pub fn id(x: Type) -> Self {
        Diagram::Identity(x)
    }

    pub fn dom(&self) -> &Type {
        match self {
            Diagram::Identity(x) => x,
            Diagram::Generator(g) => g.dom(),
            Diagram::Composite(c) => &c.dom,
        }
    }

    pub fn cod(&self) -> &Type {
        match self {
            Diagram::Identity(x) => x,
            Diagram::Generator(g) => g.cod(),
            Diagram::Composite(c) => &c.cod,
        }
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        match self {
            Diagram::Identity(_) => 0,
            Diagram::Generator(_) => 1,
            Diagram::Composite(c) => c.len(),
        }
    }

    /// True for identity diagrams.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The boxes, in execution order.
    pub fn boxes(&self) -> Boxes<'_> {
        match self {
            Diagram::Identity(_) => Boxes {
                single: None,
                layers: Default::default(),
            },
            Diagram::Generator(_) => Boxes {
                single: Some(self),
                layers: Default::default(),
            },
            Diagram::Composite(c) => Boxes {
                single: None,
                layers: c.layers.iter(),
            },
        }
    }

    /// The box at position `i`, if any.
    pub fn box_at(&self, i: usize) -> Option<&Diagram> {
        match self {
            Diagram::Identity(_) => None,
            Diagram::Generator(_) => (i == 0).then_some(self),
            Diagram::Composite(c) => c.layers.get(i).map(Layer::generator),
        }
    }

    /// The offset of a box is the number of wires to its left.
    pub fn offsets(&self) -> &[usize] {
        match self {
            Diagram::Identity(_) => &[],
            Diagram::Generator(_) => &[0],
            Diagram::Composite(c) => &c.offsets,
        }
    }

    /// One [`Layer`] per box, such that the diagram is the composite of
    /// `Id(left) ⊗ box ⊗ Id(right)` over its layers.
    pub fn layers(&self) -> Cow<'_, [Layer]> {
        match self {
            Diagram::Identity(_) => Cow::Borrowed(&[]),
            Diagram::Generator(_) => {
                Cow::Owned(vec![Layer::new(Type::unit(), self.clone(), Type::unit())])
            }
            Diagram::Composite(c) => Cow::Borrowed(&c.layers),
        }
    }

    pub(crate) fn to_composite(&self) -> Composite {
        match self {
            Diagram::Composite(c) => c.clone(),
            other => Composite::from_layers(
                other.dom().clone(),
                other.cod().clone(),
                other.layers().into_owned(),
            ),
        }
    }

    /// The sub-diagram spanning layers `range`.
    ///
    /// Its domain and codomain are those of the boundary layers; an empty range gives the
    /// identity on the wires at that position.
    ///
    /// # Errors
    ///
    /// [`DiagramError::IndexOutOfRange`] if the range does not lie within `0..=self.len()`.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Diagram> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };
        if end > len {
            return Err(DiagramError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(DiagramError::IndexOutOfRange { index: start, len });
        }
        Ok(self.to_composite().sub_diagram(start, end))
    }

    /// Layer `i` as the diagram `Id(left) ⊗ box ⊗ Id(right)`.
    pub fn at(&self, i: usize) -> Result<Diagram> {
        let len = self.len();
        self.layers()
            .get(i)
            .map(Layer::to_diagram)
            .ok_or(DiagramError::IndexOutOfRange { index: i, len })
    }

    /// The maximum number of wires alive at any point of the diagram.
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let x = Type::from("x");
    /// let f = Diagram::from(Generator::new("f", x.clone(), x.power(4)));
    /// assert_eq!(f.then(&f.dagger()).unwrap().width(), 4);
    /// ```
    pub fn width(&self) -> usize {
        let mut scan = self.dom().clone();
        let mut width = scan.len();
        for (generator, &offset) in self.boxes().zip(self.offsets()) {
            scan = scan.splice(offset, generator.dom().len(), generator.cod());
            width = width.max(scan.len());
        }
        width
    }
}

impl From<Generator> for Diagram {
    fn from(generator: Generator) -> Self {
        Diagram::Generator(generator)
    }
}

/// Iterator over the boxes of a [`Diagram`], returned by [`Diagram::boxes`].
pub struct Boxes<'a> {
    single: Option<&'a Diagram>,
    layers: core::slice::Iter<'a, Layer>,
}

impl<'a> Iterator for Boxes<'a> {
    type Item = &'a Diagram;

    fn next(&mut self) -> Option<Self::Item> {
        match self.single.take() {
            Some(generator) => Some(generator),
            None => self.layers.next().map(Layer::generator),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.single.is_some()) + self.layers.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Boxes<'_> {}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagram::Identity(x) => write!(f, "Id({x})"),
            Diagram::Generator(g) => write!(f, "{g}"),
            Diagram::Composite(c) => {
                for (i, layer) in c.layers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" >> ")?;
                    }
                    write!(f, "{layer}")?;
                }
                Ok(())
            }
        }
    }
}
