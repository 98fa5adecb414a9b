//! The interchange law as a local rewrite.
//!
//! Two boxes at consecutive positions `i` and `i + 1` act on disjoint wires when one lies wholly
//! to the left of the other in the wire stack between them. Their execution order can then be
//! swapped without changing the morphism:
//!
//! ```text
//!   │   ┌────┐          ┌────┐  │
//!   │   │ f0 │          │ f1 │  │
//!   │   └────┘    ==    └────┘  │
//! ┌────┐  │               │   ┌────┐
//! │ f1 │  │               │   │ f0 │
//! └────┘  │               │   └────┘
//! ```
use log::trace;

use crate::diagram::{Composite, Diagram};
use crate::error::{DiagramError, Result};
use crate::layer::Layer;

/// Where the lower box of an adjacent pair sits relative to the upper one, in the wire stack
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Composite {
    /// Decide whether boxes `i` and `i + 1` commute, and on which side.
    ///
    /// With `prefer_left` the left-of case is tried first; otherwise right-of is tried before
    /// left-of.
    pub(crate) fn commuting_side(&self, i: usize, prefer_left: bool) -> Option<Side> {
        let (off0, off1) = (self.offsets[i], self.offsets[i + 1]);
        let box0 = self.layers[i].generator();
        let box1 = self.layers[i + 1].generator();

        let left_of = off1 >= off0 + box0.cod().len();
        if prefer_left && left_of {
            Some(Side::Left)
        } else if off0 >= off1 + box1.dom().len() {
            Some(Side::Right)
        } else if left_of {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Swap boxes `i` and `i + 1`, given that box `i` lies on `side` of box `i + 1`.
    pub(crate) fn commute(&mut self, i: usize, side: Side) {
        let (off0, off1) = (self.offsets[i], self.offsets[i + 1]);
        let (left0, box0, right0) = self.layers[i].clone().into_parts();
        let (left1, box1, right1) = self.layers[i + 1].clone().into_parts();

        let (lower, upper, off_lower, off_upper) = match side {
            Side::Left => {
                let middle = left1.slice(left0.len() + box0.cod().len()..);
                let off1 = off1 - box0.cod().len() + box0.dom().len();
                let upper = Layer::new(
                    left0.clone(),
                    box0.clone(),
                    middle.tensor(box1.cod()).tensor(&right1),
                );
                let lower = Layer::new(left0.tensor(box0.dom()).tensor(&middle), box1, right1);
                (lower, upper, off1, off0)
            }
            Side::Right => {
                let middle = left0.slice(left1.len() + box1.dom().len()..);
                let off0 = off0 - box1.dom().len() + box1.cod().len();
                let lower = Layer::new(
                    left1.clone(),
                    box1.clone(),
                    middle.tensor(box0.dom()).tensor(&right0),
                );
                let upper = Layer::new(left1.tensor(box1.cod()).tensor(&middle), box0, right0);
                (lower, upper, off1, off0)
            }
        };

        self.layers[i] = lower;
        self.layers[i + 1] = upper;
        self.offsets[i] = off_lower;
        self.offsets[i + 1] = off_upper;
    }

    /// Swap boxes `i` and `i + 1` if they commute.
    pub(crate) fn interchange_adjacent(&mut self, i: usize, prefer_left: bool) -> Result<()> {
        match self.commuting_side(i, prefer_left) {
            Some(side) => {
                trace!(position = i, side:? = side; "interchange");
                self.commute(i, side);
                Ok(())
            }
            None => {
                let left = self.layers[i].generator().to_string();
                let right = self.layers[i + 1].generator().to_string();
                trace!(position = i; "boxes {left} and {right} do not commute");
                Err(DiagramError::Interchange { left, right })
            }
        }
    }

    /// Move box `i` to position `j` one adjacent swap at a time.
    pub(crate) fn interchange(&mut self, i: usize, j: usize, prefer_left: bool) -> Result<()> {
        if i < j {
            for k in i..j {
                self.interchange_adjacent(k, prefer_left)?;
            }
        } else {
            for k in (j..i).rev() {
                self.interchange_adjacent(k, prefer_left)?;
            }
        }
        Ok(())
    }
}

impl Diagram {
    /// Move the box at position `i` to position `j` by a sequence of adjacent interchanges.
    ///
    /// By default only right exchange moves are preferred: a pair is swapped as
    ///
    /// ```text
    /// top >> Id(left @ box1.dom @ mid) @ box0 @ Id(right) >> Id(left) @ box1 @ Id(mid @ box0.cod @ right) >> bottom
    /// ```
    ///
    /// rewritten to
    ///
    /// ```text
    /// top >> Id(left) @ box1 @ Id(mid @ box0.dom @ right) >> Id(left @ box1.cod @ mid) @ box0 @ Id(right) >> bottom
    /// ```
    ///
    /// With `prefer_left`, a pair where the lower box lies left of the upper one is swapped that
    /// way first.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::IndexOutOfRange`] if `i` or `j` is not a box position
    /// - [`DiagramError::Interchange`] if some adjacent swap along the way involves boxes sharing
    ///   a wire; `self` is unaffected
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let (x, y, z, w) = (Type::from("x"), Type::from("y"), Type::from("z"), Type::from("w"));
    /// let f0 = Diagram::from(Generator::new("f0", x.clone(), y.clone()));
    /// let f1 = Diagram::from(Generator::new("f1", z.clone(), w.clone()));
    ///
    /// let d = (&(&Diagram::id(x) | &f1) >> &(&f0 | &Diagram::id(w))).unwrap();
    /// assert_eq!(d, f0.tensor(&f1).interchange(0, 1, false).unwrap());
    /// assert_eq!(f0.tensor(&f1), d.interchange(0, 1, false).unwrap());
    /// ```
    pub fn interchange(&self, i: usize, j: usize, prefer_left: bool) -> Result<Diagram> {
        let len = self.len();
        if let Some(&index) = [i, j].iter().find(|&&index| index >= len) {
            return Err(DiagramError::IndexOutOfRange { index, len });
        }
        if i == j {
            return Ok(self.clone());
        }
        let mut composite = self.to_composite();
        composite.interchange(i, j, prefer_left)?;
        Ok(composite.into_diagram())
    }
}
