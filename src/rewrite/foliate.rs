//! Foliation: grouping boxes into maximal slices of mutually independent boxes.
//!
//! A slice is a run of consecutive boxes each lying strictly to the right of the one before, so
//! that the whole run could be drawn at a single height. The foliation of a diagram is the
//! diagram whose boxes are its slices, and its depth is their number.
use log::{debug, trace};

use crate::diagram::{Composite, Diagram};
use crate::layer::Layer;
use crate::object::Type;

use super::interchange::Side;

/// An item of [`Foliate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoliateStep {
    /// The diagram after a box was absorbed into the current slice.
    Diagram(Diagram),
    /// Every slice, in order; emitted once, last.
    Slices(Vec<Diagram>),
}

/// The rewrite steps of a foliation, returned by [`Diagram::foliate`].
///
/// The current slice spans boxes `start..=last`. Each later box `k` is moved down to position
/// `last + 1` and then left through the slice until it lies right of a member, which extends the
/// slice by one. A box that cannot be absorbed stays where it is. Once every later box has been
/// tried the slice is closed and the next one starts right after it.
#[derive(Debug, Clone)]
pub struct Foliate {
    diagram: Composite,
    start: usize,
    last: usize,
    candidate: usize,
    slices: Vec<Diagram>,
    emit_slices: bool,
}

impl Foliate {
    fn new(diagram: &Diagram, start: usize, emit_slices: bool) -> Self {
        Foliate {
            diagram: diagram.to_composite(),
            start,
            last: start,
            candidate: start + 1,
            slices: vec![],
            emit_slices,
        }
    }

    /// The diagram with box `k` absorbed into the slice `first..=last`, if it fits.
    fn absorb(&self, first: usize, mut last: usize, k: usize) -> Option<Composite> {
        let mut result = self.diagram.clone();
        if k != last + 1 {
            result.interchange(k, last + 1, false).ok()?;
        }
        loop {
            match result.commuting_side(last, false)? {
                Side::Left => return Some(result),
                Side::Right => {
                    result.commute(last, Side::Right);
                    if last == first {
                        return Some(result);
                    }
                    last -= 1;
                }
            }
        }
    }
}

impl Iterator for Foliate {
    type Item = FoliateStep;

    fn next(&mut self) -> Option<FoliateStep> {
        let len = self.diagram.len();
        while self.start < len {
            if self.candidate < len {
                let k = self.candidate;
                self.candidate += 1;
                match self.absorb(self.start, self.last, k) {
                    Some(diagram) => {
                        trace!(candidate = k, slice_start = self.start; "absorbed into slice");
                        self.diagram = diagram;
                        self.last += 1;
                        return Some(FoliateStep::Diagram(self.diagram.clone().into_diagram()));
                    }
                    None => trace!(candidate = k, slice_start = self.start; "left out of slice"),
                }
                continue;
            }

            let slice = self.diagram.sub_diagram(self.start, self.last + 1);
            trace!(start = self.start, end = self.last + 1; "slice closed");
            self.slices.push(slice);
            self.start = self.last + 1;
            self.last = self.start;
            self.candidate = self.start + 1;
        }

        if self.emit_slices {
            self.emit_slices = false;
            debug!(slices = self.slices.len(); "foliation complete");
            return Some(FoliateStep::Slices(std::mem::take(&mut self.slices)));
        }
        None
    }
}

impl Diagram {
    /// The lazy sequence of interchanges grouping the boxes from position `start` on into
    /// slices. With `emit_slices`, the final item lists the slices.
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let x = Type::from("x");
    /// let ket = Diagram::from(Generator::new("ket", Type::unit(), x.clone()));
    /// let scalar = Diagram::from(Generator::new("scalar", Type::unit(), Type::unit()));
    /// let kets = ket.tensor(&scalar).tensor(&ket).tensor(&scalar);
    ///
    /// let mut steps = kets.foliate(0, false);
    /// let Some(FoliateStep::Diagram(d)) = steps.nth(1) else { unreachable!() };
    /// assert_eq!(
    ///     d.to_string(),
    ///     "ket >> Id(x) @ ket >> Id(x @ x) @ scalar >> Id(x @ x) @ scalar"
    /// );
    /// ```
    pub fn foliate(&self, start: usize, emit_slices: bool) -> Foliate {
        Foliate::new(self, start, emit_slices)
    }

    /// The maximal slices of `self`, in order; they compose to a rewriting of `self`.
    pub fn slices(&self) -> Vec<Diagram> {
        self.foliate(0, true)
            .filter_map(|step| match step {
                FoliateStep::Slices(slices) => Some(slices),
                FoliateStep::Diagram(_) => None,
            })
            .last()
            .unwrap_or_default()
    }

    /// The diagram whose boxes are the slices of `self`, each spanning the whole wire stack.
    ///
    /// [`Diagram::flatten`] takes it back to a rewriting of `self`.
    pub fn foliation(&self) -> Diagram {
        let layers = self
            .slices()
            .into_iter()
            .map(|slice| Layer::new(Type::unit(), slice, Type::unit()))
            .collect();
        Composite::from_layers(self.dom().clone(), self.cod().clone(), layers).into_diagram()
    }

    /// The number of slices.
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let (x, y) = (Type::from("x"), Type::from("y"));
    /// let f = Diagram::from(Generator::new("f", x.clone(), y.clone()));
    /// let g = Diagram::from(Generator::new("g", y.clone(), x.clone()));
    /// assert_eq!(Diagram::id(x.tensor(&y)).depth(), 0);
    /// assert_eq!(f.depth(), 1);
    /// assert_eq!(f.tensor(&g).depth(), 1);
    /// assert_eq!(f.then(&g).unwrap().depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        self.slices().len()
    }
}
