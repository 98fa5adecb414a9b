//! Normal forms by iterated interchange.
use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::config::{CycleDetection, RewriteConfig};
use crate::diagram::{Composite, Diagram};
use crate::error::{DiagramError, Result};

use super::interchange::Side;

/// The rewrite steps towards a normal form, returned by [`Diagram::normalize`].
///
/// Each call to `next` performs exactly one interchange. A pass scans adjacent pairs left to
/// right, swapping every pair that can move in the preferred direction; a pass without any swap
/// ends the sequence. The sequence is infinite for diagrams without a normal form.
///
/// Cloning snapshots the state, so a clone replays the same remaining steps.
#[derive(Debug, Clone)]
pub struct Normalize {
    diagram: Composite,
    prefer_left: bool,
    cursor: usize,
    moved: bool,
    done: bool,
}

impl Normalize {
    fn new(diagram: &Diagram, prefer_left: bool) -> Self {
        Normalize {
            diagram: diagram.to_composite(),
            prefer_left,
            cursor: 0,
            moved: false,
            done: false,
        }
    }

    fn can_move(&self, i: usize) -> Option<Side> {
        let c = &self.diagram;
        let (off0, off1) = (c.offsets[i], c.offsets[i + 1]);
        if self.prefer_left {
            let cod0 = c.layers[i].generator().cod().len();
            (off1 >= off0 + cod0).then_some(Side::Left)
        } else {
            let dom1 = c.layers[i + 1].generator().dom().len();
            (off0 >= off1 + dom1).then_some(Side::Right)
        }
    }
}

impl Iterator for Normalize {
    type Item = Diagram;

    fn next(&mut self) -> Option<Diagram> {
        while !self.done {
            if self.cursor + 1 >= self.diagram.len() {
                if !self.moved {
                    self.done = true;
                    break;
                }
                self.cursor = 0;
                self.moved = false;
                continue;
            }

            let i = self.cursor;
            self.cursor += 1;
            if let Some(side) = self.can_move(i) {
                trace!(position = i, side:? = side; "normalize step");
                self.diagram.commute(i, side);
                self.moved = true;
                return Some(self.diagram.clone().into_diagram());
            }
        }
        None
    }
}

impl Diagram {
    /// The lazy sequence of rewrite steps towards the normal form of `self`.
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let s0 = Diagram::from(Generator::new("s0", Type::unit(), Type::unit()));
    /// let s1 = Diagram::from(Generator::new("s1", Type::unit(), Type::unit()));
    /// let steps: Vec<String> = s0.tensor(&s1).normalize(false).take(3).map(|d| d.to_string()).collect();
    /// assert_eq!(steps, ["s1 >> s0", "s0 >> s1", "s1 >> s0"]);
    /// ```
    pub fn normalize(&self, prefer_left: bool) -> Normalize {
        Normalize::new(self, prefer_left)
    }

    /// The fixed point of [`Diagram::normalize`] with right moves.
    ///
    /// # Errors
    ///
    /// [`DiagramError::NonTermination`] if a rewrite step revisits a diagram, as happens for
    /// scalars in parallel.
    pub fn normal_form(&self) -> Result<Diagram> {
        self.normal_form_with(self.normalize(false))
    }

    /// The last diagram of a caller-supplied rewrite sequence, or `self` if it is empty.
    ///
    /// # Errors
    ///
    /// [`DiagramError::NonTermination`] if the sequence yields the same diagram twice.
    pub fn normal_form_with<I>(&self, steps: I) -> Result<Diagram>
    where
        I: IntoIterator<Item = Diagram>,
    {
        let mut visited = HashSet::new();
        let mut diagram = self.clone();
        for step in steps {
            if !visited.insert(step.clone()) {
                return Err(self.non_termination(visited.len()));
            }
            diagram = step;
        }
        debug!(steps = visited.len(); "normal form reached");
        Ok(diagram)
    }

    /// [`Diagram::normal_form`] with the tie-break and cycle detection of `config`.
    ///
    /// # Errors
    ///
    /// [`DiagramError::NonTermination`] as detected by `config.cycle_detection`.
    pub fn normal_form_with_config(&self, config: &RewriteConfig) -> Result<Diagram> {
        let steps = self.normalize(config.prefer_left_moves);
        match config.cycle_detection {
            CycleDetection::Memo => self.normal_form_with(steps),
            CycleDetection::StepLimit(limit) => {
                let mut diagram = self.clone();
                for (taken, step) in steps.enumerate() {
                    if taken == limit {
                        return Err(self.non_termination(limit));
                    }
                    diagram = step;
                }
                debug!(limit = limit; "normal form reached");
                Ok(diagram)
            }
        }
    }

    fn non_termination(&self, steps: usize) -> DiagramError {
        warn!(steps = steps; "normal form search for {self} does not terminate");
        DiagramError::NonTermination {
            diagram: self.to_string(),
            steps,
        }
    }
}
