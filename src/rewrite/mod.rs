//! Rewriting diagrams up to the interchange law.
//!
//! - [`Diagram::interchange`] swaps the execution order of two boxes on disjoint wires
//! - [`Diagram::normalize`] and [`Diagram::normal_form`] iterate interchange to a fixed point
//! - [`Diagram::foliate`], [`Diagram::foliation`] and [`Diagram::depth`] group boxes into
//!   slices that could be drawn at the same height
//!
//! The step sequences [`Normalize`] and [`Foliate`] are plain iterators: each call to `next`
//! performs one rewrite, and dropping them cancels the rewriting.
mod foliate;
mod interchange;
mod normalize;

pub use foliate::{Foliate, FoliateStep};
pub use normalize::Normalize;
