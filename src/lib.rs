//! # String Diagrams
//!
//! A [Diagram](crate::diagram::Diagram) is a morphism of the free dagger monoidal category on a
//! set of [generators](crate::generator::Generator): boxes placed one after another at offsets
//! within an evolving stack of typed wires. For example:
//!
//! ```text
//!       x        z
//!     ┌────┐     │
//!     │ f0 │     │
//!     └────┘   ┌────┐
//!       │      │ f1 │
//!       y      └────┘
//!       │        w
//!     ┌─────────────┐
//!     │      g      │
//!     └─────────────┘
//!            y
//! ```
//!
//! is the diagram with boxes `f0, f1, g` at offsets `0, 1, 0`. Boxes acting on disjoint wires
//! can be drawn in either order; the two drawings are related by the *interchange law* and are
//! different values of [`Diagram`](crate::diagram::Diagram), but the same morphism.
//!
//! # Rewriting
//!
//! The [rewrite](crate::rewrite) module decides such equivalences for connected diagrams:
//!
//! - [`interchange`](crate::diagram::Diagram::interchange) swaps two boxes on disjoint wires
//! - [`normal_form`](crate::diagram::Diagram::normal_form) applies interchanges until none
//!   applies, failing with [`NonTermination`](crate::error::DiagramError::NonTermination) when
//!   the rewriting loops
//! - [`foliation`](crate::diagram::Diagram::foliation) groups boxes into slices of boxes which
//!   could be drawn at the same height, and [`flatten`](crate::diagram::Diagram::flatten) undoes
//!   the grouping
//!
//! ```rust
//! use string_diagrams::prelude::*;
//!
//! let (x, y, z, w) = (Type::from("x"), Type::from("y"), Type::from("z"), Type::from("w"));
//! let f0 = Diagram::from(Generator::new("f0", x.clone(), y.clone()));
//! let f1 = Diagram::from(Generator::new("f1", z.clone(), w.clone()));
//! let g = Diagram::from(Generator::new("g", y.tensor(&w), y.clone()));
//!
//! let d = (&(&f0 | &f1) >> &g).unwrap();
//! let e = (&(&(&Diagram::id(x) | &f1) >> &(&f0 | &Diagram::id(w))).unwrap() >> &g).unwrap();
//! assert_ne!(d, e);
//! assert_eq!(d.normal_form().unwrap(), e.normal_form().unwrap());
//! assert_eq!(d.depth(), 2);
//! ```
//!
//! # Functors
//!
//! A [Functor](crate::functor::Functor) interprets diagrams in any
//! [monoidal category](crate::category::Monoidal) given its action on objects and generators.

pub mod category;
pub mod config;
pub mod diagram;
pub mod error;
pub mod functor;
pub mod generator;
pub mod layer;
pub mod object;
pub mod rewrite;
pub mod spiral;

pub mod prelude {
    //! The types and traits needed to build and rewrite diagrams.
    pub use crate::category::*;
    pub use crate::config::{CycleDetection, RewriteConfig};
    pub use crate::diagram::Diagram;
    pub use crate::error::{DiagramError, Result};
    pub use crate::functor::{Functor, MapFunctor, MonoidalFunctor};
    pub use crate::generator::Generator;
    pub use crate::layer::Layer;
    pub use crate::object::{Object, Type};
    pub use crate::rewrite::{Foliate, FoliateStep, Normalize};
    pub use crate::spiral::spiral;
}
