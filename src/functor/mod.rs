//! Strict monoidal functors out of diagrams
pub mod identity;
pub mod monoidal;
mod traits;

pub use identity::Identity;
pub use monoidal::*;
pub use traits::*;
