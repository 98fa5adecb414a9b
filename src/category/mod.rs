//! The category substrate: composable, tensorable and reversible arrows.
pub mod traits;

pub use traits::*;
