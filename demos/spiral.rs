//! Normalize and foliate spirals of increasing size.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see the rewrite steps.
//!
//! ```text
//! cargo run --example spiral -- 4
//! ```
use log::{LevelFilter, info};
use string_diagrams::prelude::*;

fn main() -> Result<(), DiagramError> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let max_cups = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let x = Type::from("x");
    for n_cups in 0..=max_cups {
        let diagram = spiral(n_cups, &x)?;
        let steps = diagram.normalize(false).count();
        let normal_form = diagram.normal_form()?;
        info!(
            n_cups = n_cups,
            boxes = diagram.len(),
            steps = steps,
            depth = diagram.depth(),
            width = diagram.width();
            "spiral normalized"
        );
        println!("{n_cups}: {normal_form}");
    }
    Ok(())
}
