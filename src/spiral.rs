//! A family of diagrams on which normalization takes the longest.
use crate::diagram::Diagram;
use crate::error::Result;
use crate::generator::Generator;
use crate::object::Type;

/// A spiral with `n_cups` turns on wires of type `ty`: a `unit`, then `n_cups` nested `cap`s, a
/// `counit`, and `n_cups` `cup`s closing the spiral back up.
///
/// The result is a scalar `Ty() → Ty()` of `2 * n_cups + 2` boxes, the worst case for the
/// number of interchanges [`Diagram::normal_form`] performs.
///
/// ```rust
/// use string_diagrams::prelude::*;
///
/// let d = spiral(2, &Type::from("x")).unwrap();
/// assert_eq!(d.len(), 6);
/// assert!(d.dom().is_empty() && d.cod().is_empty());
/// ```
pub fn spiral(n_cups: usize, ty: &Type) -> Result<Diagram> {
    let unit = Diagram::from(Generator::new("unit", Type::unit(), ty.clone()));
    let counit = Diagram::from(Generator::new("counit", ty.clone(), Type::unit()));
    let cup = Diagram::from(Generator::new("cup", ty.power(2), Type::unit()));
    let cap = Diagram::from(Generator::new("cap", Type::unit(), ty.power(2)));
    let padded = |left: usize, d: &Diagram, right: usize| {
        Diagram::id(ty.power(left))
            .tensor(d)
            .tensor(&Diagram::id(ty.power(right)))
    };

    let mut result = unit;
    for i in 0..n_cups {
        result = result.then(&padded(i, &cap, i + 1))?;
    }
    result = result.then(&padded(n_cups, &counit, n_cups))?;
    for i in 0..n_cups {
        let idle = n_cups - i - 1;
        result = result.then(&padded(idle, &cup, idle))?;
    }
    Ok(result)
}
