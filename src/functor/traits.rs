use crate::category::*;
use crate::diagram::Diagram;
use crate::error::{DiagramError, Result};
use crate::generator::Generator;
use crate::object::{Object, Type};

/// Strict monoidal functors out of the free monoidal category on a signature, into any
/// [`Monoidal`] category `A`.
///
/// Such a functor is determined by its action on generating objects and on generators; the
/// action on types and diagrams follows by structural induction, see [`define_map_type`] and
/// [`define_map_arrow`].
pub trait Functor<A: Monoidal> {
    /// Map a generating object
    fn map_object(&self, x: &Object) -> Result<A::Object>;

    /// Map a single generator.
    /// The image must be an arrow `F(g.dom) → F(g.cod)`; [`define_map_arrow`] checks this.
    fn map_generator(&self, g: &Generator) -> Result<A>;

    /// `F(x₀ ⊗ x₁ ⊗ ...) = F(x₀) ⊗ F(x₁) ⊗ ...`
    fn map_type(&self, t: &Type) -> Result<A::Object> {
        define_map_type(self, t)
    }

    /// Apply this functor to a [`Diagram`].
    fn map_arrow(&self, d: &Diagram) -> Result<A> {
        define_map_arrow(self, d)
    }
}

/// Fold the images of the objects of `t` with the tensor of `A`, starting from its unit.
pub fn define_map_type<A, F>(functor: &F, t: &Type) -> Result<A::Object>
where
    A: Monoidal,
    F: Functor<A> + ?Sized,
{
    t.iter().try_fold(A::unit(), |acc, x| {
        Ok(A::tensor_objects(&acc, &functor.map_object(x)?))
    })
}

/// The image of a diagram by structural induction over its layers.
///
/// A bare generator maps to its image; otherwise, starting from the identity on `F(dom)`, each
/// box contributes `id(F(left)) ⊗ F(box) ⊗ id(F(right))`, where `left` and `right` are the idle
/// wires either side of it.
///
/// # Errors
///
/// Errors of the functor's own mappings, [`DiagramError::TypeMismatch`] if a generator's image
/// has the wrong boundary, and [`DiagramError::CompositionMismatch`] if `A` refuses a composite.
pub fn define_map_arrow<A, F>(functor: &F, d: &Diagram) -> Result<A>
where
    A: Monoidal,
    F: Functor<A> + ?Sized,
{
    if let Diagram::Generator(g) = d {
        return map_generator_checked(functor, g);
    }

    let mut scan = d.dom().clone();
    let mut result = A::identity(&functor.map_type(&scan)?);
    for (generator, &offset) in d.boxes().zip(d.offsets()) {
        let arity = generator.dom().len();
        let left = A::identity(&functor.map_type(&scan.slice(..offset))?);
        let right = A::identity(&functor.map_type(&scan.slice(offset + arity..))?);
        let image = map_box(functor, generator)?;
        result = result.compose(&left.tensor(&image).tensor(&right))?;
        scan = scan.splice(offset, arity, generator.cod());
    }
    Ok(result)
}

// Boxes are usually generators, but a box may itself be a diagram (e.g. a slice of a foliation).
fn map_box<A, F>(functor: &F, b: &Diagram) -> Result<A>
where
    A: Monoidal,
    F: Functor<A> + ?Sized,
{
    match b {
        Diagram::Generator(g) => map_generator_checked(functor, g),
        other => functor.map_arrow(other),
    }
}

fn map_generator_checked<A, F>(functor: &F, g: &Generator) -> Result<A>
where
    A: Monoidal,
    F: Functor<A> + ?Sized,
{
    let image = functor.map_generator(g)?;
    let source = functor.map_type(g.dom())?;
    let target = functor.map_type(g.cod())?;
    if image.source() != source || image.target() != target {
        return Err(DiagramError::TypeMismatch {
            expected: format!("{source:?} → {target:?}"),
            found: format!("{:?} → {:?}", image.source(), image.target()),
        });
    }
    Ok(image)
}
