use super::traits::*;
use crate::diagram::Diagram;
use crate::error::Result;
use crate::generator::Generator;
use crate::object::{Object, Type};

/// The identity functor on diagrams.
///
/// Every generator maps to itself, but boxes which are themselves diagrams are replaced by their
/// content, so applying it flattens a diagram of diagrams.
pub struct Identity;

impl Functor<Diagram> for Identity {
    fn map_object(&self, x: &Object) -> Result<Type> {
        Ok(Type::from(x.clone()))
    }

    fn map_generator(&self, g: &Generator) -> Result<Diagram> {
        Ok(Diagram::from(g.clone()))
    }

    fn map_type(&self, t: &Type) -> Result<Type> {
        Ok(t.clone())
    }
}

impl Diagram {
    /// Expand every box which is itself a diagram, recursively, leaving only generators.
    ///
    /// ```rust
    /// use string_diagrams::prelude::*;
    ///
    /// let (x, y) = (Type::from("x"), Type::from("y"));
    /// let f0 = Diagram::from(Generator::new("f0", x.clone(), y.clone()));
    /// let f1 = Diagram::from(Generator::new("f1", y.clone(), x.clone()));
    /// let d = (&(&f0 | &Diagram::id(y)) >> &(&f0.dagger() | &f1)).unwrap();
    ///
    /// assert_eq!(d.foliation().flatten().unwrap().normal_form().unwrap(), d);
    /// assert_eq!(
    ///     d.foliation().dagger().flatten().unwrap(),
    ///     d.foliation().flatten().unwrap().dagger()
    /// );
    /// ```
    pub fn flatten(&self) -> Result<Diagram> {
        Identity.map_arrow(self)
    }
}
