//! Functors given by their action on generating objects and generators.
use std::collections::HashMap;

use super::traits::Functor;
use crate::category::*;
use crate::diagram::Diagram;
use crate::error::{DiagramError, Result};
use crate::generator::Generator;
use crate::object::{Object, Type};

/// A monoidal functor built from two mappings, into any [`Monoidal`] category.
///
/// ```rust
/// use string_diagrams::prelude::*;
///
/// // Forget the wire labels.
/// let x = Type::from("x");
/// let forget = MonoidalFunctor::new(
///     |_: &Object| Type::from("x"),
///     |g: &Generator| {
///         let (n, m) = (g.dom().len(), g.cod().len());
///         Diagram::from(Generator::new(g.name(), Type::from("x").power(n), Type::from("x").power(m)))
///     },
/// );
///
/// let f = Diagram::from(Generator::new("f", Type::new(["a", "b"]), Type::from("c")));
/// let image: Diagram = forget.map_arrow(&f).unwrap();
/// assert_eq!(image.dom(), &x.power(2));
/// assert_eq!(image.cod(), &x);
/// ```
#[derive(Clone)]
pub struct MonoidalFunctor<FO, FG> {
    objects: FO,
    generators: FG,
}

impl<FO, FG> MonoidalFunctor<FO, FG> {
    pub fn new<A>(objects: FO, generators: FG) -> Self
    where
        A: Monoidal,
        FO: Fn(&Object) -> A::Object,
        FG: Fn(&Generator) -> A,
    {
        MonoidalFunctor {
            objects,
            generators,
        }
    }
}

impl<A, FO, FG> Functor<A> for MonoidalFunctor<FO, FG>
where
    A: Monoidal,
    FO: Fn(&Object) -> A::Object,
    FG: Fn(&Generator) -> A,
{
    fn map_object(&self, x: &Object) -> Result<A::Object> {
        Ok((self.objects)(x))
    }

    fn map_generator(&self, g: &Generator) -> Result<A> {
        Ok((self.generators)(g))
    }
}

/// A functor from diagrams to diagrams given by finite tables.
///
/// A daggered generator without an entry of its own maps to the dagger of the image of its
/// reverse.
///
/// ```rust
/// use string_diagrams::prelude::*;
///
/// let (x, y, z, w) = (Type::from("x"), Type::from("y"), Type::from("z"), Type::from("w"));
/// let f0 = Generator::new("f0", x.clone(), y.clone()).with_data("0.1");
/// let f1 = Generator::new("f1", z.clone(), w.clone()).with_data("1.1");
///
/// let mut swap = MapFunctor::default();
/// swap.insert_object("x", z.clone());
/// swap.insert_object("y", w.clone());
/// swap.insert_object("z", x.clone());
/// swap.insert_object("w", y.clone());
/// swap.insert_generator(f0.clone(), Diagram::from(f1.clone()));
/// swap.insert_generator(f1.clone(), Diagram::from(f0.clone()));
///
/// let (f0, f1) = (Diagram::from(f0), Diagram::from(f1));
/// assert_eq!(swap.map_arrow(&f0.tensor(&f1)).unwrap(), f1.tensor(&f0));
/// let loop_ = f0.then(&f0.dagger()).unwrap();
/// assert_eq!(swap.map_arrow(&loop_).unwrap(), f1.then(&f1.dagger()).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapFunctor {
    objects: HashMap<Object, Type>,
    generators: HashMap<Generator, Diagram>,
}

impl MapFunctor {
    pub fn new(objects: HashMap<Object, Type>, generators: HashMap<Generator, Diagram>) -> Self {
        MapFunctor {
            objects,
            generators,
        }
    }

    pub fn insert_object(&mut self, x: impl Into<Object>, image: Type) -> Option<Type> {
        self.objects.insert(x.into(), image)
    }

    pub fn insert_generator(&mut self, g: Generator, image: Diagram) -> Option<Diagram> {
        self.generators.insert(g, image)
    }
}

impl Functor<Diagram> for MapFunctor {
    fn map_object(&self, x: &Object) -> Result<Type> {
        self.objects
            .get(x)
            .cloned()
            .ok_or_else(|| DiagramError::MissingImage {
                kind: "object",
                name: x.to_string(),
            })
    }

    fn map_generator(&self, g: &Generator) -> Result<Diagram> {
        if let Some(image) = self.generators.get(g) {
            return Ok(image.clone());
        }
        if g.is_dagger() {
            return self.map_generator(&g.dagger()).map(|image| image.dagger());
        }
        Err(DiagramError::MissingImage {
            kind: "generator",
            name: g.to_string(),
        })
    }
}
