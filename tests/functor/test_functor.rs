use string_diagrams::functor::Identity;
use string_diagrams::prelude::*;

use crate::strategy::{arb_composable, arb_diagram};
use crate::theory::simple::*;

use proptest::{prop_assert_eq, proptest};

/// Exchange the labels `a` and `b`.
fn swap_object(x: &Object) -> Type {
    match x.name() {
        "a" => Type::from("b"),
        "b" => Type::from("a"),
        _ => Type::from(x.clone()),
    }
}

fn swap_type(t: &Type) -> Type {
    t.iter().map(swap_object).sum()
}

/// Same name, relabelled boundary. Daggered generators stay daggered.
fn swap_generator(g: &Generator) -> Diagram {
    if g.is_dagger() {
        return swap_generator(&g.dagger()).dagger();
    }
    Diagram::from(Generator::new(g.name(), swap_type(g.dom()), swap_type(g.cod())))
}

/// Counts wires and boxes, forgetting everything else.
#[derive(Debug, Clone, PartialEq)]
struct Wires {
    source: usize,
    target: usize,
    boxes: usize,
}

impl Arrow for Wires {
    type Object = usize;

    fn source(&self) -> usize {
        self.source
    }

    fn target(&self) -> usize {
        self.target
    }

    fn identity(a: &usize) -> Self {
        Wires {
            source: *a,
            target: *a,
            boxes: 0,
        }
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        if self.target != other.source {
            return Err(DiagramError::CompositionMismatch {
                target: self.target.to_string(),
                domain: other.source.to_string(),
            });
        }
        Ok(Wires {
            source: self.source,
            target: other.target,
            boxes: self.boxes + other.boxes,
        })
    }
}

impl Monoidal for Wires {
    fn unit() -> usize {
        0
    }

    fn tensor_objects(a: &usize, b: &usize) -> usize {
        a + b
    }

    fn tensor(&self, other: &Self) -> Self {
        Wires {
            source: self.source + other.source,
            target: self.target + other.target,
            boxes: self.boxes + other.boxes,
        }
    }
}

proptest! {
    #[test]
    fn relabelling_is_involutive(f in arb_diagram(true)) {
        let swap = MonoidalFunctor::new(swap_object, swap_generator);
        let once: Diagram = swap.map_arrow(&f).unwrap();
        prop_assert_eq!(once.dom(), &swap_type(f.dom()));
        prop_assert_eq!(once.cod(), &swap_type(f.cod()));
        let twice: Diagram = swap.map_arrow(&once).unwrap();
        prop_assert_eq!(twice, f);
    }

    #[test]
    fn functor_preserves_composition((f, g) in arb_composable(true)) {
        let swap = MonoidalFunctor::new(swap_object, swap_generator);
        let fg: Diagram = swap.map_arrow(&(&f >> &g).unwrap()).unwrap();
        let (f, g): (Diagram, Diagram) = (swap.map_arrow(&f).unwrap(), swap.map_arrow(&g).unwrap());
        prop_assert_eq!(fg, (&f >> &g).unwrap());
    }

    #[test]
    fn functor_preserves_tensor(f in arb_diagram(true), g in arb_diagram(true)) {
        let swap = MonoidalFunctor::new(swap_object, swap_generator);
        let fg: Diagram = swap.map_arrow(&(&f | &g)).unwrap();
        let (f, g): (Diagram, Diagram) = (swap.map_arrow(&f).unwrap(), swap.map_arrow(&g).unwrap());
        prop_assert_eq!(fg, &f | &g);
    }

    #[test]
    fn functor_preserves_dagger(f in arb_diagram(true)) {
        let swap = MonoidalFunctor::new(swap_object, swap_generator);
        let image: Diagram = swap.map_arrow(&f.dagger()).unwrap();
        let expected: Diagram = swap.map_arrow(&f).unwrap();
        prop_assert_eq!(image, expected.dagger());
    }

    #[test]
    fn count_wires(f in arb_diagram(true)) {
        let count = MonoidalFunctor::new(
            |_: &Object| 1,
            |g: &Generator| Wires {
                source: g.dom().len(),
                target: g.cod().len(),
                boxes: 1,
            },
        );
        let image: Wires = count.map_arrow(&f).unwrap();
        prop_assert_eq!(image, Wires { source: f.dom().len(), target: f.cod().len(), boxes: f.len() });
    }

    #[test]
    fn identity_functor(f in arb_diagram(true)) {
        prop_assert_eq!(Identity.map_arrow(&f).unwrap(), f.clone());
        prop_assert_eq!(Identity.map_type(f.dom()).unwrap(), f.dom().clone());
    }
}

fn swap_x_y() -> MapFunctor {
    let mut functor = MapFunctor::default();
    functor.insert_object("x", y());
    functor.insert_object("y", x());
    functor
}

#[test]
fn test_map_functor() {
    let mut functor = swap_x_y();
    functor.insert_generator(Generator::new("f0", x(), y()), f1());
    functor.insert_generator(Generator::new("f1", y(), x()), f0());

    let expected = (&(&f1() | &id(x())) >> &(&f1().dagger() | &f0())).unwrap();
    assert_eq!(functor.map_arrow(&zigzag()).unwrap(), expected);
    assert_eq!(functor.map_arrow(&expected).unwrap(), zigzag());
    assert_eq!(functor.map_type(&x().tensor(&y())).unwrap(), y().tensor(&x()));
}

#[test]
fn test_dagger_entries_take_precedence() {
    let mut functor = swap_x_y();
    let g0 = Generator::new("f0", x(), y());
    functor.insert_generator(g0.clone(), f1());
    let image = (&f1().dagger() >> &(&f1() >> &f1().dagger()).unwrap()).unwrap();
    functor.insert_generator(g0.dagger(), image.clone());

    assert_eq!(functor.map_arrow(&f0().dagger()).unwrap(), image);
    assert_eq!(functor.map_arrow(&f0()).unwrap().dagger(), f1().dagger());
}

#[test]
fn test_missing_image() {
    let functor = swap_x_y();
    assert_eq!(
        functor.map_arrow(&f0()),
        Err(DiagramError::MissingImage {
            kind: "generator",
            name: "f0".to_string()
        })
    );

    let mut functor = MapFunctor::default();
    functor.insert_generator(Generator::new("f0", x(), y()), f1());
    let err = functor.map_arrow(&f0()).unwrap_err();
    assert_eq!(err.to_string(), "no image for object x");
}

#[test]
fn test_image_with_wrong_boundary() {
    let mut functor = MapFunctor::default();
    functor.insert_object("x", x());
    functor.insert_object("y", y());
    functor.insert_generator(Generator::new("f0", x(), y()), f1());
    let err = functor.map_arrow(&f0()).unwrap_err();
    assert!(matches!(err, DiagramError::TypeMismatch { .. }));

    // The whole diagram fails with the first bad box.
    let err = functor.map_arrow(&(&f0() | &f0())).unwrap_err();
    assert!(matches!(err, DiagramError::TypeMismatch { .. }));
}
