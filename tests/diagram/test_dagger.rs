use string_diagrams::prelude::*;

use crate::strategy::{arb_composable, arb_diagram, arb_generator};
use crate::theory::simple::*;

use proptest::{prop_assert_eq, proptest};

proptest! {
    #[test]
    fn dagger_involutive(f in arb_diagram(true)) {
        prop_assert_eq!(f.dagger().dagger(), f);
    }

    #[test]
    fn dagger_swaps_boundary(f in arb_diagram(true)) {
        let r = Dagger::dagger(&f);
        prop_assert_eq!(r.dom(), f.cod());
        prop_assert_eq!(r.cod(), f.dom());
        prop_assert_eq!(r.len(), f.len());
    }

    #[test]
    fn dagger_contravariant((f, g) in arb_composable(true)) {
        let fg = f.then(&g).unwrap();
        prop_assert_eq!(fg.dagger(), g.dagger().then(&f.dagger()).unwrap());
    }

    #[test]
    fn dagger_is_well_formed(f in arb_diagram(true)) {
        let r = f.dagger();
        let rebuilt = Diagram::new(
            r.dom().clone(),
            r.cod().clone(),
            r.boxes().cloned().collect(),
            r.offsets().to_vec(),
        );
        prop_assert_eq!(rebuilt, Ok(r));
    }

    // The dagger of a tensor lists the right-hand box first, so it agrees with the tensor of the
    // daggers up to one interchange.
    #[test]
    fn dagger_preserves_tensor(f in arb_generator(), g in arb_generator()) {
        let lhs = (&f | &g).dagger().interchange(0, 1, false).unwrap();
        prop_assert_eq!(lhs, &f.dagger() | &g.dagger());
    }
}

#[test]
fn test_generator_dagger() {
    let f = f0();
    assert_ne!(f.dagger(), f);
    assert_eq!(f.dagger().dom(), &y());
    assert_eq!(f.dagger().to_string(), "f0[::-1]");
}

#[test]
fn test_dagger_of_identity() {
    let id = id(x().tensor(&y()));
    assert_eq!(id.dagger(), id);
}

#[test]
fn test_dagger_of_zigzag() {
    let d = zigzag();
    assert_eq!(
        d.to_string(),
        "f0 @ Id(y) >> f0[::-1] @ Id(y) >> Id(x) @ f1"
    );
    assert_eq!(
        d.dagger().to_string(),
        "Id(x) @ f1[::-1] >> f0 @ Id(y) >> f0[::-1] @ Id(y)"
    );
}
