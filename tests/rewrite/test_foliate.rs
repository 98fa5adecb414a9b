use string_diagrams::prelude::*;

use crate::strategy::arb_diagram;
use crate::theory::quantum::*;
use crate::theory::simple::*;

use proptest::{prop_assert, prop_assert_eq, proptest};

/// The last diagram produced by foliating `d`, which is `d` itself if no box moved.
fn foliated(d: &Diagram) -> Diagram {
    d.foliate(0, false)
        .filter_map(|step| match step {
            FoliateStep::Diagram(d) => Some(d),
            FoliateStep::Slices(_) => None,
        })
        .last()
        .unwrap_or_else(|| d.clone())
}

proptest! {
    #[test]
    fn flatten_foliation_is_last_step(f in arb_diagram(true)) {
        prop_assert_eq!(f.foliation().flatten().unwrap(), foliated(&f));
    }

    #[test]
    fn slices_cover_diagram(f in arb_diagram(true)) {
        let slices = f.slices();
        prop_assert_eq!(slices.iter().map(Diagram::len).sum::<usize>(), f.len());
        prop_assert_eq!(slices.len(), f.depth());
        prop_assert_eq!(f.depth() == 0, f.is_empty());
        if let (Some(first), Some(last)) = (slices.first(), slices.last()) {
            prop_assert_eq!(first.dom(), f.dom());
            prop_assert_eq!(last.cod(), f.cod());
        }
    }

    #[test]
    fn slice_boxes_are_side_by_side(f in arb_diagram(true)) {
        for slice in f.slices() {
            let layers = slice.layers();
            for (i, pair) in layers.windows(2).enumerate() {
                let (lower, upper) = (&pair[0], &pair[1]);
                let side_by_side = upper.offset() >= lower.offset() + lower.generator().cod().len();
                prop_assert!(side_by_side, "boxes {} and {} of {} overlap", i, i + 1, slice);
            }
        }
    }

    #[test]
    fn foliation_preserves_normal_form(f in arb_diagram(true)) {
        if let Ok(normal) = f.normal_form() {
            prop_assert_eq!(f.foliation().flatten().unwrap().normal_form(), Ok(normal));
        }
    }

    #[test]
    fn flatten_commutes_with_dagger(f in arb_diagram(true)) {
        prop_assert_eq!(
            f.foliation().dagger().flatten().unwrap(),
            f.foliation().flatten().unwrap().dagger()
        );
    }

    #[test]
    fn flatten_generators_is_identity(f in arb_diagram(true)) {
        prop_assert_eq!(f.flatten().unwrap(), f);
    }

    #[test]
    fn foliate_snapshot_replays(f in arb_diagram(true)) {
        let steps = f.foliate(0, true);
        prop_assert!(steps.clone().eq(steps));
    }
}

#[test]
fn test_kets_steps() {
    let mut steps = kets().foliate(0, false);
    assert_eq!(steps.next(), Some(FoliateStep::Diagram(kets())));
    let Some(FoliateStep::Diagram(second)) = steps.next() else {
        panic!("expected a second step")
    };
    assert_eq!(
        second.to_string(),
        "ket >> Id(x) @ ket >> Id(x @ x) @ scalar >> Id(x @ x) @ scalar"
    );
}

#[test]
fn test_slices_of_zigzag_beside_loop() {
    let Some(FoliateStep::Slices(slices)) = zigzag_beside_loop().foliate(0, true).last() else {
        panic!("expected the slices last")
    };
    assert_eq!(slices.len(), 2);
    assert_eq!(
        slices[0].to_string(),
        "f0 @ Id(y @ x) >> Id(y) @ f1 @ Id(x) >> Id(y @ x) @ f0"
    );
    assert_eq!(slices[1].to_string(), "f0[::-1] @ Id(x @ y) >> Id(x @ x) @ f1");
}

#[test]
fn test_zigzag_foliation() {
    let d = zigzag();
    let foliation = d.foliation();
    assert_eq!(foliation.box_at(0), Some(&(&f0() | &f1())));
    assert_eq!(foliation.flatten().unwrap().normal_form().unwrap(), d);
    assert_eq!(foliation.flatten().unwrap().foliation(), foliation);

    let reversed = d.dagger();
    assert_eq!(
        foliation.flatten().unwrap(),
        reversed.foliation().dagger().flatten().unwrap()
    );
    assert_eq!(
        foliation.flatten().unwrap(),
        reversed.foliation().flatten().unwrap().dagger()
    );
}

#[test]
fn test_twin_zigzags_foliation() {
    let d = twin_zigzags();
    let foliation = d.foliation();
    let first = &(&(&f0() | &f1()) | &f0()) | &f1();
    assert_eq!(foliation.box_at(0), Some(&first));
    assert_eq!(foliated(&d), foliation.flatten().unwrap());
}

#[test]
fn test_tangle_foliation() {
    let d = tangle();
    assert_eq!(d.depth(), 3);
    assert_eq!(d.foliation().flatten().unwrap().normal_form().unwrap(), d);
    assert_eq!(
        d.foliation().dagger().flatten().unwrap(),
        d.foliation().flatten().unwrap().dagger()
    );
}

#[test]
fn test_depth() {
    let (f, g) = (f0(), f1());
    assert_eq!(id(x().tensor(&y())).depth(), 0);
    assert_eq!(f.depth(), 1);
    assert_eq!((&f | &g).depth(), 1);
    assert_eq!((&f >> &g).unwrap().depth(), 2);
    assert_eq!(kets().depth(), 1);
    assert!(id(x()).slices().is_empty());
}
