use string_diagrams::prelude::*;

use crate::strategy::arb_diagram;
use crate::theory::simple::*;

use proptest::{prop_assert, prop_assert_eq, proptest};

fn assert_well_formed(d: &Diagram) {
    let rebuilt = Diagram::new(
        d.dom().clone(),
        d.cod().clone(),
        d.boxes().cloned().collect(),
        d.offsets().to_vec(),
    );
    assert_eq!(rebuilt.as_ref(), Ok(d));
}

proptest! {
    #[test]
    fn interchange_preserves_boundary(f in arb_diagram(true)) {
        for i in 1..f.len() {
            match f.interchange(i - 1, i, false) {
                Ok(g) => {
                    prop_assert_eq!(g.dom(), f.dom());
                    prop_assert_eq!(g.cod(), f.cod());
                    prop_assert_eq!(g.box_at(i - 1), f.box_at(i));
                    prop_assert_eq!(g.box_at(i), f.box_at(i - 1));
                    assert_well_formed(&g);
                }
                Err(err) => {
                    let is_interchange = matches!(err, DiagramError::Interchange { .. });
                    prop_assert!(is_interchange);
                }
            }
        }
    }

    #[test]
    fn interchange_invertible(f in arb_diagram(false)) {
        for i in 1..f.len() {
            if let Ok(g) = f.interchange(i - 1, i, false) {
                prop_assert_eq!(g.interchange(i - 1, i, false).unwrap(), f.clone());
            }
        }
    }

    #[test]
    fn left_interchange_invertible(f in arb_diagram(false)) {
        for i in 1..f.len() {
            if let Ok(g) = f.interchange(i - 1, i, true) {
                prop_assert_eq!(g.interchange(i - 1, i, true).unwrap(), f.clone());
            }
        }
    }

    #[test]
    fn interchange_to_end(f in arb_diagram(true)) {
        if !f.is_empty() {
            let last = f.len() - 1;
            if let Ok(g) = f.interchange(0, last, false) {
                prop_assert_eq!(g.box_at(last), f.box_at(0));
                assert_well_formed(&g);
            }
        }
    }

    #[test]
    fn interchange_out_of_range(f in arb_diagram(true)) {
        let len = f.len();
        prop_assert_eq!(
            f.interchange(0, len, false),
            Err(DiagramError::IndexOutOfRange { index: len, len })
        );
    }
}

#[test]
fn test_parallel_boxes_interchange() {
    let d = &f0() | &f1();
    let swapped = (&(&id(x()) | &f1()) >> &(&f0() | &id(x()))).unwrap();
    assert_eq!(d.interchange(0, 1, false).unwrap(), swapped);
    assert_eq!(swapped.interchange(0, 1, false).unwrap(), d);
    assert_eq!(d.interchange(1, 0, false).unwrap(), swapped);
    assert_eq!(d.interchange(0, 0, false).unwrap(), d);
}

#[test]
fn test_connected_boxes_do_not_commute() {
    let d = (&f0() >> &f1()).unwrap();
    assert_eq!(
        d.interchange(0, 1, false),
        Err(DiagramError::Interchange {
            left: "f0".to_string(),
            right: "f1".to_string()
        })
    );
    assert_eq!(
        d.interchange(0, 1, false).unwrap_err().to_string(),
        "generators f0 and f1 do not commute"
    );
}

#[test]
fn test_long_interchange_fails_at_first_blocked_step() {
    // The last box consumes the output of the one before it.
    let d = zigzag_beside_loop();
    let err = d.interchange(4, 0, false).unwrap_err();
    assert!(matches!(err, DiagramError::Interchange { .. }));
    assert_eq!(d, zigzag_beside_loop());

    let moved = d.interchange(3, 0, false).unwrap();
    assert_eq!(moved.box_at(0), Some(&f0()));
    assert_eq!(moved.offsets()[0], 2);
}
