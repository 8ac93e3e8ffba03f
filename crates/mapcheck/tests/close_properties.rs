use mapcheck::{close, close_values, injects, inverses, Policy, TOLERANCE};
use proptest::prelude::*;
use serde_json::{json, Value};

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (-1e9..1e9f64).prop_map(|n| json!(n)),
        any::<bool>().prop_map(|b| json!(b)),
        "[a-z]{0,8}".prop_map(|s| json!(s)),
        Just(Value::Null),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(|map| json!(map)),
        ]
    })
}

proptest! {
    #[test]
    fn every_value_is_close_to_itself(value in value_strategy()) {
        prop_assert!(close_values(&value, &value, "", &Policy::default()).is_ok());
    }

    #[test]
    fn numeric_closeness_matches_the_tolerance(x in -1e6..1e6f64, y in -1e6..1e6f64) {
        let within = (x - y).abs() < TOLERANCE;
        prop_assert_eq!(close(&x, &y, "").is_ok(), within);
    }

    #[test]
    fn perturbation_below_tolerance_is_accepted(
        base in prop::collection::vec(-1e6..1e6f64, 1..8),
        eps in 0.0..(TOLERANCE * 0.5),
    ) {
        let mut shifted = base.clone();
        shifted[0] += eps;
        prop_assert!(close(&shifted, &base, "").is_ok());
    }

    #[test]
    fn identity_is_injective_over_distinct_inputs(
        items in prop::collection::btree_set(any::<u32>(), 0..24)
    ) {
        let items: Vec<u32> = items.into_iter().collect();
        prop_assert!(injects(|n: &u32| *n, &items).is_ok());
    }

    #[test]
    fn exact_round_trips_satisfy_the_inverse_law(items in prop::collection::vec(any::<u32>(), 0..16)) {
        prop_assert!(inverses(|n: &u32| n.to_string(), |s: &String| s.parse().unwrap_or(0), &items).is_ok());
    }
}
