//! Eager and lazy expressions must agree whenever the lazy operands are
//! constant predicates over the same booleans.

use proptest::prelude::*;
use wordlogic::{eager, lazy, obs, prelude::*};

#[derive(Clone, Copy, Debug)]
enum Step {
    And(bool),
    Or(bool),
    Xor(bool),
    AndNested(bool, bool),
    OrNot(bool),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<bool>().prop_map(Step::And),
        any::<bool>().prop_map(Step::Or),
        any::<bool>().prop_map(Step::Xor),
        (any::<bool>(), any::<bool>()).prop_map(|(a, b)| Step::AndNested(a, b)),
        any::<bool>().prop_map(Step::OrNot),
    ]
}

fn constant(value: bool) -> fn() -> bool {
    fn yes() -> bool {
        true
    }

    fn no() -> bool {
        false
    }

    if value { yes } else { no }
}

fn build_lazy(root: bool, steps: &[Step]) -> LazyExpr {
    steps
        .iter()
        .fold(lazy::expr(constant(root)), |acc, step| match *step {
            Step::And(v) => acc.and(constant(v)),
            Step::Or(v) => acc.or(constant(v)),
            Step::Xor(v) => acc.xor(constant(v)),
            Step::AndNested(a, b) => acc.and(lazy::expr(constant(a)).or(constant(b))),
            Step::OrNot(v) => acc.or(lazy::not(constant(v))),
        })
}

fn build_eager(root: bool, steps: &[Step]) -> EagerExpr {
    steps
        .iter()
        .fold(eager::expr(root), |acc, step| match *step {
            Step::And(v) => acc.and(v),
            Step::Or(v) => acc.or(v),
            Step::Xor(v) => acc.xor(v),
            Step::AndNested(a, b) => acc.and(eager::expr(a).or(b)),
            Step::OrNot(v) => acc.or(eager::not(v)),
        })
}

proptest! {
    #[test]
    fn eager_and_lazy_agree(
        root in any::<bool>(),
        steps in prop::collection::vec(arb_step(), 0..256),
    ) {
        prop_assert_eq!(build_lazy(root, &steps).result(), build_eager(root, &steps).result());
    }

    #[test]
    fn aggregates_agree(values in prop::collection::vec(any::<bool>(), 0..512)) {
        let predicates: Vec<_> = values.iter().copied().map(constant).collect();

        prop_assert_eq!(
            lazy::all_of(predicates.clone()).result(),
            eager::all_of(values.iter().copied()).result()
        );
        prop_assert_eq!(
            lazy::any_of(predicates).result(),
            eager::any_of(values.iter().copied()).result()
        );
    }

    #[test]
    fn building_records_nothing_until_result(
        root in any::<bool>(),
        steps in prop::collection::vec(arb_step(), 0..256),
    ) {
        obs::eval_reset();
        let expr = build_lazy(root, &steps);
        prop_assert_eq!(obs::eval_report(), obs::EvalReport::default());

        let _ = expr.result();
        let forced = obs::eval_report().results_forced;
        prop_assert_eq!(forced, u64::from(cfg!(feature = "metrics")));
    }
}
