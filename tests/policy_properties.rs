//! Algebraic properties of policies, using the exported strategies.
#![cfg(feature = "proptest")]

use proptest::prelude::*;
use tidewater::prelude::*;
use tidewater::retry::apply_policy;
use tidewater::testing::strategies::{retry_policy, retry_status};

proptest! {
    #[test]
    fn combine_is_associative(
        a in retry_policy(),
        b in retry_policy(),
        c in retry_policy(),
        status in retry_status(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left.decide(&status), right.decide(&status));
    }

    #[test]
    fn empty_is_identity(p in retry_policy(), status in retry_status()) {
        prop_assert_eq!(RetryPolicy::empty().combine(p.clone()).decide(&status), p.decide(&status));
        prop_assert_eq!(p.clone().combine(RetryPolicy::empty()).decide(&status), p.decide(&status));
    }

    #[test]
    fn limited_policies_terminate(p in retry_policy(), n in 0u32..20) {
        let limited = p.with_max_retries(n);
        let steps = RetryStatus::simulate(&limited, 1_000).count();
        prop_assert!(steps <= n as usize + 1);
    }

    #[test]
    fn apply_policy_advances_by_one(p in retry_policy(), status in retry_status()) {
        let next = apply_policy(&p, status);
        prop_assert_eq!(next.iter_number, status.iter_number + 1);
        prop_assert!(next.cumulative_delay >= status.cumulative_delay);
    }
}
