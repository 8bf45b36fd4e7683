//! Property-based tests for reconciliation invariants

use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use reconciliation_core::*;

fn arb_movement() -> impl Strategy<Value = Movement> {
    (
        any::<i64>(),
        1u32..=12,
        1u32..=28,
        0u32..24,
        prop::sample::select(vec!["Achat en ligne", "Paiement facture", "Virement", "Loyer"]),
        -100_000i64..100_000i64,
    )
        .prop_map(|(id, month, day, hour, label, cents)| {
            Movement::new(
                id,
                Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap(),
                label,
                BigDecimal::new(cents.into(), 2),
            )
        })
}

fn arb_balance() -> impl Strategy<Value = Balance> {
    (1u32..=12, 1u32..=28, -100_000i64..100_000i64).prop_map(|(month, day, cents)| {
        Balance::new(
            Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap(),
            BigDecimal::new(cents.into(), 2),
        )
    })
}

fn without_duplicates(movements: Vec<Movement>) -> Vec<Movement> {
    let mut seen = std::collections::HashSet::new();
    movements
        .into_iter()
        .filter(|m| seen.insert(movement_identifier(m)))
        .collect()
}

proptest! {
    /// Property: a batch holding a copied movement is rejected on duplicates alone
    #[test]
    fn duplicates_short_circuit(
        mut movements in prop::collection::vec(arb_movement(), 1..40),
        balances in prop::collection::vec(arb_balance(), 0..10),
        source in any::<prop::sample::Index>(),
        position in any::<prop::sample::Index>(),
        copy_id in any::<i64>(),
    ) {
        let mut copy = movements[source.index(movements.len())].clone();
        copy.id = copy_id;
        let at = position.index(movements.len() + 1);
        movements.insert(at, copy);

        let verdict = ReconciliationEngine::new().validate(&movements, &balances);
        prop_assert!(!verdict.reasons.duplicates.is_empty());
        prop_assert!(!verdict.is_valid);
        prop_assert!(verdict.reasons.balance_errors.is_empty());
    }

    /// Property: validity is exactly the absence of reasons
    #[test]
    fn valid_iff_no_reasons(
        movements in prop::collection::vec(arb_movement(), 0..40),
        balances in prop::collection::vec(arb_balance(), 0..10),
    ) {
        let verdict = ReconciliationEngine::new().validate(&movements, &balances);
        prop_assert_eq!(verdict.is_valid, verdict.reasons.is_empty());
    }

    /// Property: without balances a duplicate-free batch is valid
    #[test]
    fn no_balances_is_valid(movements in prop::collection::vec(arb_movement(), 0..40)) {
        let movements = without_duplicates(movements);
        prop_assert!(ReconciliationEngine::new().validate(&movements, &[]).is_valid);
    }

    /// Property: changing the id of a copy still yields a duplicate group
    #[test]
    fn duplicates_ignore_id(movement in arb_movement(), other_id in any::<i64>()) {
        let mut copy = movement.clone();
        copy.id = other_id;

        let groups = find_duplicates(&[movement, copy]);
        prop_assert_eq!(groups.len(), 1);
        prop_assert_eq!(groups[0].movements.len(), 2);
    }

    /// Property: every produced group has at least two members sharing its identifier
    #[test]
    fn groups_are_well_formed(movements in prop::collection::vec(arb_movement(), 0..40)) {
        for group in find_duplicates(&movements) {
            prop_assert!(group.movements.len() >= 2);
            for m in &group.movements {
                prop_assert_eq!(&movement_identifier(m), &group.identifier);
            }
        }
    }

    /// Property: balances equal to the true sums never produce errors
    #[test]
    fn true_sums_reconcile(movements in prop::collection::vec(arb_movement(), 0..40)) {
        let totals = calculate_balances(&movements);
        let balances: Vec<Balance> = totals
            .iter()
            .map(|(period, sum)| {
                let date = Utc
                    .with_ymd_and_hms(period.year(), period.month(), 28, 0, 0, 0)
                    .unwrap();
                Balance::new(date, sum.clone())
            })
            .collect();

        prop_assert!(compare_balances(&totals, &balances).is_empty());
    }

    /// Property: aggregation does not depend on input order
    #[test]
    fn aggregation_is_order_independent(movements in prop::collection::vec(arb_movement(), 0..40)) {
        let mut reversed = movements.clone();
        reversed.reverse();
        prop_assert_eq!(calculate_balances(&movements), calculate_balances(&reversed));
    }

    /// Property: recorded errors carry the absolute difference
    #[test]
    fn error_difference_is_absolute(
        movements in prop::collection::vec(arb_movement(), 0..20),
        balances in prop::collection::vec(arb_balance(), 0..10),
    ) {
        let totals = calculate_balances(&movements);
        for (period, error) in compare_balances(&totals, &balances) {
            prop_assert_eq!(error.period, period);
            prop_assert!(error.expected != error.actual);
            prop_assert_eq!(error.difference.clone(), (&error.expected - &error.actual).abs());
        }
    }
}
