//! Property-based tests for the bitmask optimiser.
//!
//! # Invariants tested
//!
//! - **Index validity:** selected indices are strictly ascending and in range.
//! - **Capacity:** selected weight and volume never exceed the truck.
//! - **Shared window:** every selected pickup precedes every selected delivery.
//! - **Totals:** reported totals equal the sums over the selected orders.
//! - **Optimality:** payout matches a brute-force search over all subsets.


use loadwise_core::test_support::ExhaustiveOptimizer;
use loadwise_core::{LoadOptimizer, Order};
use loadwise_solver_dp::BitmaskOptimizer;
use proptest::prelude::*;

use proptest_support::{capacity_strategy, lane_strategy, selected};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn indices_are_ascending_and_in_range(
        orders in lane_strategy(0, 12),
        capacity in capacity_strategy(),
    ) {
        let refs: Vec<&Order> = orders.iter().collect();
        let selection = BitmaskOptimizer::new().optimise(capacity, &refs);

        prop_assert!(selection.indices.is_sorted_by(|a, b| a < b));
        prop_assert!(selection.indices.iter().all(|&index| index < refs.len()));
    }

    #[test]
    fn selection_fits_the_truck(
        orders in lane_strategy(1, 12),
        capacity in capacity_strategy(),
    ) {
        let refs: Vec<&Order> = orders.iter().collect();
        let selection = BitmaskOptimizer::new().optimise(capacity, &refs);

        prop_assert!(selection.total_weight_lbs <= u64::from(capacity.max_weight_lbs));
        prop_assert!(selection.total_volume_cuft <= u64::from(capacity.max_volume_cuft));
    }

    #[test]
    fn selection_shares_a_common_day(
        orders in lane_strategy(1, 12),
        capacity in capacity_strategy(),
    ) {
        let refs: Vec<&Order> = orders.iter().collect();
        let selection = BitmaskOptimizer::new().optimise(capacity, &refs);
        let chosen = selected(&refs, &selection);

        let latest_pickup = chosen.iter().map(|order| order.pickup_date).max();
        let earliest_delivery = chosen.iter().map(|order| order.delivery_date).min();
        if let (Some(pickup), Some(delivery)) = (latest_pickup, earliest_delivery) {
            prop_assert!(pickup <= delivery, "{pickup} is after {delivery}");
        }
    }

    #[test]
    fn totals_match_selected_orders(
        orders in lane_strategy(1, 12),
        capacity in capacity_strategy(),
    ) {
        let refs: Vec<&Order> = orders.iter().collect();
        let selection = BitmaskOptimizer::new().optimise(capacity, &refs);
        let chosen = selected(&refs, &selection);

        prop_assert_eq!(chosen.len(), selection.indices.len());
        prop_assert_eq!(
            selection.total_payout_cents,
            chosen.iter().map(|order| order.payout_cents).sum::<u64>()
        );
        prop_assert_eq!(
            selection.total_weight_lbs,
            chosen.iter().map(|order| u64::from(order.weight_lbs)).sum::<u64>()
        );
        prop_assert_eq!(
            selection.total_volume_cuft,
            chosen.iter().map(|order| u64::from(order.volume_cuft)).sum::<u64>()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The reference search visits masks in the same order with the same
    /// strict comparison, so even the tie-break must agree.
    #[test]
    fn matches_exhaustive_search(
        orders in lane_strategy(0, 10),
        capacity in capacity_strategy(),
    ) {
        let refs: Vec<&Order> = orders.iter().collect();
        let expected = ExhaustiveOptimizer.optimise(capacity, &refs);
        let actual = BitmaskOptimizer::new().optimise(capacity, &refs);

        prop_assert_eq!(actual, expected);
    }
}
