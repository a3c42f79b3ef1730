//! The optimiser seam and the selection it returns.

use crate::{Capacity, Order};

/// Largest order count the exact optimiser accepts.
///
/// Enumeration visits `2^n` subsets, so this bound keeps a single lane at
/// roughly four million states.
pub const MAX_ORDERS: usize = 22;

/// Largest payout a single order may carry.
///
/// The sum of [`MAX_ORDERS`] payouts at this bound still fits in a `u64`, so
/// selection and plan totals are exact.
pub const MAX_PAYOUT_CENTS: u64 = u64::MAX / MAX_ORDERS as u64;

/// A chosen subset of orders with its aggregate totals.
///
/// `indices` refer to positions in the slice handed to
/// [`LoadOptimizer::optimise`] and are strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selected positions, ascending.
    pub indices: Vec<usize>,
    /// Sum of selected payouts in cents.
    pub total_payout_cents: u64,
    /// Sum of selected weights in pounds.
    pub total_weight_lbs: u64,
    /// Sum of selected volumes in cubic feet.
    pub total_volume_cuft: u64,
}

impl Selection {
    /// The selection containing no orders.
    ///
    /// # Examples
    /// ```
    /// use loadwise_core::Selection;
    ///
    /// let selection = Selection::empty();
    /// assert!(selection.is_empty());
    /// assert_eq!(selection.total_payout_cents, 0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            indices: Vec::new(),
            total_payout_cents: 0,
            total_weight_lbs: 0,
            total_volume_cuft: 0,
        }
    }

    /// Whether no order was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Pick the payout-maximising feasible subset of one lane's orders.
///
/// A subset is feasible when its total weight and volume fit `capacity` and
/// the latest pickup date among its members is not after the earliest
/// delivery date. Implementations return [`Selection::empty`] when nothing
/// fits and must never fail.
///
/// Callers keep `orders.len()` at or below [`MAX_ORDERS`] and every payout at
/// or below [`MAX_PAYOUT_CENTS`].
/// Optimisers must be `Send + Sync` so lanes can be solved from any thread.
pub trait LoadOptimizer: Send + Sync {
    /// Choose the best feasible subset of `orders`.
    fn optimise(&self, capacity: Capacity, orders: &[&Order]) -> Selection;
}

impl<T: LoadOptimizer + ?Sized> LoadOptimizer for &T {
    fn optimise(&self, capacity: Capacity, orders: &[&Order]) -> Selection {
        (**self).optimise(capacity, orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FirstFitOptimizer;

    impl LoadOptimizer for FirstFitOptimizer {
        fn optimise(&self, capacity: Capacity, orders: &[&Order]) -> Selection {
            orders
                .iter()
                .position(|order| order.weight_lbs <= capacity.max_weight_lbs)
                .map_or_else(Selection::empty, |index| Selection {
                    indices: vec![index],
                    ..Selection::empty()
                })
        }
    }

    #[rstest]
    fn optimisers_are_object_safe() {
        let optimizer: Box<dyn LoadOptimizer> = Box::new(FirstFitOptimizer);
        let selection = optimizer.optimise(Capacity::new(1, 1), &[]);
        assert!(selection.is_empty());
    }

    #[rstest]
    fn references_delegate_to_the_optimiser() {
        let order = crate::test_support::OrderBuilder::new("a").weight(10).build();
        let optimizer: &dyn LoadOptimizer = &FirstFitOptimizer;
        let selection = (&optimizer).optimise(Capacity::new(10, 10), &[&order]);
        assert_eq!(selection.indices, vec![0]);
    }

    #[rstest]
    fn default_selection_is_empty() {
        assert_eq!(Selection::default(), Selection::empty());
    }
}
