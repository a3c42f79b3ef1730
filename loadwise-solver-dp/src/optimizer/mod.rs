//! `BitmaskOptimizer`: the exact subset optimiser.

use loadwise_core::{Capacity, LoadOptimizer, MAX_ORDERS, Order, Selection};

use crate::table;

/// Exact optimiser enumerating every subset of a lane with bitmask dynamic
/// programming.
///
/// The optimiser holds no state between calls; each call allocates and owns
/// a table of `2^n` subset states, so `n` must not exceed [`MAX_ORDERS`].
/// Passing more orders is an integration error: debug builds panic, release
/// builds log a warning and only consider the first [`MAX_ORDERS`] orders.
///
/// # Examples
/// ```
/// use loadwise_core::{Capacity, LoadOptimizer};
/// use loadwise_solver_dp::BitmaskOptimizer;
///
/// let selection = BitmaskOptimizer::new().optimise(Capacity::new(44_000, 3_000), &[]);
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmaskOptimizer;

impl BitmaskOptimizer {
    /// Construct the optimiser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LoadOptimizer for BitmaskOptimizer {
    fn optimise(&self, capacity: Capacity, orders: &[&Order]) -> Selection {
        debug_assert!(
            orders.len() <= MAX_ORDERS,
            "bitmask optimiser received {} orders; at most {MAX_ORDERS} are supported",
            orders.len()
        );
        let bounded = match orders.get(..MAX_ORDERS) {
            Some(head) if orders.len() > MAX_ORDERS => {
                log::warn!(
                    "bitmask optimiser received {} orders; only the first {MAX_ORDERS} are considered",
                    orders.len()
                );
                head
            }
            _ => orders,
        };
        table::search(capacity, bounded)
    }
}
