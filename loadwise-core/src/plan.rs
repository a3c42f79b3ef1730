//! Load planning across lanes.
//!
//! The planner validates a [`LoadRequest`], solves each lane with a
//! [`LoadOptimizer`] and keeps the lane whose selection pays the most.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Capacity, LoadOptimizer, LoadRequest, LoadRequestValidationError, Order, group_by_lane};

/// The orders chosen for a truck with totals and utilisation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadPlan {
    /// Truck the plan was built for.
    pub truck_id: String,
    /// Identifiers of the selected orders, in lane input order.
    pub selected_order_ids: Vec<String>,
    /// Sum of selected payouts in cents.
    pub total_payout_cents: u64,
    /// Sum of selected weights in pounds.
    pub total_weight_lbs: u64,
    /// Sum of selected volumes in cubic feet.
    pub total_volume_cuft: u64,
    /// Weight used as a percentage of capacity, two decimals.
    pub utilization_weight_percent: f64,
    /// Volume used as a percentage of capacity, two decimals.
    pub utilization_volume_percent: f64,
}

/// Errors returned by [`LoadPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid load request: {0}")]
    InvalidRequest(#[from] LoadRequestValidationError),
}

/// Express `total` as a percentage of `capacity`, rounded to two decimals.
///
/// Returns `0.0` when `total` or `capacity` is zero.
///
/// # Examples
/// ```
/// use loadwise_core::utilization_percent;
///
/// assert_eq!(utilization_percent(30_000, 44_000), 68.18);
/// assert_eq!(utilization_percent(0, 44_000), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "utilisation is reported as a rounded floating-point percentage"
)]
pub fn utilization_percent(total: u64, capacity: u32) -> f64 {
    if total == 0 || capacity == 0 {
        return 0.0;
    }
    let ratio = total as f64 / f64::from(capacity);
    (ratio * 10_000.0).round() / 100.0
}

/// Plans loads by solving each compatibility lane independently.
///
/// # Examples
/// ```
/// use loadwise_core::{
///     Capacity, LoadOptimizer, LoadPlanner, LoadRequest, Order, Selection, Truck,
/// };
///
/// struct NothingFits;
///
/// impl LoadOptimizer for NothingFits {
///     fn optimise(&self, _capacity: Capacity, _orders: &[&Order]) -> Selection {
///         Selection::empty()
///     }
/// }
///
/// # fn main() -> Result<(), loadwise_core::PlanError> {
/// let planner = LoadPlanner::new(NothingFits);
/// let request = LoadRequest {
///     truck: Truck {
///         id: "truck-1".into(),
///         max_weight_lbs: 44_000,
///         max_volume_cuft: 3_000,
///     },
///     orders: Vec::new(),
/// };
/// let plan = planner.plan(&request)?;
/// assert!(plan.selected_order_ids.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadPlanner<O> {
    optimizer: O,
}

impl<O: LoadOptimizer> LoadPlanner<O> {
    /// Construct a planner around `optimizer`.
    #[must_use]
    pub const fn new(optimizer: O) -> Self {
        Self { optimizer }
    }

    /// Validate `request` and choose the best-paying feasible load.
    ///
    /// Lanes are compared by total payout; a later lane replaces the current
    /// best only when it pays strictly more.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] when validation fails.
    pub fn plan(&self, request: &LoadRequest) -> Result<LoadPlan, PlanError> {
        request.validate()?;
        let capacity = request.truck.capacity();

        let lanes = group_by_lane(&request.orders);
        let mut best: Vec<&Order> = Vec::new();
        let mut best_payout = 0_u64;
        for (key, orders) in lanes.iter() {
            let selection = self.optimizer.optimise(capacity, orders);
            log::debug!(
                "lane {} -> {} (hazmat: {}): {} orders, selected {:?} paying {}",
                key.origin,
                key.destination,
                key.is_hazmat,
                orders.len(),
                selection.indices,
                selection.total_payout_cents
            );
            if selection.total_payout_cents > best_payout {
                best_payout = selection.total_payout_cents;
                best = selection
                    .indices
                    .iter()
                    .filter_map(|&index| orders.get(index).copied())
                    .collect();
            }
        }

        let plan = build_plan(&request.truck.id, capacity, &best);
        log::debug!(
            "truck {}: {} lanes, {} orders selected, payout {}",
            plan.truck_id,
            lanes.len(),
            plan.selected_order_ids.len(),
            plan.total_payout_cents
        );
        Ok(plan)
    }
}

// Validated requests hold at most MAX_ORDERS orders each paying at most
// MAX_PAYOUT_CENTS, so these sums cannot overflow.
fn build_plan(truck_id: &str, capacity: Capacity, selected: &[&Order]) -> LoadPlan {
    let total_payout_cents = selected.iter().map(|order| order.payout_cents).sum();
    let total_weight_lbs = selected
        .iter()
        .map(|order| u64::from(order.weight_lbs))
        .sum();
    let total_volume_cuft = selected
        .iter()
        .map(|order| u64::from(order.volume_cuft))
        .sum();
    LoadPlan {
        truck_id: truck_id.to_owned(),
        selected_order_ids: selected.iter().map(|order| order.id.clone()).collect(),
        total_payout_cents,
        total_weight_lbs,
        total_volume_cuft,
        utilization_weight_percent: utilization_percent(total_weight_lbs, capacity.max_weight_lbs),
        utilization_volume_percent: utilization_percent(
            total_volume_cuft,
            capacity.max_volume_cuft,
        ),
    }
}
