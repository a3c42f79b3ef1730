//! Test-only builders and a brute-force reference optimiser used by unit,
//! property and behaviour tests.

use chrono::NaiveDate;

use crate::{Capacity, LoadOptimizer, Order, Selection, Truck};

/// Build a calendar date from literal components.
///
/// # Panics
///
/// Panics when the components do not form a valid date.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures use literal calendar dates and should fail loudly"
)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should be valid")
}

/// Construct a truck with the given capacity and a fixed identifier.
#[must_use]
pub fn truck(max_weight_lbs: u32, max_volume_cuft: u32) -> Truck {
    Truck {
        id: "truck-123".to_owned(),
        max_weight_lbs,
        max_volume_cuft,
    }
}

/// Fluent builder for [`Order`] values with valid defaults.
///
/// Defaults: payout 1000 cents, 100 lbs, 10 cuft, lane `A -> B`, non-hazmat,
/// window 2025-12-05 to 2025-12-09.
///
/// # Examples
/// ```
/// use loadwise_core::test_support::OrderBuilder;
///
/// let order = OrderBuilder::new("ord-1").payout(5_000).build();
/// assert_eq!(order.id, "ord-1");
/// assert_eq!(order.payout_cents, 5_000);
/// ```
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    /// Start building an order with `id`.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            order: Order {
                id: id.to_owned(),
                payout_cents: 1_000,
                weight_lbs: 100,
                volume_cuft: 10,
                origin: "A".to_owned(),
                destination: "B".to_owned(),
                pickup_date: date(2025, 12, 5),
                delivery_date: date(2025, 12, 9),
                is_hazmat: false,
            },
        }
    }

    /// Set the payout in cents.
    #[must_use]
    pub const fn payout(mut self, payout_cents: u64) -> Self {
        self.order.payout_cents = payout_cents;
        self
    }

    /// Set the weight in pounds.
    #[must_use]
    pub const fn weight(mut self, weight_lbs: u32) -> Self {
        self.order.weight_lbs = weight_lbs;
        self
    }

    /// Set the volume in cubic feet.
    #[must_use]
    pub const fn volume(mut self, volume_cuft: u32) -> Self {
        self.order.volume_cuft = volume_cuft;
        self
    }

    /// Set origin and destination.
    #[must_use]
    pub fn lane(mut self, origin: &str, destination: &str) -> Self {
        origin.clone_into(&mut self.order.origin);
        destination.clone_into(&mut self.order.destination);
        self
    }

    /// Set the hazmat flag.
    #[must_use]
    pub const fn hazmat(mut self, is_hazmat: bool) -> Self {
        self.order.is_hazmat = is_hazmat;
        self
    }

    /// Set the pickup and delivery dates.
    #[must_use]
    pub const fn window(mut self, pickup: NaiveDate, delivery: NaiveDate) -> Self {
        self.order.pickup_date = pickup;
        self.order.delivery_date = delivery;
        self
    }

    /// Finish the order.
    #[must_use]
    pub fn build(self) -> Order {
        self.order
    }
}

/// Reference optimiser that checks every subset directly.
///
/// Feasibility is recomputed from scratch for each subset, so this is only
/// useful for small inputs. Ties resolve to the numerically smallest
/// membership mask.
#[derive(Debug, Default, Copy, Clone)]
pub struct ExhaustiveOptimizer;

impl LoadOptimizer for ExhaustiveOptimizer {
    fn optimise(&self, capacity: Capacity, orders: &[&Order]) -> Selection {
        let mut best = Selection::empty();
        let mut best_payout = 0_u128;
        for mask in 1_usize..(1_usize << orders.len()) {
            let members: Vec<usize> = (0..orders.len())
                .filter(|bit| mask & (1_usize << bit) != 0)
                .collect();
            if let Some((payout, candidate)) = evaluate(capacity, orders, members)
                && payout > best_payout
            {
                best_payout = payout;
                best = candidate;
            }
        }
        best
    }
}

/// Exact payout alongside the selection, whose own total is capped at
/// `u64::MAX`.
fn evaluate(
    capacity: Capacity,
    orders: &[&Order],
    members: Vec<usize>,
) -> Option<(u128, Selection)> {
    let chosen: Vec<&Order> = members
        .iter()
        .filter_map(|&index| orders.get(index).copied())
        .collect();
    let total_weight_lbs: u64 = chosen.iter().map(|o| u64::from(o.weight_lbs)).sum();
    let total_volume_cuft: u64 = chosen.iter().map(|o| u64::from(o.volume_cuft)).sum();
    let latest_pickup = chosen.iter().map(|o| o.pickup_date).max()?;
    let earliest_delivery = chosen.iter().map(|o| o.delivery_date).min()?;
    let fits = total_weight_lbs <= u64::from(capacity.max_weight_lbs)
        && total_volume_cuft <= u64::from(capacity.max_volume_cuft)
        && latest_pickup <= earliest_delivery;
    let payout: u128 = chosen.iter().map(|o| u128::from(o.payout_cents)).sum();
    fits.then(|| {
        let selection = Selection {
            indices: members,
            total_payout_cents: u64::try_from(payout).unwrap_or(u64::MAX),
            total_weight_lbs,
            total_volume_cuft,
        };
        (payout, selection)
    })
}
