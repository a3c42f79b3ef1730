//! Shippable orders and the lane key that decides which orders may share a
//! truck.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single shippable order offered to the truck.
///
/// Monetary amounts are integer cents; weight is pounds and volume is cubic
/// feet. The pickup and delivery dates are calendar days without a time
/// component.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use loadwise_core::Order;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pickup = NaiveDate::from_ymd_opt(2025, 12, 5).ok_or("bad date")?;
/// let delivery = NaiveDate::from_ymd_opt(2025, 12, 9).ok_or("bad date")?;
/// let order = Order {
///     id: "ord-001".into(),
///     payout_cents: 250_000,
///     weight_lbs: 18_000,
///     volume_cuft: 1_200,
///     origin: "Los Angeles, CA".into(),
///     destination: "Dallas, TX".into(),
///     pickup_date: pickup,
///     delivery_date: delivery,
///     is_hazmat: false,
/// };
/// assert_eq!(order.lane_key().origin, "Los Angeles, CA");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// Identifier, unique within a request.
    pub id: String,
    /// Amount paid for hauling the order, in cents.
    pub payout_cents: u64,
    /// Freight weight in pounds.
    pub weight_lbs: u32,
    /// Freight volume in cubic feet.
    pub volume_cuft: u32,
    /// Pickup location.
    pub origin: String,
    /// Drop-off location.
    pub destination: String,
    /// Day the freight becomes available.
    pub pickup_date: NaiveDate,
    /// Day the freight must be delivered by.
    pub delivery_date: NaiveDate,
    /// Whether the freight is hazardous material.
    pub is_hazmat: bool,
}

impl Order {
    /// Lane this order travels on.
    #[must_use]
    pub fn lane_key(&self) -> LaneKey<'_> {
        LaneKey {
            origin: &self.origin,
            destination: &self.destination,
            is_hazmat: self.is_hazmat,
        }
    }
}

/// The `(origin, destination, hazmat)` triple shared by combinable orders.
///
/// Two orders may only ever travel together when their lane keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneKey<'a> {
    /// Pickup location.
    pub origin: &'a str,
    /// Drop-off location.
    pub destination: &'a str,
    /// Hazardous freight flag.
    pub is_hazmat: bool,
}
