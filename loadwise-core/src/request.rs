//! Load requests and their validation.
//!
//! The optimiser assumes every order is well formed and that a request holds
//! no more than [`MAX_ORDERS`] orders, each paying at most
//! [`MAX_PAYOUT_CENTS`]. [`LoadRequest::validate`] is the gate
//! that establishes those assumptions before any search runs.

use std::collections::HashSet;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MAX_ORDERS, MAX_PAYOUT_CENTS, Order, Truck};

/// A truck and the orders offered to it.
///
/// # Examples
/// ```
/// use loadwise_core::{LoadRequest, Truck};
///
/// let request = LoadRequest {
///     truck: Truck {
///         id: "truck-123".into(),
///         max_weight_lbs: 44_000,
///         max_volume_cuft: 3_000,
///     },
///     orders: Vec::new(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadRequest {
    /// Truck to load.
    pub truck: Truck,
    /// Candidate orders.
    pub orders: Vec<Order>,
}

/// Reasons a [`LoadRequest`] is rejected before optimisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadRequestValidationError {
    /// The truck identifier was blank.
    #[error("truck id must not be empty")]
    EmptyTruckId,
    /// The truck weight capacity was zero.
    #[error("truck max_weight_lbs must be positive")]
    ZeroMaxWeight,
    /// The truck volume capacity was zero.
    #[error("truck max_volume_cuft must be positive")]
    ZeroMaxVolume,
    /// More orders than the exact optimiser can enumerate.
    #[error("request has {count} orders; at most {max} are allowed")]
    TooManyOrders {
        /// Orders supplied.
        count: usize,
        /// Upper bound.
        max: usize,
    },
    /// An order identifier was blank.
    #[error("order at position {index} has an empty id")]
    EmptyOrderId {
        /// Position of the order in the request.
        index: usize,
    },
    /// Two orders shared an identifier.
    #[error("order id {id:?} appears more than once")]
    DuplicateOrderId {
        /// Repeated identifier.
        id: String,
    },
    /// An order paid nothing.
    #[error("order {id:?} must have a positive payout_cents")]
    ZeroPayout {
        /// Offending order.
        id: String,
    },
    /// An order paid more than totals can safely accumulate.
    #[error("order {id:?} has payout_cents above {max}")]
    PayoutTooLarge {
        /// Offending order.
        id: String,
        /// Upper bound.
        max: u64,
    },
    /// An order weighed nothing.
    #[error("order {id:?} must have a positive weight_lbs")]
    ZeroWeight {
        /// Offending order.
        id: String,
    },
    /// An order occupied no space.
    #[error("order {id:?} must have a positive volume_cuft")]
    ZeroVolume {
        /// Offending order.
        id: String,
    },
    /// An order had a blank origin.
    #[error("order {id:?} has an empty origin")]
    EmptyOrigin {
        /// Offending order.
        id: String,
    },
    /// An order had a blank destination.
    #[error("order {id:?} has an empty destination")]
    EmptyDestination {
        /// Offending order.
        id: String,
    },
    /// Delivery was scheduled before pickup.
    #[error("order {id:?}: delivery_date must be on or after pickup_date")]
    DeliveryBeforePickup {
        /// Offending order.
        id: String,
    },
}

impl LoadRequest {
    /// Check the request against the optimiser's preconditions.
    ///
    /// Rules are checked truck first, then order count, then each order in
    /// input order; the first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadRequestValidationError`] encountered.
    pub fn validate(&self) -> Result<(), LoadRequestValidationError> {
        validate_truck(&self.truck)?;
        if self.orders.len() > MAX_ORDERS {
            return Err(LoadRequestValidationError::TooManyOrders {
                count: self.orders.len(),
                max: MAX_ORDERS,
            });
        }
        let mut seen = HashSet::with_capacity(self.orders.len());
        for (index, order) in self.orders.iter().enumerate() {
            validate_order(index, order)?;
            if !seen.insert(order.id.as_str()) {
                return Err(LoadRequestValidationError::DuplicateOrderId {
                    id: order.id.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_truck(truck: &Truck) -> Result<(), LoadRequestValidationError> {
    if truck.id.trim().is_empty() {
        return Err(LoadRequestValidationError::EmptyTruckId);
    }
    if truck.max_weight_lbs == 0 {
        return Err(LoadRequestValidationError::ZeroMaxWeight);
    }
    if truck.max_volume_cuft == 0 {
        return Err(LoadRequestValidationError::ZeroMaxVolume);
    }
    Ok(())
}

fn validate_order(index: usize, order: &Order) -> Result<(), LoadRequestValidationError> {
    if order.id.trim().is_empty() {
        return Err(LoadRequestValidationError::EmptyOrderId { index });
    }
    let id = || order.id.clone();
    if order.payout_cents == 0 {
        return Err(LoadRequestValidationError::ZeroPayout { id: id() });
    }
    if order.payout_cents > MAX_PAYOUT_CENTS {
        return Err(LoadRequestValidationError::PayoutTooLarge {
            id: id(),
            max: MAX_PAYOUT_CENTS,
        });
    }
    if order.weight_lbs == 0 {
        return Err(LoadRequestValidationError::ZeroWeight { id: id() });
    }
    if order.volume_cuft == 0 {
        return Err(LoadRequestValidationError::ZeroVolume { id: id() });
    }
    if order.origin.trim().is_empty() {
        return Err(LoadRequestValidationError::EmptyOrigin { id: id() });
    }
    if order.destination.trim().is_empty() {
        return Err(LoadRequestValidationError::EmptyDestination { id: id() });
    }
    if order.delivery_date < order.pickup_date {
        return Err(LoadRequestValidationError::DeliveryBeforePickup { id: id() });
    }
    Ok(())
}
