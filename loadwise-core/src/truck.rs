//! Truck capacity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight and volume limits applied to every candidate load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity {
    /// Maximum weight in pounds.
    pub max_weight_lbs: u32,
    /// Maximum volume in cubic feet.
    pub max_volume_cuft: u32,
}

impl Capacity {
    /// Construct a capacity pair.
    ///
    /// # Examples
    /// ```
    /// use loadwise_core::Capacity;
    ///
    /// let capacity = Capacity::new(44_000, 3_000);
    /// assert_eq!(capacity.max_weight_lbs, 44_000);
    /// ```
    #[must_use]
    pub const fn new(max_weight_lbs: u32, max_volume_cuft: u32) -> Self {
        Self {
            max_weight_lbs,
            max_volume_cuft,
        }
    }
}

/// The truck a load is planned for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truck {
    /// Truck identifier echoed back in the plan.
    pub id: String,
    /// Maximum weight in pounds.
    pub max_weight_lbs: u32,
    /// Maximum volume in cubic feet.
    pub max_volume_cuft: u32,
}

impl Truck {
    /// Capacity pair shared by every subset evaluation for this truck.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        Capacity::new(self.max_weight_lbs, self.max_volume_cuft)
    }
}
