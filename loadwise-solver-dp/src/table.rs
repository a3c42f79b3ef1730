//! Dense subset table and the bitmask enumeration over it.
//!
//! Subset `mask` holds order `i` when bit `i` is set. Clearing the lowest set
//! bit of a mask yields a strictly smaller mask, so visiting masks in
//! ascending order always finds the predecessor already filled in. A subset
//! that breaks a constraint stays empty and is never extended: weight and
//! volume only grow, the latest pickup only moves later and the earliest
//! delivery only moves earlier as orders are added.

use chrono::NaiveDate;
use loadwise_core::{Capacity, Order, Selection};

/// Running totals for one feasible subset.
///
/// Payout accumulates in `u128`, which no lane of
/// [`MAX_ORDERS`](loadwise_core::MAX_ORDERS) `u64` payouts can overflow, so
/// subsets compare exactly whatever the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubsetState {
    pub(crate) payout_cents: u128,
    pub(crate) weight_lbs: u32,
    pub(crate) volume_cuft: u32,
    pub(crate) latest_pickup: NaiveDate,
    pub(crate) earliest_delivery: NaiveDate,
}

impl SubsetState {
    /// State of the empty subset. The date sentinels sit at the ends of the
    /// representable calendar so any real order replaces both.
    pub(crate) const EMPTY: Self = Self {
        payout_cents: 0,
        weight_lbs: 0,
        volume_cuft: 0,
        latest_pickup: NaiveDate::MIN,
        earliest_delivery: NaiveDate::MAX,
    };

    /// Add `order` to this subset, or `None` if the result is infeasible.
    pub(crate) fn extend(self, order: &Order, capacity: Capacity) -> Option<Self> {
        let weight_lbs = self
            .weight_lbs
            .checked_add(order.weight_lbs)
            .filter(|&weight| weight <= capacity.max_weight_lbs)?;
        let volume_cuft = self
            .volume_cuft
            .checked_add(order.volume_cuft)
            .filter(|&volume| volume <= capacity.max_volume_cuft)?;
        let latest_pickup = self.latest_pickup.max(order.pickup_date);
        let earliest_delivery = self.earliest_delivery.min(order.delivery_date);
        if latest_pickup > earliest_delivery {
            return None;
        }
        Some(Self {
            payout_cents: self.payout_cents + u128::from(order.payout_cents),
            weight_lbs,
            volume_cuft,
            latest_pickup,
            earliest_delivery,
        })
    }
}

/// Arena of subset states indexed directly by membership mask.
///
/// `None` marks a subset that is infeasible or has an infeasible
/// predecessor.
#[derive(Debug)]
pub(crate) struct SubsetTable {
    states: Vec<Option<SubsetState>>,
}

impl SubsetTable {
    /// Allocate a table for every subset of `order_count` orders.
    pub(crate) fn new(order_count: usize) -> Self {
        let mut states = vec![None; 1_usize << order_count];
        if let Some(empty) = states.first_mut() {
            *empty = Some(SubsetState::EMPTY);
        }
        Self { states }
    }

    /// Number of subsets, including the empty one.
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn get(&self, mask: usize) -> Option<SubsetState> {
        self.states.get(mask).copied().flatten()
    }

    fn insert(&mut self, mask: usize, state: SubsetState) {
        if let Some(slot) = self.states.get_mut(mask) {
            *slot = Some(state);
        }
    }
}

/// Enumerate every subset of `orders` and return the best-paying feasible
/// one.
///
/// Only a strictly greater payout replaces the incumbent, so among equal
/// payouts the numerically smallest mask wins. Time and memory are both
/// proportional to `2^orders.len()`.
pub(crate) fn search(capacity: Capacity, orders: &[&Order]) -> Selection {
    let mut table = SubsetTable::new(orders.len());
    let mut best_mask = 0_usize;
    let mut best_payout = 0_u128;

    for mask in 1..table.len() {
        let last_added = mask.trailing_zeros() as usize;
        let predecessor = mask & (mask - 1);
        let Some(previous) = table.get(predecessor) else {
            continue;
        };
        let Some(order) = orders.get(last_added) else {
            continue;
        };
        let Some(state) = previous.extend(order, capacity) else {
            continue;
        };
        table.insert(mask, state);
        if state.payout_cents > best_payout {
            best_payout = state.payout_cents;
            best_mask = mask;
        }
    }

    decode(&table, best_mask, orders.len())
}

/// Expand `mask` into a [`Selection`].
///
/// Orders within [`MAX_PAYOUT_CENTS`](loadwise_core::MAX_PAYOUT_CENTS) always total less than `u64::MAX`.
/// Larger inputs still choose the right subset, but the reported payout is
/// capped at `u64::MAX`.
fn decode(table: &SubsetTable, mask: usize, order_count: usize) -> Selection {
    if mask == 0 {
        return Selection::empty();
    }
    let Some(state) = table.get(mask) else {
        return Selection::empty();
    };
    Selection {
        indices: (0..order_count)
            .filter(|&bit| mask & (1_usize << bit) != 0)
            .collect(),
        total_payout_cents: u64::try_from(state.payout_cents).unwrap_or(u64::MAX),
        total_weight_lbs: u64::from(state.weight_lbs),
        total_volume_cuft: u64::from(state.volume_cuft),
    }
}
