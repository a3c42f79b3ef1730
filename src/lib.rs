//! Facade crate for the Loadwise load optimiser.
//!
//! This crate re-exports the core domain types and exposes the exact bitmask
//! optimiser behind a feature flag.

#![forbid(unsafe_code)]

pub use loadwise_core::{
    Capacity, LaneKey, Lanes, LoadOptimizer, LoadPlan, LoadPlanner, LoadRequest,
    LoadRequestValidationError, MAX_ORDERS, MAX_PAYOUT_CENTS, Order, PlanError, Selection, Truck, group_by_lane,
    utilization_percent,
};

#[cfg(feature = "solver-dp")]
pub use loadwise_solver_dp::BitmaskOptimizer;
