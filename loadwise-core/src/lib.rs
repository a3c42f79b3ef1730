//! Core domain types for the Loadwise load optimiser.
//!
//! The crate defines the order and truck model, the lane grouping that keeps
//! incompatible freight apart, the [`LoadOptimizer`] seam implemented by
//! solver crates and the [`LoadPlanner`] that ties them together.
//!
//! ```
//! use loadwise_core::group_by_lane;
//!
//! assert!(group_by_lane(&[]).is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod lane;
mod order;
mod plan;
mod request;
mod selection;
mod truck;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use lane::{Lanes, group_by_lane};
pub use order::{LaneKey, Order};
pub use plan::{LoadPlan, LoadPlanner, PlanError, utilization_percent};
pub use request::{LoadRequest, LoadRequestValidationError};
pub use selection::{LoadOptimizer, MAX_ORDERS, MAX_PAYOUT_CENTS, Selection};
pub use truck::{Capacity, Truck};
