//! Exact bitmask dynamic-programming optimiser for Loadwise.
//!
//! This crate provides [`BitmaskOptimizer`], the default implementation of
//! the [`LoadOptimizer`](loadwise_core::LoadOptimizer) trait. It enumerates
//! all `2^n` subsets of one lane's orders, deriving each subset from its
//! predecessor without the lowest member, and keeps the feasible subset with
//! the highest payout.
//!
//! Cost is exponential in the lane size. Callers keep lanes at or below
//! [`MAX_ORDERS`](loadwise_core::MAX_ORDERS), which request validation
//! enforces for whole requests.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod table;

pub use optimizer::BitmaskOptimizer;
