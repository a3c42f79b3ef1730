//! Compatibility grouping.
//!
//! Orders on different lanes can never share a load, so each lane is solved
//! on its own. Splitting the order list first keeps the exponential search
//! small.

use std::collections::HashMap;

use crate::{LaneKey, Order};

/// Orders partitioned by [`LaneKey`].
///
/// Buckets are kept in the order their key first appears in the input and
/// each bucket preserves the relative input order of its members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lanes<'a> {
    buckets: Vec<(LaneKey<'a>, Vec<&'a Order>)>,
    index: HashMap<LaneKey<'a>, usize>,
}

impl<'a> Lanes<'a> {
    /// Number of distinct lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no orders were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Orders travelling on `key`, if any.
    #[must_use]
    pub fn get(&self, key: &LaneKey<'_>) -> Option<&[&'a Order]> {
        let position = *self.index.get(key)?;
        self.buckets
            .get(position)
            .map(|(_, orders)| orders.as_slice())
    }

    /// Iterate over `(key, orders)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (LaneKey<'a>, &[&'a Order])> + '_ {
        self.buckets
            .iter()
            .map(|(key, orders)| (*key, orders.as_slice()))
    }

    fn push(&mut self, order: &'a Order) {
        let key = order.lane_key();
        if let Some(bucket) = self
            .index
            .get(&key)
            .and_then(|&position| self.buckets.get_mut(position))
        {
            bucket.1.push(order);
            return;
        }
        self.index.insert(key, self.buckets.len());
        self.buckets.push((key, vec![order]));
    }
}

/// Partition `orders` into lane buckets.
///
/// Every order lands in exactly one bucket. An empty input yields no
/// buckets.
///
/// # Examples
/// ```
/// use loadwise_core::group_by_lane;
///
/// let lanes = group_by_lane(&[]);
/// assert!(lanes.is_empty());
/// ```
#[must_use]
pub fn group_by_lane(orders: &[Order]) -> Lanes<'_> {
    let mut lanes = Lanes::default();
    for order in orders {
        lanes.push(order);
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::OrderBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn mixed_orders() -> Vec<Order> {
        vec![
            OrderBuilder::new("a").lane("LA", "DAL").build(),
            OrderBuilder::new("b").lane("LA", "DAL").hazmat(true).build(),
            OrderBuilder::new("c").lane("LA", "PHX").build(),
            OrderBuilder::new("d").lane("LA", "DAL").build(),
            OrderBuilder::new("e").lane("SF", "DAL").build(),
        ]
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|order| order.id.clone()).collect()
    }

    #[rstest]
    fn empty_input_yields_no_buckets() {
        let lanes = group_by_lane(&[]);
        assert!(lanes.is_empty());
        assert_eq!(lanes.len(), 0);
        assert_eq!(lanes.iter().count(), 0);
    }

    #[rstest]
    fn shared_lane_orders_share_one_bucket(mixed_orders: Vec<Order>) {
        let lanes = group_by_lane(&mixed_orders);
        let key = LaneKey {
            origin: "LA",
            destination: "DAL",
            is_hazmat: false,
        };
        let bucket = lanes.get(&key).expect("LA-DAL bucket");
        assert_eq!(ids(bucket), vec!["a", "d"]);
    }

    #[rstest]
    fn differing_components_split_buckets(mixed_orders: Vec<Order>) {
        let lanes = group_by_lane(&mixed_orders);
        assert_eq!(lanes.len(), 4);
        let hazmat = LaneKey {
            origin: "LA",
            destination: "DAL",
            is_hazmat: true,
        };
        assert_eq!(ids(lanes.get(&hazmat).expect("hazmat bucket")), vec!["b"]);
    }

    #[rstest]
    fn buckets_partition_the_input(mixed_orders: Vec<Order>) {
        let lanes = group_by_lane(&mixed_orders);
        let mut grouped: Vec<String> = lanes
            .iter()
            .flat_map(|(_, orders)| ids(orders))
            .collect();
        grouped.sort();
        let mut expected: Vec<String> = mixed_orders.iter().map(|o| o.id.clone()).collect();
        expected.sort();
        assert_eq!(grouped, expected);
    }

    #[rstest]
    fn buckets_follow_first_appearance(mixed_orders: Vec<Order>) {
        let lanes = group_by_lane(&mixed_orders);
        let firsts: Vec<String> = lanes
            .iter()
            .filter_map(|(_, orders)| orders.first().map(|order| order.id.clone()))
            .collect();
        assert_eq!(firsts, vec!["a", "b", "c", "e"]);
    }

    #[rstest]
    fn unknown_lane_returns_none(mixed_orders: Vec<Order>) {
        let lanes = group_by_lane(&mixed_orders);
        let key = LaneKey {
            origin: "NYC",
            destination: "BOS",
            is_hazmat: false,
        };
        assert!(lanes.get(&key).is_none());
    }
}
