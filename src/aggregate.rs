//! The bucket aggregator: per-(day, hour, light) running car counts.
//!
//! Aggregation is a sum monoid, so partial aggregates built independently and
//! merged in any order equal a single sequential aggregation. That property is
//! what makes the worker fan-out correct. There is no internal locking: every
//! aggregate has exactly one owner at all times (worker-private until its
//! result is handed to the coordinator).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parser::Observation;

/// The unit of aggregation: one light within one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub day: Option<NaiveDate>,
    pub hour: u8,
    pub light_id: String,
}

impl From<Observation> for BucketKey {
    fn from(obs: Observation) -> Self {
        BucketKey {
            day: obs.day,
            hour: obs.hour,
            light_id: obs.light_id,
        }
    }
}

/// Running car-count totals keyed by [`BucketKey`]. Dynamically sized; there
/// is no ceiling on distinct lights, hours, or days.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficAggregate {
    buckets: HashMap<BucketKey, u64>,
}

impl TrafficAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the count for `key`, inserting the key if new.
    pub fn increment(&mut self, key: BucketKey, amount: u64) {
        *self.buckets.entry(key).or_insert(0) += amount;
    }

    /// Folds one parsed observation into the aggregate.
    pub fn record(&mut self, obs: Observation) {
        let cars = obs.car_count;
        self.increment(obs.into(), cars);
    }

    /// Merges `other` into `self` by summing per-key counts.
    ///
    /// Consumes `other`, so a partial result cannot be merged twice by
    /// accident. Commutative and associative.
    pub fn merge(&mut self, other: TrafficAggregate) {
        for (key, count) in other.buckets {
            self.increment(key, count);
        }
    }

    /// Number of distinct buckets discovered so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn count(&self, key: &BucketKey) -> u64 {
        self.buckets.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, u64)> {
        self.buckets.iter().map(|(k, &v)| (k, v))
    }
}
