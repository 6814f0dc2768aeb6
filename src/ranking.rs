//! Top-N ranking of lights within each time bucket.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::TrafficAggregate;

/// Lights reported per bucket unless overridden on the CLI.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightCount {
    pub light_id: String,
    pub cars: u64,
}

/// The ranked lights for one (day, hour) bucket, non-increasing by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRanking {
    pub day: Option<NaiveDate>,
    pub hour: u8,
    pub top: Vec<LightCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedReport {
    pub groups: Vec<BucketRanking>,
}

/// Ranks every non-empty bucket group of `aggregate` and keeps the `n` most
/// congested lights per group.
///
/// Groups are ordered by day (undated first) then hour. Within a group,
/// lights sort by count descending; equal counts tie-break by ascending
/// `light_id`, which keeps the report deterministic regardless of the sort
/// implementation or map iteration order. Buckets with no lights simply never
/// appear.
pub fn rank_top_n(aggregate: &TrafficAggregate, n: usize) -> RankedReport {
    let mut grouped: BTreeMap<(Option<NaiveDate>, u8), Vec<LightCount>> = BTreeMap::new();
    for (key, cars) in aggregate.iter() {
        grouped
            .entry((key.day, key.hour))
            .or_default()
            .push(LightCount {
                light_id: key.light_id.clone(),
                cars,
            });
    }

    let groups = grouped
        .into_iter()
        .map(|((day, hour), mut lights)| {
            lights.sort_by(|a, b| b.cars.cmp(&a.cars).then_with(|| a.light_id.cmp(&b.light_id)));
            lights.truncate(n);
            BucketRanking { day, hour, top: lights }
        })
        .collect();

    RankedReport { groups }
}
