//! Balanced assignment of contiguous record ranges to workers.

use std::ops::Range;

use crate::error::PipelineError;

/// Splits `[0, total)` into `workers` contiguous, disjoint, order-preserving
/// ranges. The first `total % workers` workers receive one extra record, so no
/// two assignments differ in size by more than one. Deterministic for a given
/// `(total, workers)` pair.
///
/// # Errors
///
/// Returns [`PipelineError::Configuration`] when `workers` is zero; a
/// coordinator-only topology is not supported.
pub fn partition(total: usize, workers: usize) -> Result<Vec<Range<usize>>, PipelineError> {
    if workers == 0 {
        return Err(PipelineError::Configuration(
            "at least one worker is required".to_string(),
        ));
    }

    let base = total / workers;
    let extra = total % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = base + usize::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let ranges = partition(8, 4).unwrap();
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_remainder_goes_to_first_workers() {
        let ranges = partition(10, 3).unwrap();
        assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn test_more_workers_than_records() {
        let ranges = partition(2, 5).unwrap();
        assert_eq!(ranges, vec![0..1, 1..2, 2..2, 2..2, 2..2]);
    }

    #[test]
    fn test_zero_records() {
        let ranges = partition(0, 3).unwrap();
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_zero_workers_is_a_configuration_error() {
        let err = partition(10, 0).unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
    }

    #[test]
    fn test_coverage_and_balance() {
        for total in [0, 1, 7, 100, 1013] {
            for workers in [1, 2, 3, 8, 64] {
                let ranges = partition(total, workers).unwrap();
                assert_eq!(ranges.len(), workers);

                // Contiguous and disjoint: each range starts where the
                // previous one ended, and together they cover [0, total).
                let mut expected_start = 0;
                for r in &ranges {
                    assert_eq!(r.start, expected_start);
                    expected_start = r.end;
                }
                assert_eq!(expected_start, total);

                let min = ranges.iter().map(|r| r.len()).min().unwrap();
                let max = ranges.iter().map(|r| r.len()).max().unwrap();
                assert!(max - min <= 1, "unbalanced split for {total}/{workers}");
            }
        }
    }
}
