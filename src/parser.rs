//! Line parser for traffic observation logs.
//!
//! Each line is a whitespace-separated record in the positional schema
//! `[date] time light_id car_count`, where the leading ISO date is present
//! only in the per-day variant of the log.

use chrono::NaiveDate;
use thiserror::Error;

/// One timestamped vehicle-count observation at a traffic light.
///
/// Immutable once parsed; `day` is `None` for the hour-only log variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub day: Option<NaiveDate>,
    pub hour: u8,
    pub light_id: String,
    pub car_count: u64,
}

/// A single malformed observation line. Recoverable: the worker that hit it
/// records a warning and moves on, it never aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 3 or 4 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("invalid hour in time field {0:?}")]
    InvalidHour(String),

    #[error("invalid car count {0:?}")]
    InvalidCarCount(String),
}

/// Parses one observation line.
///
/// The hour is the leading integer component of the time field
/// (`"14:30"` → 14) and must be in `0..=23`. Field lengths are unbounded.
pub fn parse_line(line: &str) -> Result<Observation, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (date, time, light_id, cars) = match fields.as_slice() {
        [time, light_id, cars] => (None, *time, *light_id, *cars),
        [date, time, light_id, cars] => (Some(*date), *time, *light_id, *cars),
        _ => {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            });
        }
    };

    let day = match date {
        Some(d) => Some(
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|_| ParseError::InvalidDate(d.to_string()))?,
        ),
        None => None,
    };

    let hour = parse_hour(time)?;

    let car_count: u64 = cars
        .parse()
        .map_err(|_| ParseError::InvalidCarCount(cars.to_string()))?;

    Ok(Observation {
        day,
        hour,
        light_id: light_id.to_string(),
        car_count,
    })
}

fn parse_hour(time: &str) -> Result<u8, ParseError> {
    let leading = time.split(':').next().unwrap_or(time);
    let hour: u8 = leading
        .parse()
        .map_err(|_| ParseError::InvalidHour(time.to_string()))?;
    if hour > 23 {
        return Err(ParseError::InvalidHour(time.to_string()));
    }
    Ok(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hour_only_line() {
        let obs = parse_line("08:15 L1 5").unwrap();
        assert_eq!(obs.day, None);
        assert_eq!(obs.hour, 8);
        assert_eq!(obs.light_id, "L1");
        assert_eq!(obs.car_count, 5);
    }

    #[test]
    fn test_parse_dated_line() {
        let obs = parse_line("2024-03-01 14:30 North-42 12").unwrap();
        assert_eq!(obs.day, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(obs.hour, 14);
        assert_eq!(obs.light_id, "North-42");
        assert_eq!(obs.car_count, 12);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let line = "2024-03-01 09:00 L7 3";
        assert_eq!(parse_line(line).unwrap(), parse_line(line).unwrap());
    }

    #[test]
    fn test_light_id_length_is_unbounded() {
        let obs = parse_line("10:00 intersection-of-main-and-elm-northbound 1").unwrap();
        assert_eq!(obs.light_id, "intersection-of-main-and-elm-northbound");
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            parse_line("08:15 L1"),
            Err(ParseError::FieldCount { found: 2 })
        );
    }

    #[test]
    fn test_too_many_fields() {
        assert_eq!(
            parse_line("2024-03-01 08:15 L1 5 extra"),
            Err(ParseError::FieldCount { found: 5 })
        );
    }

    #[test]
    fn test_non_numeric_car_count() {
        assert_eq!(
            parse_line("08:15 L1 five"),
            Err(ParseError::InvalidCarCount("five".to_string()))
        );
    }

    #[test]
    fn test_negative_car_count() {
        assert_eq!(
            parse_line("08:15 L1 -5"),
            Err(ParseError::InvalidCarCount("-5".to_string()))
        );
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(
            parse_line("25:00 L1 5"),
            Err(ParseError::InvalidHour("25:00".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_hour() {
        assert_eq!(
            parse_line("noon L1 5"),
            Err(ParseError::InvalidHour("noon".to_string()))
        );
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            parse_line("2024-13-40 08:15 L1 5"),
            Err(ParseError::InvalidDate("2024-13-40".to_string()))
        );
    }
}
