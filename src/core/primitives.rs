use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Converts an exact decimal reading into a plotting coordinate.
pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    match value.to_f64() {
        Some(converted) if converted.is_finite() => Ok(converted),
        _ => Err(ChartError::InvalidData(format!(
            "{field_name} has no finite f64 representation"
        ))),
    }
}

/// Seconds since the Unix epoch, keeping sub-second precision down to the
/// nanosecond.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) * 1e-9
}

/// Returns `value` when finite, otherwise `fallback`.
#[must_use]
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn sub_millisecond_time_is_kept() {
        let time = Utc
            .timestamp_opt(1_700_000_000, 250_000)
            .single()
            .expect("valid timestamp");
        let seconds = datetime_to_unix_seconds(time);
        assert!((seconds - 1_700_000_000.000_25).abs() <= 1e-6);
        assert!(seconds > 1_700_000_000.0);
    }

    #[test]
    fn pre_epoch_time_is_negative() {
        let time = Utc
            .timestamp_opt(-10, 500_000_000)
            .single()
            .expect("valid timestamp");
        assert!((datetime_to_unix_seconds(time) + 9.5).abs() <= 1e-12);
    }

    #[test]
    fn negative_decimal_converts() {
        let value = decimal_to_f64(Decimal::new(-25, 1), "value").expect("finite decimal");
        assert!((value + 2.5).abs() <= 1e-12);
    }
}
