//! Date/time and duration generators.

use chrono::{DateTime, Duration, Utc};
use fill_core::{Value, ValueGenerator};
use rand::{Rng, RngCore};

/// Generates a random instant in an inclusive range, at second resolution.
///
/// With no explicit end the range is open-ended at "now", evaluated at
/// generation time. The default generator for `date_time` spans the Unix
/// epoch to now.
#[derive(Debug, Clone)]
pub struct DateTimeRange {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl DateTimeRange {
    /// Create a generator for the inclusive range `[start, end]`.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end, "date range must satisfy start <= end");
        Self {
            start,
            end: Some(end),
        }
    }

    /// Create a generator from `start` to the moment of each generation.
    pub fn since(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }
}

impl ValueGenerator for DateTimeRange {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        let end = self.end.unwrap_or_else(Utc::now);
        let span = (end - self.start).num_seconds().max(0);
        let offset = rng.gen_range(0..=span);
        Value::DateTime(self.start + Duration::seconds(offset))
    }
}

/// Generates a random duration with an inclusive range of whole seconds.
#[derive(Debug, Clone)]
pub struct DurationRange {
    min_secs: i64,
    max_secs: i64,
}

impl DurationRange {
    /// Create a generator for the inclusive range `[min_secs, max_secs]`.
    pub fn new(min_secs: i64, max_secs: i64) -> Self {
        debug_assert!(
            min_secs <= max_secs,
            "duration range must satisfy min <= max"
        );
        Self { min_secs, max_secs }
    }
}

impl ValueGenerator for DurationRange {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        Value::Duration(Duration::seconds(rng.gen_range(self.min_secs..=self.max_secs)))
    }
}
