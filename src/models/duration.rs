use clap::ValueEnum;
use serde::Serialize;

/// Duration bucket filter: a named range of acceptable visit lengths,
/// checked against the `duration_min` column.
///
/// 240 minutes is boundary-inclusive for both `HalfDay` and `FullDay`;
/// the buckets deliberately overlap at exactly four hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum DurationBucket {
    /// Within 1 hour (≤ 60 min)
    #[value(name = "1h")]
    WithinHour,
    /// Within 2 hours (≤ 120 min)
    #[value(name = "2h")]
    WithinTwoHours,
    /// Half day (≤ 240 min)
    #[value(name = "half-day")]
    HalfDay,
    /// Full day (≥ 240 min)
    #[value(name = "full-day")]
    FullDay,
}

impl DurationBucket {
    /// Whether a visit length satisfies this bucket.
    /// Unknown lengths (`None`) never match: a spot with no `duration_min`
    /// is excluded whenever a specific bucket is requested.
    pub fn matches(&self, duration_min: Option<u32>) -> bool {
        let Some(minutes) = duration_min else {
            return false;
        };
        match self {
            DurationBucket::WithinHour => minutes <= 60,
            DurationBucket::WithinTwoHours => minutes <= 120,
            DurationBucket::HalfDay => minutes <= 240,
            DurationBucket::FullDay => minutes >= 240,
        }
    }

    /// Human-readable description used in `recommend` output.
    pub fn describe(&self) -> &'static str {
        match self {
            DurationBucket::WithinHour => "within 1 hour",
            DurationBucket::WithinTwoHours => "within 2 hours",
            DurationBucket::HalfDay => "half day (about 4 hours)",
            DurationBucket::FullDay => "full day (4 hours or more)",
        }
    }
}
