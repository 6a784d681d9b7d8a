//! Visitor Analytics
//!
//! Pure derivation of dashboard numbers from the selected date range:
//! the summary snapshot, the daily visitor/conversion series, and the
//! static conversion funnel. Sampling goes through an injected seeded
//! generator so series are reproducible under test.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;
use thiserror::Error;

/// Share of visitors that convert into leads
pub const CONVERSION_RATE: f64 = 0.07;

/// Weekend traffic multiplier
pub const WEEKEND_MULTIPLIER: f64 = 1.5;

// ============ Date Range ============

/// Selectable reporting window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Week,
    Month,
}

impl DateRange {
    /// All ranges, in the order the filter shows them
    pub const ALL: [DateRange; 3] = [DateRange::Today, DateRange::Week, DateRange::Month];

    /// Number of days covered by the range
    pub fn day_count(self) -> u32 {
        match self {
            DateRange::Today => 1,
            DateRange::Week => 7,
            DateRange::Month => 30,
        }
    }

    /// Wire token for the range ("1d", "7d", "30d")
    pub fn token(self) -> &'static str {
        match self {
            DateRange::Today => "1d",
            DateRange::Week => "7d",
            DateRange::Month => "30d",
        }
    }

    /// Label shown on the filter button
    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "7 Days",
            DateRange::Month => "30 Days",
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::Week
    }
}

/// Unknown date range token
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date range token: {0}")]
pub struct InvalidRangeToken(pub String);

impl FromStr for DateRange {
    type Err = InvalidRangeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(DateRange::Today),
            "7d" => Ok(DateRange::Week),
            "30d" => Ok(DateRange::Month),
            other => Err(InvalidRangeToken(other.to_string())),
        }
    }
}

// ============ Summary Snapshot ============

/// Summary numbers shown in the stat cards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsSnapshot {
    pub visitors: u32,
    pub conversions: u32,
    pub avg_connection_min: i32,
    pub click_rate_pct: f64,
}

impl MetricsSnapshot {
    /// Derive the summary for a reporting window.
    ///
    /// Scales a fixed weekly baseline, so the same range always yields
    /// the same snapshot.
    pub fn for_range(range: DateRange) -> Self {
        const BASE_VISITORS: f64 = 1248.0;
        const BASE_CONVERSIONS: f64 = 89.0;
        const BASE_AVG_MIN: i32 = 18;
        const BASE_CLICK_RATE: f64 = 7.3;

        let (count_mult, avg_delta, rate_delta) = match range {
            DateRange::Today => (0.3, -3, -0.8),
            DateRange::Week => (1.0, 0, 0.0),
            DateRange::Month => (4.2, 5, 1.2),
        };

        Self {
            visitors: (BASE_VISITORS * count_mult).round() as u32,
            conversions: (BASE_CONVERSIONS * count_mult).round() as u32,
            avg_connection_min: BASE_AVG_MIN + avg_delta,
            click_rate_pct: BASE_CLICK_RATE + rate_delta,
        }
    }
}

// ============ Visitor Series ============

/// Deterministic random source for the synthetic visitor series.
///
/// splitmix64, stepped once per sample. A fixed seed reproduces the
/// exact series.
pub struct SeededSampler {
    state: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock for live rendering
    pub fn from_clock() -> Self {
        Self::new(chrono::Utc::now().timestamp_millis() as u64)
    }

    /// Next sample in [0, 1)
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One day of the visitors chart
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub visitors: u32,
    pub conversions: u32,
}

/// Generate the visitor/conversion series for a range ending at `today`.
///
/// Weekend days get the 1.5x traffic bump; conversions derive from the
/// unrounded visitor value so the two stay proportional.
pub fn visitor_series(
    range: DateRange,
    today: NaiveDate,
    sampler: &mut SeededSampler,
) -> Vec<SeriesPoint> {
    let days = range.day_count() as i64;

    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let base = 50.0 + sampler.next_unit() * 100.0;
            let expected = if is_weekend(date) {
                base * WEEKEND_MULTIPLIER
            } else {
                base
            };

            SeriesPoint {
                label: date.format("%b %-d").to_string(),
                visitors: expected.round() as u32,
                conversions: (expected * CONVERSION_RATE).round() as u32,
            }
        })
        .collect()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// ============ Conversion Funnel ============

/// One stage of the conversion funnel chart
pub struct FunnelStage {
    pub label: &'static str,
    pub users: u32,
    pub color: &'static str,
}

/// Funnel from WiFi connection to captured lead
pub const FUNNEL_STAGES: [FunnelStage; 5] = [
    FunnelStage { label: "WiFi Connect", users: 100, color: "#3b82f6" },
    FunnelStage { label: "Landing Page", users: 78, color: "#6366f1" },
    FunnelStage { label: "Form View", users: 45, color: "#8b5cf6" },
    FunnelStage { label: "Email Submit", users: 28, color: "#a855f7" },
    FunnelStage { label: "Lead Captured", users: 18, color: "#c084fc" },
];

/// Stage size as a percentage of the funnel top
pub fn funnel_percent(stage: &FunnelStage) -> f64 {
    stage.users as f64 / FUNNEL_STAGES[0].users as f64 * 100.0
}

// ============ Formatting ============

/// Format a count with thousands separators ("1248" -> "1,248")
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn series_length_matches_day_count() {
        let today = date(2024, 6, 20);
        for range in DateRange::ALL {
            let mut sampler = SeededSampler::new(42);
            let series = visitor_series(range, today, &mut sampler);
            assert_eq!(series.len(), range.day_count() as usize);
        }
    }

    #[test]
    fn fixed_seed_reproduces_series() {
        let today = date(2024, 6, 20);
        let a = visitor_series(DateRange::Month, today, &mut SeededSampler::new(7));
        let b = visitor_series(DateRange::Month, today, &mut SeededSampler::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn conversions_track_visitors_at_seven_percent() {
        let today = date(2024, 6, 20);
        let mut sampler = SeededSampler::new(11);

        for point in visitor_series(DateRange::Month, today, &mut sampler) {
            let expected = (point.visitors as f64 * CONVERSION_RATE).round() as u32;
            // visitors are rounded after sampling, so allow one lead of slack
            assert!(
                point.conversions.abs_diff(expected) <= 1,
                "{} visitors -> {} conversions",
                point.visitors,
                point.conversions
            );
        }
    }

    #[test]
    fn weekend_days_get_multiplier() {
        // Same seed, one Saturday and one Monday: only the bump differs
        let saturday = date(2024, 6, 22);
        let monday = date(2024, 6, 24);

        let sat = visitor_series(DateRange::Today, saturday, &mut SeededSampler::new(3));
        let mon = visitor_series(DateRange::Today, monday, &mut SeededSampler::new(3));

        let ratio = sat[0].visitors as f64 / mon[0].visitors as f64;
        assert!((ratio - WEEKEND_MULTIPLIER).abs() < 0.05, "ratio {}", ratio);
    }

    #[test]
    fn series_labels_carry_dates() {
        let today = date(2024, 6, 20);
        let mut sampler = SeededSampler::new(1);
        let series = visitor_series(DateRange::Week, today, &mut sampler);

        assert_eq!(series[0].label, "Jun 14");
        assert_eq!(series[6].label, "Jun 20");
    }

    #[test]
    fn snapshot_scales_from_weekly_baseline() {
        let week = MetricsSnapshot::for_range(DateRange::Week);
        assert_eq!(week.visitors, 1248);
        assert_eq!(week.conversions, 89);
        assert_eq!(week.avg_connection_min, 18);
        assert!((week.click_rate_pct - 7.3).abs() < f64::EPSILON);

        let month = MetricsSnapshot::for_range(DateRange::Month);
        assert_eq!(month.visitors, 5242);
        assert_eq!(month.conversions, 374);
        assert_eq!(month.avg_connection_min, 23);
        assert!((month.click_rate_pct - 8.5).abs() < 1e-9);

        let today = MetricsSnapshot::for_range(DateRange::Today);
        assert_eq!(today.visitors, 374);
        assert_eq!(today.conversions, 27);
        assert_eq!(today.avg_connection_min, 15);
        assert!((today.click_rate_pct - 6.5).abs() < 1e-9);
    }

    #[test]
    fn range_tokens_round_trip() {
        for range in DateRange::ALL {
            assert_eq!(range.token().parse::<DateRange>().unwrap(), range);
        }
    }

    #[test]
    fn invalid_token_is_rejected() {
        let err = "90d".parse::<DateRange>().unwrap_err();
        assert_eq!(err, InvalidRangeToken("90d".to_string()));
    }

    #[test]
    fn funnel_percent_is_relative_to_top() {
        assert!((funnel_percent(&FUNNEL_STAGES[0]) - 100.0).abs() < f64::EPSILON);
        assert!((funnel_percent(&FUNNEL_STAGES[4]) - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1248), "1,248");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
