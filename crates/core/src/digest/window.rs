//! Digest window calculation
//!
//! A run is anchored to `publish_hour:00` local time in the configured zone.
//! Before that hour the run belongs to the previous local day. The window
//! covers the `lookback_hours` immediately preceding the anchor.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use rewatch_domain::{DigestConfig, Result, RewatchError};

/// Half-open UTC interval `[start, end)` plus the local run date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestWindow {
    pub run_date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DigestWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}

/// Resolve an IANA time zone name.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| RewatchError::Config(format!("unknown time zone '{name}'")))
}

/// Compute the window for the run that `reference` falls into.
///
/// `reference` may carry any offset; only the instant matters. The window
/// length is always exactly `lookback_hours` of elapsed time, including
/// across DST transitions.
pub fn compute_window<Z: TimeZone>(
    reference: &DateTime<Z>,
    config: &DigestConfig,
) -> Result<DigestWindow> {
    let tz = parse_time_zone(&config.time_zone)?;
    if config.publish_hour > 23 {
        return Err(RewatchError::Config(format!(
            "publish_hour must be within 0..=23, got {}",
            config.publish_hour
        )));
    }

    let local = reference.with_timezone(&tz);
    let today = local.date_naive();
    let mut anchor = local_anchor(tz, today, config.publish_hour)?;
    if local < anchor {
        let yesterday = today
            .pred_opt()
            .ok_or_else(|| RewatchError::InvalidInput(format!("no day before {today}")))?;
        anchor = local_anchor(tz, yesterday, config.publish_hour)?;
    }

    let end = anchor.with_timezone(&Utc);
    let start = end
        .checked_sub_signed(Duration::hours(i64::from(config.lookback_hours)))
        .ok_or_else(|| {
            RewatchError::Config(format!(
                "lookback_hours {} reaches before the earliest representable instant",
                config.lookback_hours
            ))
        })?;

    Ok(DigestWindow { run_date: anchor.date_naive(), start, end })
}

/// `date` at `hour:00` in `tz`.
///
/// Ambiguous wall-clock times (clocks going back) take the earlier instant.
/// Times skipped by a forward jump are interpreted with the offset in effect
/// before the jump, which lands them just after the transition.
fn local_anchor(tz: Tz, date: NaiveDate, hour: u32) -> Result<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
        RewatchError::InvalidInput(format!("invalid publish hour {hour} on {date}"))
    })?;

    if let Some(anchor) = tz.from_local_datetime(&naive).earliest() {
        return Ok(anchor);
    }

    let before_gap = naive - Duration::hours(1);
    tz.from_local_datetime(&before_gap)
        .earliest()
        .map(|dt| dt + Duration::hours(1))
        .ok_or_else(|| {
            RewatchError::Internal(format!("cannot resolve {naive} in time zone {}", tz.name()))
        })
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(tz: &str, hour: u32, lookback: u32) -> DigestConfig {
        DigestConfig {
            time_zone: tz.to_string(),
            publish_hour: hour,
            lookback_hours: lookback,
            ..DigestConfig::default()
        }
    }

    #[test]
    fn test_before_publish_hour_belongs_to_previous_day() {
        // 07:59:59 in Moscow
        let window =
            compute_window(&utc("2025-11-03T04:59:59Z"), &config("Europe/Moscow", 8, 48)).unwrap();

        assert_eq!(window.run_date, date(2025, 11, 2));
        assert_eq!(window.end, utc("2025-11-02T05:00:00Z"));
        assert_eq!(window.start, utc("2025-10-31T05:00:00Z"));
    }

    #[test]
    fn test_exactly_at_publish_hour_belongs_to_today() {
        let window =
            compute_window(&utc("2025-11-03T05:00:00Z"), &config("Europe/Moscow", 8, 48)).unwrap();

        assert_eq!(window.run_date, date(2025, 11, 3));
        assert_eq!(window.end, utc("2025-11-03T05:00:00Z"));
        assert_eq!(window.length(), Duration::hours(48));
    }

    #[test]
    fn test_reference_offset_does_not_matter() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let reference = utc("2025-11-03T05:00:00Z").with_timezone(&tokyo);

        let from_tokyo = compute_window(&reference, &config("Europe/Moscow", 8, 48)).unwrap();
        let from_utc =
            compute_window(&utc("2025-11-03T05:00:00Z"), &config("Europe/Moscow", 8, 48)).unwrap();

        assert_eq!(from_tokyo, from_utc);
    }

    #[test]
    fn test_previous_day_crosses_month_boundary() {
        // 04:00 Moscow on March 1st
        let window =
            compute_window(&utc("2025-03-01T01:00:00Z"), &config("Europe/Moscow", 8, 24)).unwrap();

        assert_eq!(window.run_date, date(2025, 2, 28));
        assert_eq!(window.end, utc("2025-02-28T05:00:00Z"));
    }

    #[test]
    fn test_window_contains_is_half_open() {
        let window =
            compute_window(&utc("2025-11-03T06:00:00Z"), &config("Europe/Moscow", 8, 48)).unwrap();

        assert!(window.contains(window.start));
        assert!(window.contains(window.end - Duration::seconds(1)));
        assert!(!window.contains(window.end));
    }

    #[test]
    fn test_skipped_local_hour_uses_pre_transition_offset() {
        // 2025-03-09 02:00 does not exist in New York
        let window =
            compute_window(&utc("2025-03-09T12:00:00Z"), &config("America/New_York", 2, 24))
                .unwrap();

        assert_eq!(window.run_date, date(2025, 3, 9));
        assert_eq!(window.end, utc("2025-03-09T07:00:00Z"));
    }

    #[test]
    fn test_repeated_local_hour_uses_earliest_instant() {
        // 2025-11-02 01:00 happens twice in New York
        let window =
            compute_window(&utc("2025-11-02T12:00:00Z"), &config("America/New_York", 1, 24))
                .unwrap();

        assert_eq!(window.end, utc("2025-11-02T05:00:00Z"));
    }

    #[test]
    fn test_length_is_elapsed_hours_across_dst() {
        let window =
            compute_window(&utc("2025-03-10T13:00:00Z"), &config("America/New_York", 8, 48))
                .unwrap();

        assert_eq!(window.end, utc("2025-03-10T12:00:00Z"));
        assert_eq!(window.start, utc("2025-03-08T12:00:00Z"));
        assert_eq!(window.length(), Duration::hours(48));
    }

    #[test]
    fn test_unknown_time_zone_is_config_error() {
        let err = compute_window(&utc("2025-11-03T05:00:00Z"), &config("Mars/Olympus", 8, 48))
            .unwrap_err();
        assert!(matches!(err, RewatchError::Config(ref msg) if msg.contains("Mars/Olympus")));
    }

    #[test]
    fn test_out_of_range_hour_is_config_error() {
        let err =
            compute_window(&utc("2025-11-03T05:00:00Z"), &config("UTC", 24, 48)).unwrap_err();
        assert!(matches!(err, RewatchError::Config(_)));
    }

    #[test]
    fn test_unrepresentable_lookback_is_config_error() {
        let err = compute_window(&utc("2025-11-03T06:00:00Z"), &config("UTC", 8, u32::MAX))
            .unwrap_err();
        assert!(matches!(err, RewatchError::Config(ref msg) if msg.contains("lookback_hours")));
    }
}
