//! Pure DORA metric calculations over already loaded records.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, Utc};

use crate::server::{
    error::AppError,
    model::dora::{ChangeFailureRate, DeploymentFrequency, DoraBand, DurationStats, Interval, TimeRange},
};

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days covered by the range, rounded up and at least 1.
pub fn range_days(range: &TimeRange) -> u64 {
    let seconds = (range.end - range.start).num_seconds().max(0);
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    days.max(1) as u64
}

/// Deployment frequency with a zero-filled time series.
pub fn deployment_frequency(
    deployed_at: &[DateTime<Utc>],
    range: &TimeRange,
    interval: Interval,
) -> DeploymentFrequency {
    let total_deployment = deployed_at.len() as u64;
    let count_per_day = total_deployment as f64 / range_days(range) as f64;

    DeploymentFrequency {
        total_deployment,
        count_per_day,
        band: frequency_band(count_per_day),
        time_series: time_series(deployed_at, range, interval),
    }
}

pub fn frequency_band(count_per_day: f64) -> DoraBand {
    if count_per_day >= 1.0 {
        DoraBand::Elite
    } else if count_per_day >= 1.0 / 7.0 {
        DoraBand::High
    } else if count_per_day >= 1.0 / 30.0 {
        DoraBand::Medium
    } else {
        DoraBand::Low
    }
}

/// Counts per bucket for every bucket overlapping the range, ascending.
pub fn time_series(
    timestamps: &[DateTime<Utc>],
    range: &TimeRange,
    interval: Interval,
) -> Vec<(DateTime<Utc>, u64)> {
    let mut buckets: BTreeMap<DateTime<Utc>, u64> = BTreeMap::new();

    let mut bucket = bucket_start(range.start, interval);
    while bucket < range.end {
        buckets.insert(bucket, 0);
        match next_bucket(bucket, interval) {
            Some(next) => bucket = next,
            None => break,
        }
    }

    for timestamp in timestamps {
        if *timestamp < range.start || *timestamp >= range.end {
            continue;
        }
        *buckets
            .entry(bucket_start(*timestamp, interval))
            .or_default() += 1;
    }

    buckets.into_iter().collect()
}

/// Start of the UTC day, Monday-based week or month containing `timestamp`.
pub fn bucket_start(timestamp: DateTime<Utc>, interval: Interval) -> DateTime<Utc> {
    let date = timestamp.date_naive();
    let start = match interval {
        Interval::Day => date,
        Interval::Week => date
            .checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
            .unwrap_or(date),
        Interval::Month => date.with_day(1).unwrap_or(date),
    };

    start.and_time(NaiveTime::MIN).and_utc()
}

fn next_bucket(bucket: DateTime<Utc>, interval: Interval) -> Option<DateTime<Utc>> {
    match interval {
        Interval::Day => bucket.checked_add_days(Days::new(1)),
        Interval::Week => bucket.checked_add_days(Days::new(7)),
        Interval::Month => bucket.checked_add_months(Months::new(1)),
    }
}

/// Change failure rate in percent.
///
/// # Returns
/// - `Ok(ChangeFailureRate)` - Counts only when `is_absolute`, otherwise rate and band
/// - `Err(AppError::BadRequest)` - Failures were counted without any deployments
pub fn change_failure_rate(
    failed_deployment: u64,
    total_deployment: u64,
    is_absolute: bool,
) -> Result<ChangeFailureRate, AppError> {
    if is_absolute {
        return Ok(ChangeFailureRate {
            failed_deployment,
            total_deployment,
            is_absolute,
            failure_rate: None,
            band: None,
        });
    }

    let failure_rate = if failed_deployment == 0 {
        0.0
    } else if total_deployment == 0 {
        return Err(AppError::BadRequest(
            "Invalid configuration for Change Failure Rate".to_string(),
        ));
    } else {
        failed_deployment as f64 * 100.0 / total_deployment as f64
    };

    Ok(ChangeFailureRate {
        failed_deployment,
        total_deployment,
        is_absolute,
        failure_rate: Some(failure_rate),
        band: Some(failure_rate_band(failure_rate)),
    })
}

pub fn failure_rate_band(failure_rate: f64) -> DoraBand {
    if failure_rate <= 15.0 {
        DoraBand::Elite
    } else if failure_rate <= 30.0 {
        DoraBand::High
    } else if failure_rate <= 45.0 {
        DoraBand::Medium
    } else {
        DoraBand::Low
    }
}

/// Band for a mean lead time for changes.
pub fn lead_time_band(mean_seconds: f64) -> DoraBand {
    duration_band(mean_seconds, [SECONDS_PER_DAY, 7 * SECONDS_PER_DAY, 30 * SECONDS_PER_DAY])
}

/// Band for a mean time to restore service.
pub fn restore_time_band(mean_seconds: f64) -> DoraBand {
    duration_band(mean_seconds, [SECONDS_PER_HOUR, SECONDS_PER_DAY, 7 * SECONDS_PER_DAY])
}

fn duration_band(mean_seconds: f64, limits: [i64; 3]) -> DoraBand {
    let [elite, high, medium] = limits;
    if mean_seconds <= elite as f64 {
        DoraBand::Elite
    } else if mean_seconds <= high as f64 {
        DoraBand::High
    } else if mean_seconds <= medium as f64 {
        DoraBand::Medium
    } else {
        DoraBand::Low
    }
}

/// Mean and median of duration samples, banded on the mean.
///
/// No samples yields no mean, median or band.
pub fn duration_stats(mut samples: Vec<i64>, band: fn(f64) -> DoraBand) -> DurationStats {
    if samples.is_empty() {
        return DurationStats {
            sample_count: 0,
            mean_seconds: None,
            median_seconds: None,
            band: None,
        };
    }

    samples.sort_unstable();
    let count = samples.len();
    let mean = samples.iter().map(|s| *s as f64).sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        samples[count / 2]
    } else {
        (samples[count / 2 - 1] + samples[count / 2]) / 2
    };

    DurationStats {
        sample_count: count as u64,
        mean_seconds: Some(mean),
        median_seconds: Some(median),
        band: Some(band(mean)),
    }
}
