//! DORA metric domain models.
//!
//! Time ranges are half-open `[start, end)` and all bucketing happens in UTC.

use chrono::{DateTime, Utc};

use crate::{
    model::dora::{
        ChangeFailureRateDto, DeploymentFrequencyDto, DoraBandDto, DurationStatsDto,
        IntervalDto, RecordDeploymentDto, RecordIncidentDto, TimeRangeDto, TimeSeriesPointDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoraBand {
    Elite,
    High,
    Medium,
    Low,
}

impl DoraBand {
    pub fn into_dto(self) -> DoraBandDto {
        match self {
            Self::Elite => DoraBandDto::Elite,
            Self::High => DoraBandDto::High,
            Self::Medium => DoraBandDto::Medium,
            Self::Low => DoraBandDto::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    #[default]
    Day,
    /// Weeks start on Monday.
    Week,
    Month,
}

impl From<IntervalDto> for Interval {
    fn from(dto: IntervalDto) -> Self {
        match dto {
            IntervalDto::Day => Self::Day,
            IntervalDto::Week => Self::Week,
            IntervalDto::Month => Self::Month,
        }
    }
}

/// Longest accepted range. Bounds the number of zero-filled daily buckets.
pub const MAX_RANGE_DAYS: i64 = 3_660;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Validates a range given in unix seconds.
    ///
    /// # Returns
    /// - `Ok(TimeRange)` - Start is before end, both are representable and the
    ///   range spans at most [`MAX_RANGE_DAYS`]
    /// - `Err(AppError::BadRequest)` - Empty, inverted, too long or out-of-range bounds
    pub fn from_dto(dto: TimeRangeDto) -> Result<Self, AppError> {
        if dto.start >= dto.end {
            return Err(AppError::BadRequest(
                "time_range.start must be before time_range.end".to_string(),
            ));
        }
        if dto.end.saturating_sub(dto.start) > MAX_RANGE_DAYS * 86_400 {
            return Err(AppError::BadRequest(format!(
                "time_range must not span more than {} days",
                MAX_RANGE_DAYS
            )));
        }

        Ok(Self {
            start: from_unix(dto.start)?,
            end: from_unix(dto.end)?,
        })
    }
}

/// Converts unix seconds, rejecting values chrono cannot represent.
pub fn from_unix(seconds: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| AppError::BadRequest(format!("Timestamp {} is out of range", seconds)))
}

/// Scope of one metric calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct DoraQuery {
    pub tenant_id: i32,
    pub ou_ref_id: Option<i32>,
    pub range: TimeRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentFrequency {
    pub total_deployment: u64,
    pub count_per_day: f64,
    pub band: DoraBand,
    /// `(bucket start, deployments)` in ascending order.
    pub time_series: Vec<(DateTime<Utc>, u64)>,
}

impl DeploymentFrequency {
    pub fn into_dto(self) -> DeploymentFrequencyDto {
        DeploymentFrequencyDto {
            total_deployment: self.total_deployment,
            count_per_day: self.count_per_day,
            band: self.band.into_dto(),
            time_series: self
                .time_series
                .into_iter()
                .map(|(key, count)| TimeSeriesPointDto {
                    key: key.timestamp(),
                    count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeFailureRate {
    pub failed_deployment: u64,
    pub total_deployment: u64,
    pub is_absolute: bool,
    pub failure_rate: Option<f64>,
    pub band: Option<DoraBand>,
}

impl ChangeFailureRate {
    pub fn into_dto(self) -> ChangeFailureRateDto {
        ChangeFailureRateDto {
            failed_deployment: self.failed_deployment,
            total_deployment: self.total_deployment,
            is_absolute: self.is_absolute,
            failure_rate: self.failure_rate,
            band: self.band.map(DoraBand::into_dto),
        }
    }
}

/// Summary of a set of durations, used by lead time and time to restore.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub sample_count: u64,
    pub mean_seconds: Option<f64>,
    pub median_seconds: Option<i64>,
    pub band: Option<DoraBand>,
}

impl DurationStats {
    pub fn into_dto(self) -> DurationStatsDto {
        DurationStatsDto {
            sample_count: self.sample_count,
            mean_seconds: self.mean_seconds,
            median_seconds: self.median_seconds,
            band: self.band.map(DoraBand::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordDeploymentParams {
    pub tenant_id: i32,
    pub integration_id: i32,
    pub service: String,
    pub environment: String,
    pub deployed_at: DateTime<Utc>,
    pub first_commit_at: Option<DateTime<Utc>>,
    pub failed: bool,
}

impl RecordDeploymentParams {
    pub fn from_dto(tenant_id: i32, dto: RecordDeploymentDto) -> Result<Self, AppError> {
        let deployed_at = from_unix(dto.deployed_at)?;
        let first_commit_at = dto.first_commit_at.map(from_unix).transpose()?;
        if first_commit_at.is_some_and(|commit| commit > deployed_at) {
            return Err(AppError::BadRequest(
                "first_commit_at must not be after deployed_at".to_string(),
            ));
        }

        Ok(Self {
            tenant_id,
            integration_id: dto.integration_id,
            service: dto.service,
            environment: dto.environment,
            deployed_at,
            first_commit_at,
            failed: dto.failed,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RecordIncidentParams {
    pub tenant_id: i32,
    pub integration_id: i32,
    pub service: String,
    pub opened_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl RecordIncidentParams {
    pub fn from_dto(tenant_id: i32, dto: RecordIncidentDto) -> Result<Self, AppError> {
        let opened_at = from_unix(dto.opened_at)?;
        let resolved_at = dto.resolved_at.map(from_unix).transpose()?;
        if resolved_at.is_some_and(|resolved| resolved < opened_at) {
            return Err(AppError::BadRequest(
                "resolved_at must not be before opened_at".to_string(),
            ));
        }

        Ok(Self {
            tenant_id,
            integration_id: dto.integration_id,
            service: dto.service,
            opened_at,
            resolved_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i64, end: i64) -> TimeRangeDto {
        TimeRangeDto { start, end }
    }

    /// Expect a range of exactly the maximum length to be accepted
    #[test]
    fn accepts_longest_range() {
        let parsed = TimeRange::from_dto(range(0, MAX_RANGE_DAYS * 86_400)).unwrap();

        assert_eq!((parsed.end - parsed.start).num_days(), MAX_RANGE_DAYS);
    }

    /// Expect one second past the maximum length to be rejected
    #[test]
    fn rejects_range_above_limit() {
        let result = TimeRange::from_dto(range(0, MAX_RANGE_DAYS * 86_400 + 1));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expect a range up to the end of year 9999 to be rejected before bucketing
    #[test]
    fn rejects_range_spanning_whole_calendar() {
        let result = TimeRange::from_dto(range(0, 253_402_300_799));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
