use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Half-open time range `[start, end)` in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeRangeDto {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IntervalDto {
    #[default]
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DoraBandDto {
    Elite,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoraRequestDto {
    /// Restrict the calculation to the integrations of this org unit.
    pub ou_ref_id: Option<i32>,
    pub time_range: TimeRangeDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeploymentFrequencyRequestDto {
    pub ou_ref_id: Option<i32>,
    pub time_range: TimeRangeDto,
    #[serde(default)]
    pub interval: IntervalDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeFailureRateRequestDto {
    pub ou_ref_id: Option<i32>,
    pub time_range: TimeRangeDto,
    #[serde(default)]
    pub is_absolute: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSeriesPointDto {
    /// Bucket start in unix seconds.
    pub key: i64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeploymentFrequencyDto {
    pub total_deployment: u64,
    pub count_per_day: f64,
    pub band: DoraBandDto,
    pub time_series: Vec<TimeSeriesPointDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChangeFailureRateDto {
    pub failed_deployment: u64,
    pub total_deployment: u64,
    pub is_absolute: bool,
    pub failure_rate: Option<f64>,
    pub band: Option<DoraBandDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DurationStatsDto {
    pub sample_count: u64,
    pub mean_seconds: Option<f64>,
    pub median_seconds: Option<i64>,
    pub band: Option<DoraBandDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordDeploymentDto {
    pub integration_id: i32,
    pub service: String,
    pub environment: String,
    /// Unix seconds.
    pub deployed_at: i64,
    /// Unix seconds of the oldest commit shipped by this deployment.
    pub first_commit_at: Option<i64>,
    #[serde(default)]
    pub failed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordIncidentDto {
    pub integration_id: i32,
    pub service: String,
    pub opened_at: i64,
    pub resolved_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecordedDto {
    pub id: i32,
}
