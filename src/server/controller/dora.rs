use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        dora::{
            ChangeFailureRateDto, ChangeFailureRateRequestDto, DeploymentFrequencyDto,
            DeploymentFrequencyRequestDto, DoraRequestDto, DurationStatsDto, RecordDeploymentDto,
            RecordIncidentDto, RecordedDto, TimeRangeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::dora::{DoraQuery, RecordDeploymentParams, RecordIncidentParams, TimeRange},
        service::dora::DoraService,
        state::AppState,
    },
};

/// Tag for grouping DORA metric endpoints in OpenAPI documentation
pub static DORA_TAG: &str = "dora";

fn dora_query(
    tenant_id: i32,
    ou_ref_id: Option<i32>,
    time_range: TimeRangeDto,
) -> Result<DoraQuery, AppError> {
    Ok(DoraQuery {
        tenant_id,
        ou_ref_id,
        range: TimeRange::from_dto(time_range)?,
    })
}

/// Record a deployment reported by an integration.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Deployment with unix second timestamps
///
/// # Returns
/// - `201 Created` - Id of the stored deployment
/// - `400 Bad Request` - Blank service or environment, or timestamp out of range
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/dora/deployments",
    tag = DORA_TAG,
    request_body = RecordDeploymentDto,
    responses(
        (status = 201, description = "Deployment recorded", body = RecordedDto),
        (status = 400, description = "Invalid deployment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_deployment(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<RecordDeploymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = RecordDeploymentParams::from_dto(user.tenant_id, payload)?;
    let deployment = DoraService::new(&state.db)
        .record_deployment(params)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordedDto { id: deployment.id })))
}

/// Record an incident reported by an integration.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/dora/incidents",
    tag = DORA_TAG,
    request_body = RecordIncidentDto,
    responses(
        (status = 201, description = "Incident recorded", body = RecordedDto),
        (status = 400, description = "Invalid incident data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_incident(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<RecordIncidentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = RecordIncidentParams::from_dto(user.tenant_id, payload)?;
    let incident = DoraService::new(&state.db).record_incident(params).await?;

    Ok((StatusCode::CREATED, Json(RecordedDto { id: incident.id })))
}

/// Deployment frequency with a zero-filled time series.
///
/// # Access Control
/// - `Read`
///
/// # Returns
/// - `200 OK` - Total, per day rate, band and time series
/// - `400 Bad Request` - Empty or inverted time range
/// - `404 Not Found` - The scoping org unit does not exist
#[utoipa::path(
    post,
    path = "/api/dora/deployment-frequency",
    tag = DORA_TAG,
    request_body = DeploymentFrequencyRequestDto,
    responses(
        (status = 200, description = "Deployment frequency", body = DeploymentFrequencyDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deployment_frequency(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<DeploymentFrequencyRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let query = dora_query(user.tenant_id, payload.ou_ref_id, payload.time_range)?;
    let frequency = DoraService::new(&state.db)
        .deployment_frequency(&query, payload.interval.into())
        .await?;

    Ok((StatusCode::OK, Json(frequency.into_dto())))
}

/// Change failure rate over deployments in range.
///
/// With `is_absolute` only the counts are returned.
///
/// # Access Control
/// - `Read`
///
/// # Returns
/// - `200 OK` - Counts, plus rate and band unless absolute
/// - `400 Bad Request` - Invalid time range, or failures without deployments
/// - `404 Not Found` - The scoping org unit does not exist
#[utoipa::path(
    post,
    path = "/api/dora/change-failure-rate",
    tag = DORA_TAG,
    request_body = ChangeFailureRateRequestDto,
    responses(
        (status = 200, description = "Change failure rate", body = ChangeFailureRateDto),
        (status = 400, description = "Invalid time range or configuration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_failure_rate(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<ChangeFailureRateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let query = dora_query(user.tenant_id, payload.ou_ref_id, payload.time_range)?;
    let rate = DoraService::new(&state.db)
        .change_failure_rate(&query, payload.is_absolute)
        .await?;

    Ok((StatusCode::OK, Json(rate.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/dora/lead-time",
    tag = DORA_TAG,
    request_body = DoraRequestDto,
    responses(
        (status = 200, description = "Lead time for changes", body = DurationStatsDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lead_time(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<DoraRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let query = dora_query(user.tenant_id, payload.ou_ref_id, payload.time_range)?;
    let stats = DoraService::new(&state.db).lead_time(&query).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/dora/mttr",
    tag = DORA_TAG,
    request_body = DoraRequestDto,
    responses(
        (status = 200, description = "Mean time to restore", body = DurationStatsDto),
        (status = 400, description = "Invalid time range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mean_time_to_restore(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<DoraRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let query = dora_query(user.tenant_id, payload.ou_ref_id, payload.time_range)?;
    let stats = DoraService::new(&state.db)
        .mean_time_to_restore(&query)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
