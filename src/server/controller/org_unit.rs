use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{BulkResultDto, ErrorDto},
        org_unit::{
            ActivateVersionDto, ChildrenDto, CreateOrgUnitDto, DashboardMappingDto,
            FieldValuesDto, OrgUnitDashboardDto, OrgUnitDto, OrgUnitListRequestDto,
            OrgUnitVersionDto, PaginatedOrgUnitsDto, UpdateOrgUnitDto, ValuesRequestDto,
        },
        org_user::OrgUserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::org_unit::{DashboardMapping, OrgUnitFilter, OrgUnitParams, UpdateOrgUnitParams},
        service::org_unit::OrgUnitService,
        state::AppState,
    },
};

/// Tag for grouping org unit endpoints in OpenAPI documentation
pub static ORG_UNIT_TAG: &str = "org_unit";

#[derive(Deserialize)]
pub struct VersionParams {
    pub version: Option<i32>,
}

#[derive(Deserialize)]
pub struct ChildrenParams {
    #[serde(default)]
    pub recursive: bool,
}

/// Create several org units in one transaction.
///
/// Each unit is stored as version 1 under the next free ref id and activated.
/// Units are created in request order so a later unit may name an earlier one
/// as its parent. Any invalid unit rolls back the whole batch.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Definitions of the units to create
///
/// # Returns
/// - `201 Created` - Ref ids of the created units
/// - `400 Bad Request` - Blank name, unknown parent, category, dashboard or org user,
///   or a category conflicting with the parent's
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot manage the organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/org/units",
    tag = ORG_UNIT_TAG,
    request_body = Vec<CreateOrgUnitDto>,
    responses(
        (status = 201, description = "Successfully created org units", body = BulkResultDto),
        (status = 400, description = "Invalid org unit data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_org_units(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<Vec<CreateOrgUnitDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let params = payload
        .into_iter()
        .map(OrgUnitParams::from_create_dto)
        .collect();
    let ref_ids = OrgUnitService::new(&state.db)
        .create_units(user.tenant_id, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkResultDto {
            success: ref_ids,
            errors: Vec::new(),
        }),
    ))
}

/// Store a new version of each listed org unit and activate it.
///
/// Descendant paths follow a rename or move, and a category change is pushed
/// down to active descendants. Dashboard mappings carry over to the new version.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Returns
/// - `200 OK` - Ref ids of the updated units
/// - `400 Bad Request` - Missing ref id, invalid definition or a parent cycle
/// - `404 Not Found` - A ref id has no active version
#[utoipa::path(
    put,
    path = "/api/org/units",
    tag = ORG_UNIT_TAG,
    request_body = Vec<UpdateOrgUnitDto>,
    responses(
        (status = 200, description = "Successfully updated org units", body = BulkResultDto),
        (status = 400, description = "Invalid org unit data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_org_units(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<Vec<UpdateOrgUnitDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let params = payload
        .into_iter()
        .map(UpdateOrgUnitParams::from_dto)
        .collect();
    let ref_ids = OrgUnitService::new(&state.db)
        .update_units(user.tenant_id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BulkResultDto {
            success: ref_ids,
            errors: Vec::new(),
        }),
    ))
}

/// Deactivate org units by ref id.
///
/// Direct children lose their parent and descendant paths drop the removed prefix.
///
/// # Access Control
/// - `OrgAdmin`
#[utoipa::path(
    delete,
    path = "/api/org/units",
    tag = ORG_UNIT_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 204, description = "Successfully deleted org units"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_org_units(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(ref_ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    OrgUnitService::new(&state.db)
        .delete_units(user.tenant_id, &ref_ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a single org unit and return it.
///
/// # Access Control
/// - `OrgAdmin`
#[utoipa::path(
    post,
    path = "/api/org/units/single",
    tag = ORG_UNIT_TAG,
    request_body = CreateOrgUnitDto,
    responses(
        (status = 201, description = "Successfully created org unit", body = OrgUnitDto),
        (status = 400, description = "Invalid org unit data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_org_unit(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateOrgUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let unit = OrgUnitService::new(&state.db)
        .create_unit(user.tenant_id, OrgUnitParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

/// List org units matching a filter.
///
/// Takes the filter as a body since it carries id lists. Only active versions
/// are returned unless `active` is set to `false`.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    post,
    path = "/api/org/units/list",
    tag = ORG_UNIT_TAG,
    request_body = OrgUnitListRequestDto,
    responses(
        (status = 200, description = "Successfully retrieved org units", body = PaginatedOrgUnitsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_org_units(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<OrgUnitListRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let filter = OrgUnitFilter::from_dto(payload.filter);
    let units = OrgUnitService::new(&state.db)
        .list(user.tenant_id, &filter, payload.page, payload.page_size)
        .await?;

    Ok((StatusCode::OK, Json(units.into_dto())))
}

/// Count distinct values of org unit fields across active units.
///
/// # Access Control
/// - `Read`
///
/// # Returns
/// - `200 OK` - Values with counts per requested field
/// - `400 Bad Request` - Unsupported field
#[utoipa::path(
    post,
    path = "/api/org/units/values",
    tag = ORG_UNIT_TAG,
    request_body = ValuesRequestDto,
    responses(
        (status = 200, description = "Distinct values per field", body = Vec<FieldValuesDto>),
        (status = 400, description = "Unsupported field", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_values(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<ValuesRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let values = OrgUnitService::new(&state.db)
        .values(user.tenant_id, &payload.fields)
        .await?;

    let values: Vec<FieldValuesDto> = values.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(values)))
}

/// Make a stored version the active one.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Returns
/// - `200 OK` - The now active version
/// - `404 Not Found` - Unknown ref id or version
#[utoipa::path(
    post,
    path = "/api/org/units/activate",
    tag = ORG_UNIT_TAG,
    request_body = ActivateVersionDto,
    responses(
        (status = 200, description = "Successfully activated version", body = OrgUnitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "OU version not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_org_unit_version(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<ActivateVersionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let unit = OrgUnitService::new(&state.db)
        .activate_version(user.tenant_id, payload.ou_ref_id, payload.active_version)
        .await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}

/// Get the active version of an org unit, or a specific version.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID"),
        ("version" = Option<i32>, Query, description = "Version to load instead of the active one")
    ),
    responses(
        (status = 200, description = "Successfully retrieved org unit", body = OrgUnitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
    Query(params): Query<VersionParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let unit = OrgUnitService::new(&state.db)
        .get(user.tenant_id, ref_id, params.version)
        .await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}/versions",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID")
    ),
    responses(
        (status = 200, description = "Versions, newest first", body = Vec<OrgUnitVersionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_versions(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let versions = OrgUnitService::new(&state.db)
        .list_versions(user.tenant_id, ref_id)
        .await?;

    let versions: Vec<OrgUnitVersionDto> = versions.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(versions)))
}

/// Get the ancestors of an org unit within its category, root first.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}/parents",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID")
    ),
    responses(
        (status = 200, description = "Ancestors from root to parent", body = Vec<OrgUnitDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_parents(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let parents = OrgUnitService::new(&state.db)
        .parents(user.tenant_id, ref_id)
        .await?;

    let parents: Vec<OrgUnitDto> = parents.into_iter().map(|unit| unit.into_dto()).collect();

    Ok((StatusCode::OK, Json(parents)))
}

/// Get the ref ids of direct children, or of all descendants when `recursive`.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}/children",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID"),
        ("recursive" = Option<bool>, Query, description = "Include all descendants (default: false)")
    ),
    responses(
        (status = 200, description = "Child ref ids", body = ChildrenDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_children(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
    Query(params): Query<ChildrenParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let ref_ids = OrgUnitService::new(&state.db)
        .children(user.tenant_id, ref_id, params.recursive)
        .await?;

    Ok((StatusCode::OK, Json(ChildrenDto { ref_ids })))
}

#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}/members",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID")
    ),
    responses(
        (status = 200, description = "Org users that are members of the unit", body = Vec<OrgUserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_members(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let members = OrgUnitService::new(&state.db)
        .members(user.tenant_id, ref_id)
        .await?;

    let members: Vec<OrgUserDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/api/org/units/{ref_id}/dashboards",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID")
    ),
    responses(
        (status = 200, description = "Mapped dashboards in display order", body = Vec<OrgUnitDashboardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_unit_dashboards(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let dashboards = OrgUnitService::new(&state.db)
        .dashboards(user.tenant_id, ref_id)
        .await?;

    let dashboards: Vec<OrgUnitDashboardDto> =
        dashboards.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dashboards)))
}

/// Replace the dashboards mapped onto the active version of an org unit.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Returns
/// - `200 OK` - The stored mappings
/// - `400 Bad Request` - Unknown or repeated dashboard
/// - `404 Not Found` - Unknown org unit
#[utoipa::path(
    put,
    path = "/api/org/units/{ref_id}/dashboards",
    tag = ORG_UNIT_TAG,
    params(
        ("ref_id" = i32, Path, description = "Org unit ref ID")
    ),
    request_body = Vec<DashboardMappingDto>,
    responses(
        (status = 200, description = "Stored dashboard mappings", body = Vec<OrgUnitDashboardDto>),
        (status = 400, description = "Unknown or repeated dashboard", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "OU not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_org_unit_dashboards(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(ref_id): Path<i32>,
    Json(payload): Json<Vec<DashboardMappingDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let mappings: Vec<DashboardMapping> =
        payload.into_iter().map(DashboardMapping::from_dto).collect();
    let dashboards = OrgUnitService::new(&state.db)
        .set_dashboards(user.tenant_id, ref_id, &mappings)
        .await?;

    let dashboards: Vec<OrgUnitDashboardDto> =
        dashboards.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dashboards)))
}
