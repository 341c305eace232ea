use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        dashboard::{
            CreateDashboardDto, CreateWidgetDto, DashboardDto, DashboardFilterDto,
            PaginatedDashboardsDto, UpdateDashboardDto, UpdateWidgetDto, WidgetDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::dashboard::{
            CreateDashboardParams, CreateWidgetParams, DashboardFilter, UpdateDashboardParams,
            UpdateWidgetParams,
        },
        service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Create a dashboard owned by the caller.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Dashboard name, type, query and metadata
///
/// # Returns
/// - `201 Created` - The created dashboard
/// - `400 Bad Request` - Name not between 1 and 100 characters, or blank type
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/dashboards",
    tag = DASHBOARD_TAG,
    request_body = CreateDashboardDto,
    responses(
        (status = 201, description = "Successfully created dashboard", body = DashboardDto),
        (status = 400, description = "Invalid dashboard data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dashboard(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateDashboardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateDashboardParams::from_dto(user.tenant_id, user.id, payload);
    let dashboard = DashboardService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(dashboard.into_dto())))
}

/// Get paginated dashboards visible to the caller, without widgets.
///
/// Public dashboard users only see public dashboards.
///
/// # Access Control
/// - `DashboardView`
#[utoipa::path(
    get,
    path = "/api/dashboards",
    tag = DASHBOARD_TAG,
    params(
        ("name" = Option<String>, Query, description = "Name substring"),
        ("dashboard_type" = Option<String>, Query, description = "Dashboard type"),
        ("public" = Option<bool>, Query, description = "Public flag"),
        ("owner_id" = Option<i32>, Query, description = "Owner user ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dashboards", body = PaginatedDashboardsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboards(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(filter): Query<DashboardFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::DashboardView])
        .await?;

    let dashboards = DashboardService::new(&state.db)
        .list(&user, &DashboardFilter::from_dto(filter))
        .await?;

    Ok((StatusCode::OK, Json(dashboards.into_dto())))
}

/// Delete several dashboards at once. Unknown ids are ignored.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/dashboards",
    tag = DASHBOARD_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Number of deleted dashboards", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dashboards(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let deleted = DashboardService::new(&state.db)
        .bulk_delete(user.tenant_id, &ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}

/// Get a dashboard with its widgets.
///
/// # Access Control
/// - `DashboardView` - Non-public dashboards are reported as not found to public dashboard users
#[utoipa::path(
    get,
    path = "/api/dashboards/{id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dashboard", body = DashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Dashboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::DashboardView])
        .await?;

    let dashboard = DashboardService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/dashboards/{id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID")
    ),
    request_body = UpdateDashboardDto,
    responses(
        (status = 200, description = "Successfully updated dashboard", body = DashboardDto),
        (status = 400, description = "Invalid dashboard data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Dashboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dashboard(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDashboardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let dashboard = DashboardService::new(&state.db)
        .update(user.tenant_id, id, UpdateDashboardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Delete a dashboard with its widgets and org unit mappings.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/dashboards/{id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted dashboard"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Dashboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dashboard(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    DashboardService::new(&state.db)
        .delete(user.tenant_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/dashboards/{id}/widgets",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID")
    ),
    responses(
        (status = 200, description = "Widgets of the dashboard", body = Vec<WidgetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Dashboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_widgets(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::DashboardView])
        .await?;

    let widgets = DashboardService::new(&state.db)
        .get_widgets(&user, id)
        .await?;

    let widgets: Vec<WidgetDto> = widgets.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(widgets)))
}

/// Add a widget to a dashboard.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created widget
/// - `400 Bad Request` - Blank name or widget type
/// - `404 Not Found` - Unknown dashboard
#[utoipa::path(
    post,
    path = "/api/dashboards/{id}/widgets",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID")
    ),
    request_body = CreateWidgetDto,
    responses(
        (status = 201, description = "Successfully created widget", body = WidgetDto),
        (status = 400, description = "Invalid widget data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Dashboard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_widget(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<CreateWidgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let widget = DashboardService::new(&state.db)
        .create_widget(user.tenant_id, id, CreateWidgetParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(widget.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/dashboards/{id}/widgets/{widget_id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID"),
        ("widget_id" = i32, Path, description = "Widget ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved widget", body = WidgetDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Dashboard or widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_widget(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((id, widget_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::DashboardView])
        .await?;

    let widget = DashboardService::new(&state.db)
        .get_widget(&user, id, widget_id)
        .await?;

    Ok((StatusCode::OK, Json(widget.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/dashboards/{id}/widgets/{widget_id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID"),
        ("widget_id" = i32, Path, description = "Widget ID")
    ),
    request_body = UpdateWidgetDto,
    responses(
        (status = 200, description = "Successfully updated widget", body = WidgetDto),
        (status = 400, description = "Invalid widget data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Dashboard or widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_widget(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((id, widget_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateWidgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let widget = DashboardService::new(&state.db)
        .update_widget(
            user.tenant_id,
            id,
            widget_id,
            UpdateWidgetParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(widget.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/dashboards/{id}/widgets/{widget_id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = i32, Path, description = "Dashboard ID"),
        ("widget_id" = i32, Path, description = "Widget ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted widget"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Dashboard or widget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_widget(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((id, widget_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    DashboardService::new(&state.db)
        .delete_widget(user.tenant_id, id, widget_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
