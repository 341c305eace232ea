use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        category::{self, CATEGORY_TAG},
        dashboard::{self, DASHBOARD_TAG},
        dora::{self, DORA_TAG},
        integration::{self, INTEGRATION_TAG},
        org_unit::{self, ORG_UNIT_TAG},
        org_user::{self, ORG_USER_TAG},
        tenant::{self, TENANT_TAG},
        user::{self, USER_TAG},
        workspace::{self, WORKSPACE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Insights API", description = "Organization hierarchy, dashboards and DORA metrics"),
    tags(
        (name = AUTH_TAG, description = "Login, logout and current user"),
        (name = TENANT_TAG, description = "Tenant provisioning"),
        (name = USER_TAG, description = "Login users of a tenant"),
        (name = INTEGRATION_TAG, description = "Registered connections to external tools"),
        (name = WORKSPACE_TAG, description = "Workspaces grouping integrations and categories"),
        (name = ORG_USER_TAG, description = "People modelled in the organization"),
        (name = CATEGORY_TAG, description = "Org unit categories"),
        (name = ORG_UNIT_TAG, description = "Versioned org unit hierarchy"),
        (name = DASHBOARD_TAG, description = "Dashboards and widgets"),
        (name = DORA_TAG, description = "Deployment and incident ingestion and DORA metrics"),
    )
)]
struct ApiDoc;

/// Builds every API route plus Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(tenant::create_tenant, tenant::get_tenants))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(
            integration::create_integration,
            integration::get_integrations
        ))
        .routes(routes!(
            integration::get_integration,
            integration::update_integration,
            integration::delete_integration
        ))
        .routes(routes!(workspace::create_workspace, workspace::get_workspaces))
        .routes(routes!(
            workspace::get_workspace,
            workspace::update_workspace,
            workspace::delete_workspace
        ))
        .routes(routes!(org_user::create_org_user, org_user::get_org_users))
        .routes(routes!(
            org_user::get_org_user,
            org_user::update_org_user,
            org_user::delete_org_user
        ))
        .routes(routes!(
            category::create_category,
            category::get_categories,
            category::delete_categories
        ))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(category::get_categories_by_dashboard))
        .routes(routes!(
            org_unit::create_org_units,
            org_unit::update_org_units,
            org_unit::delete_org_units
        ))
        .routes(routes!(org_unit::create_org_unit))
        .routes(routes!(org_unit::list_org_units))
        .routes(routes!(org_unit::get_org_unit_values))
        .routes(routes!(org_unit::activate_org_unit_version))
        .routes(routes!(org_unit::get_org_unit))
        .routes(routes!(org_unit::get_org_unit_versions))
        .routes(routes!(org_unit::get_org_unit_parents))
        .routes(routes!(org_unit::get_org_unit_children))
        .routes(routes!(org_unit::get_org_unit_members))
        .routes(routes!(
            org_unit::get_org_unit_dashboards,
            org_unit::set_org_unit_dashboards
        ))
        .routes(routes!(
            dashboard::create_dashboard,
            dashboard::get_dashboards,
            dashboard::delete_dashboards
        ))
        .routes(routes!(
            dashboard::get_dashboard,
            dashboard::update_dashboard,
            dashboard::delete_dashboard
        ))
        .routes(routes!(dashboard::get_widgets, dashboard::create_widget))
        .routes(routes!(
            dashboard::get_widget,
            dashboard::update_widget,
            dashboard::delete_widget
        ))
        .routes(routes!(dora::record_deployment))
        .routes(routes!(dora::record_incident))
        .routes(routes!(dora::deployment_frequency))
        .routes(routes!(dora::change_failure_rate))
        .routes(routes!(dora::lead_time))
        .routes(routes!(dora::mean_time_to_restore))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
