use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        category::{CreateOuCategoryParams, OuCategoryFilter, UpdateOuCategoryParams},
        dashboard::{CreateDashboardParams, CreateWidgetParams, DashboardFilter},
        integration::{CreateIntegrationParams, IntegrationFilter, UpdateIntegrationParams},
        org_user::{CreateOrgUserParams, OrgUserFilter, UpdateOrgUserParams},
        tenant::CreateTenantParams,
        user::{CreateUserParams, Role, User},
        workspace::{CreateWorkspaceParams, UpdateWorkspaceParams, WorkspaceFilter},
    },
    service::{
        auth::AuthService, category::OuCategoryService, dashboard::DashboardService,
        integration::IntegrationService, org_unit::OrgUnitService, org_user::OrgUserService,
        tenant::TenantService, user::UserService, workspace::WorkspaceService,
    },
    util::jwt::JwtKeys,
};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        dashboard::{create_widget, DashboardFactory},
        deployment::DeploymentFactory,
        org_unit::{add_section, map_dashboard, OrgUnitFactory},
        user::{UserFactory, DEFAULT_PASSWORD},
        workspace::WorkspaceFactory,
    },
};

mod category;
mod integration;
mod tenant;
mod user;

fn keys() -> JwtKeys {
    JwtKeys::new("service-test-secret", 3600)
}
