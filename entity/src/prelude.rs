pub use super::dashboard::Entity as Dashboard;
pub use super::deployment::Entity as Deployment;
pub use super::incident::Entity as Incident;
pub use super::integration::Entity as Integration;
pub use super::org_unit::Entity as OrgUnit;
pub use super::org_unit_dashboard::Entity as OrgUnitDashboard;
pub use super::org_unit_manager::Entity as OrgUnitManager;
pub use super::org_unit_section::Entity as OrgUnitSection;
pub use super::org_user::Entity as OrgUser;
pub use super::ou_category::Entity as OuCategory;
pub use super::tenant::Entity as Tenant;
pub use super::user::Entity as User;
pub use super::widget::Entity as Widget;
pub use super::workspace::Entity as Workspace;
pub use super::workspace_integration::Entity as WorkspaceIntegration;
