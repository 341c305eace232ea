pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_tenant_table;
mod m20261001_000002_create_user_table;
mod m20261001_000003_create_org_user_table;
mod m20261001_000004_create_ou_category_table;
mod m20261001_000005_create_dashboard_table;
mod m20261001_000006_create_widget_table;
mod m20261001_000007_create_org_unit_table;
mod m20261001_000008_create_org_unit_manager_table;
mod m20261001_000009_create_org_unit_section_table;
mod m20261001_000010_create_integration_table;
mod m20261001_000011_create_org_unit_dashboard_table;
mod m20261001_000012_create_deployment_table;
mod m20261001_000013_create_incident_table;
mod m20261001_000014_create_workspace_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_tenant_table::Migration),
            Box::new(m20261001_000002_create_user_table::Migration),
            Box::new(m20261001_000003_create_org_user_table::Migration),
            Box::new(m20261001_000004_create_ou_category_table::Migration),
            Box::new(m20261001_000005_create_dashboard_table::Migration),
            Box::new(m20261001_000006_create_widget_table::Migration),
            Box::new(m20261001_000007_create_org_unit_table::Migration),
            Box::new(m20261001_000008_create_org_unit_manager_table::Migration),
            Box::new(m20261001_000009_create_org_unit_section_table::Migration),
            Box::new(m20261001_000010_create_integration_table::Migration),
            Box::new(m20261001_000011_create_org_unit_dashboard_table::Migration),
            Box::new(m20261001_000012_create_deployment_table::Migration),
            Box::new(m20261001_000013_create_incident_table::Migration),
            Box::new(m20261001_000014_create_workspace_table::Migration),
        ]
    }
}
