use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_tenant_table::Tenant,
    m20261001_000004_create_ou_category_table::OuCategory,
    m20261001_000005_create_dashboard_table::Dashboard,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUnit::Id))
                    .col(integer(OrgUnit::TenantId))
                    .col(integer(OrgUnit::RefId))
                    .col(integer(OrgUnit::Version))
                    .col(string(OrgUnit::Name))
                    .col(text_null(OrgUnit::Description))
                    .col(integer_null(OrgUnit::ParentRefId))
                    .col(json(OrgUnit::TagIds))
                    .col(boolean(OrgUnit::Active).default(false))
                    .col(text(OrgUnit::Path))
                    .col(integer_null(OrgUnit::OuCategoryId))
                    .col(integer_null(OrgUnit::DefaultDashboardId))
                    .col(
                        timestamp_with_time_zone(OrgUnit::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(OrgUnit::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_tenant_id")
                            .from(OrgUnit::Table, OrgUnit::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_ou_category_id")
                            .from(OrgUnit::Table, OrgUnit::OuCategoryId)
                            .to(OuCategory::Table, OuCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_default_dashboard_id")
                            .from(OrgUnit::Table, OrgUnit::DefaultDashboardId)
                            .to(Dashboard::Table, Dashboard::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_org_unit_tenant_ref_version")
                    .table(OrgUnit::Table)
                    .col(OrgUnit::TenantId)
                    .col(OrgUnit::RefId)
                    .col(OrgUnit::Version)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_org_unit_tenant_parent")
                    .table(OrgUnit::Table)
                    .col(OrgUnit::TenantId)
                    .col(OrgUnit::ParentRefId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrgUnit {
    Table,
    Id,
    TenantId,
    RefId,
    Version,
    Name,
    Description,
    ParentRefId,
    TagIds,
    Active,
    Path,
    OuCategoryId,
    DefaultDashboardId,
    CreatedAt,
    UpdatedAt,
}
