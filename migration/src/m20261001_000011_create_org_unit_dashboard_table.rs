use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000005_create_dashboard_table::Dashboard,
    m20261001_000007_create_org_unit_table::OrgUnit,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgUnitDashboard::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUnitDashboard::Id))
                    .col(integer(OrgUnitDashboard::OrgUnitId))
                    .col(integer(OrgUnitDashboard::DashboardId))
                    .col(integer(OrgUnitDashboard::DashboardOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_dashboard_org_unit_id")
                            .from(OrgUnitDashboard::Table, OrgUnitDashboard::OrgUnitId)
                            .to(OrgUnit::Table, OrgUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_dashboard_dashboard_id")
                            .from(OrgUnitDashboard::Table, OrgUnitDashboard::DashboardId)
                            .to(Dashboard::Table, Dashboard::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_org_unit_dashboard_unique")
                    .table(OrgUnitDashboard::Table)
                    .col(OrgUnitDashboard::OrgUnitId)
                    .col(OrgUnitDashboard::DashboardId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgUnitDashboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrgUnitDashboard {
    Table,
    Id,
    OrgUnitId,
    DashboardId,
    DashboardOrder,
}
