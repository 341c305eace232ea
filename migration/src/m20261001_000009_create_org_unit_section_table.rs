use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000007_create_org_unit_table::OrgUnit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgUnitSection::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUnitSection::Id))
                    .col(integer(OrgUnitSection::OrgUnitId))
                    .col(integer_null(OrgUnitSection::IntegrationId))
                    .col(json(OrgUnitSection::IntegrationFilters))
                    .col(json(OrgUnitSection::DynamicUsersDefinition))
                    .col(json(OrgUnitSection::UserIds))
                    .col(boolean(OrgUnitSection::DefaultSection).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_section_org_unit_id")
                            .from(OrgUnitSection::Table, OrgUnitSection::OrgUnitId)
                            .to(OrgUnit::Table, OrgUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgUnitSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrgUnitSection {
    Table,
    Id,
    OrgUnitId,
    IntegrationId,
    IntegrationFilters,
    DynamicUsersDefinition,
    UserIds,
    DefaultSection,
}
