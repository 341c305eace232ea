use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_org_user_table::OrgUser,
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
                    .table(OrgUnitManager::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUnitManager::Id))
                    .col(integer(OrgUnitManager::OrgUnitId))
                    .col(integer(OrgUnitManager::OrgUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_manager_org_unit_id")
                            .from(OrgUnitManager::Table, OrgUnitManager::OrgUnitId)
                            .to(OrgUnit::Table, OrgUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_unit_manager_org_user_id")
                            .from(OrgUnitManager::Table, OrgUnitManager::OrgUserId)
                            .to(OrgUser::Table, OrgUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgUnitManager::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrgUnitManager {
    Table,
    Id,
    OrgUnitId,
    OrgUserId,
}
