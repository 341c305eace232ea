use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_tenant_table::Tenant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgUser::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUser::Id))
                    .col(integer(OrgUser::TenantId))
                    .col(string(OrgUser::FullName))
                    .col(string(OrgUser::Email))
                    .col(json(OrgUser::Attributes))
                    .col(
                        timestamp_with_time_zone(OrgUser::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(OrgUser::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_user_tenant_id")
                            .from(OrgUser::Table, OrgUser::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_org_user_tenant_email")
                    .table(OrgUser::Table)
                    .col(OrgUser::TenantId)
                    .col(OrgUser::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrgUser {
    Table,
    Id,
    TenantId,
    FullName,
    Email,
    Attributes,
    CreatedAt,
    UpdatedAt,
}
