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
                    .table(OuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(OuCategory::Id))
                    .col(integer(OuCategory::TenantId))
                    .col(string(OuCategory::Name))
                    .col(text_null(OuCategory::Description))
                    .col(boolean(OuCategory::IsPredefined).default(false))
                    .col(boolean(OuCategory::Enabled).default(true))
                    .col(integer(OuCategory::WorkspaceId))
                    .col(
                        timestamp_with_time_zone(OuCategory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(OuCategory::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ou_category_tenant_id")
                            .from(OuCategory::Table, OuCategory::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ou_category_tenant_name_workspace")
                    .table(OuCategory::Table)
                    .col(OuCategory::TenantId)
                    .col(OuCategory::Name)
                    .col(OuCategory::WorkspaceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OuCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OuCategory {
    Table,
    Id,
    TenantId,
    Name,
    Description,
    IsPredefined,
    Enabled,
    WorkspaceId,
    CreatedAt,
    UpdatedAt,
}
