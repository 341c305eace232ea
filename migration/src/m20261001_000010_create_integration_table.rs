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
                    .table(Integration::Table)
                    .if_not_exists()
                    .col(pk_auto(Integration::Id))
                    .col(integer(Integration::TenantId))
                    .col(string_len(Integration::Name, 50))
                    .col(string(Integration::Application))
                    .col(text_null(Integration::Description))
                    .col(text_null(Integration::Url))
                    .col(string(Integration::Status).default("active"))
                    .col(json(Integration::Metadata))
                    .col(
                        timestamp_with_time_zone(Integration::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Integration::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_integration_tenant_id")
                            .from(Integration::Table, Integration::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_integration_tenant_name")
                    .table(Integration::Table)
                    .col(Integration::TenantId)
                    .col(Integration::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Integration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Integration {
    Table,
    Id,
    TenantId,
    Name,
    Application,
    Description,
    Url,
    Status,
    Metadata,
    CreatedAt,
    UpdatedAt,
}
