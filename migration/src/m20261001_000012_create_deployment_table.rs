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
                    .table(Deployment::Table)
                    .if_not_exists()
                    .col(pk_auto(Deployment::Id))
                    .col(integer(Deployment::TenantId))
                    .col(integer(Deployment::IntegrationId))
                    .col(string(Deployment::Service))
                    .col(string(Deployment::Environment))
                    .col(timestamp_with_time_zone(Deployment::DeployedAt))
                    .col(timestamp_with_time_zone_null(Deployment::FirstCommitAt))
                    .col(boolean(Deployment::Failed).default(false))
                    .col(
                        timestamp_with_time_zone(Deployment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deployment_tenant_id")
                            .from(Deployment::Table, Deployment::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_deployment_tenant_deployed_at")
                    .table(Deployment::Table)
                    .col(Deployment::TenantId)
                    .col(Deployment::DeployedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deployment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deployment {
    Table,
    Id,
    TenantId,
    IntegrationId,
    Service,
    Environment,
    DeployedAt,
    FirstCommitAt,
    Failed,
    CreatedAt,
}
