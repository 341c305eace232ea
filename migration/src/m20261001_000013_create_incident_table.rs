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
                    .table(Incident::Table)
                    .if_not_exists()
                    .col(pk_auto(Incident::Id))
                    .col(integer(Incident::TenantId))
                    .col(integer(Incident::IntegrationId))
                    .col(string(Incident::Service))
                    .col(timestamp_with_time_zone(Incident::OpenedAt))
                    .col(timestamp_with_time_zone_null(Incident::ResolvedAt))
                    .col(
                        timestamp_with_time_zone(Incident::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_incident_tenant_id")
                            .from(Incident::Table, Incident::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Incident::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Incident {
    Table,
    Id,
    TenantId,
    IntegrationId,
    Service,
    OpenedAt,
    ResolvedAt,
    CreatedAt,
}
