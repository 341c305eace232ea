use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_tenant_table::Tenant, m20261001_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dashboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Dashboard::Id))
                    .col(integer(Dashboard::TenantId))
                    .col(string_len(Dashboard::Name, 100))
                    .col(string_len(Dashboard::DashboardType, 50))
                    .col(integer_null(Dashboard::OwnerId))
                    .col(json(Dashboard::Query))
                    .col(json(Dashboard::Metadata))
                    .col(boolean(Dashboard::Public).default(false))
                    .col(boolean(Dashboard::Demo).default(false))
                    .col(
                        timestamp_with_time_zone(Dashboard::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Dashboard::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dashboard_tenant_id")
                            .from(Dashboard::Table, Dashboard::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dashboard_owner_id")
                            .from(Dashboard::Table, Dashboard::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dashboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dashboard {
    Table,
    Id,
    TenantId,
    Name,
    DashboardType,
    OwnerId,
    Query,
    Metadata,
    Public,
    Demo,
    CreatedAt,
    UpdatedAt,
}
