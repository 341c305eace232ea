use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_tenant_table::Tenant,
    m20261001_000010_create_integration_table::Integration,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workspace::Table)
                    .if_not_exists()
                    .col(pk_auto(Workspace::Id))
                    .col(integer(Workspace::TenantId))
                    .col(string(Workspace::Name))
                    .col(string(Workspace::Key))
                    .col(text_null(Workspace::Description))
                    .col(integer_null(Workspace::OwnerId))
                    .col(boolean(Workspace::Disabled).default(false))
                    .col(boolean(Workspace::Demo).default(false))
                    .col(
                        timestamp_with_time_zone(Workspace::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Workspace::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_tenant_id")
                            .from(Workspace::Table, Workspace::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_tenant_name")
                    .table(Workspace::Table)
                    .col(Workspace::TenantId)
                    .col(Workspace::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_tenant_key")
                    .table(Workspace::Table)
                    .col(Workspace::TenantId)
                    .col(Workspace::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkspaceIntegration::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkspaceIntegration::Id))
                    .col(integer(WorkspaceIntegration::WorkspaceId))
                    .col(integer(WorkspaceIntegration::IntegrationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_integration_workspace_id")
                            .from(WorkspaceIntegration::Table, WorkspaceIntegration::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_integration_integration_id")
                            .from(
                                WorkspaceIntegration::Table,
                                WorkspaceIntegration::IntegrationId,
                            )
                            .to(Integration::Table, Integration::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_integration_unique")
                    .table(WorkspaceIntegration::Table)
                    .col(WorkspaceIntegration::WorkspaceId)
                    .col(WorkspaceIntegration::IntegrationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceIntegration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workspace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workspace {
    Table,
    Id,
    TenantId,
    Name,
    Key,
    Description,
    OwnerId,
    Disabled,
    Demo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum WorkspaceIntegration {
    Table,
    Id,
    WorkspaceId,
    IntegrationId,
}
