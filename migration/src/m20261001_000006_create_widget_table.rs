use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_dashboard_table::Dashboard;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Widget::Table)
                    .if_not_exists()
                    .col(pk_auto(Widget::Id))
                    .col(integer(Widget::DashboardId))
                    .col(string_len(Widget::Name, 100))
                    .col(string_len(Widget::WidgetType, 50))
                    .col(json(Widget::Query))
                    .col(json(Widget::Metadata))
                    .col(json(Widget::DisplayInfo))
                    .col(boolean(Widget::Precalculate).default(false))
                    .col(integer(Widget::PrecalculateFrequencyInMins).default(0))
                    .col(
                        timestamp_with_time_zone(Widget::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_widget_dashboard_id")
                            .from(Widget::Table, Widget::DashboardId)
                            .to(Dashboard::Table, Dashboard::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Widget::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Widget {
    Table,
    Id,
    DashboardId,
    Name,
    WidgetType,
    Query,
    Metadata,
    DisplayInfo,
    Precalculate,
    PrecalculateFrequencyInMins,
    CreatedAt,
}
