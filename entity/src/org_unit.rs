use sea_orm::entity::prelude::*;

/// One version of an org unit. Rows sharing a `ref_id` are versions of the
/// same unit; at most one of them is `active`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "org_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tenant_id: i32,
    pub ref_id: i32,
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    pub tag_ids: Json,
    pub active: bool,
    pub path: String,
    pub ou_category_id: Option<i32>,
    pub default_dashboard_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_delete = "Cascade"
    )]
    Tenant,
    #[sea_orm(
        belongs_to = "super::ou_category::Entity",
        from = "Column::OuCategoryId",
        to = "super::ou_category::Column::Id",
        on_delete = "SetNull"
    )]
    OuCategory,
    #[sea_orm(
        belongs_to = "super::dashboard::Entity",
        from = "Column::DefaultDashboardId",
        to = "super::dashboard::Column::Id",
        on_delete = "SetNull"
    )]
    DefaultDashboard,
}

impl Related<super::ou_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OuCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
