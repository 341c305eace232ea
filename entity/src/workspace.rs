use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workspace")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub disabled: bool,
    pub demo: bool,
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
    #[sea_orm(has_many = "super::workspace_integration::Entity")]
    WorkspaceIntegration,
}

impl Related<super::workspace_integration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkspaceIntegration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
