use sea_orm::entity::prelude::*;

/// Content section of an org unit version: an integration scope plus the
/// static (`user_ids`) and dynamic (`dynamic_users_definition`) member sets.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "org_unit_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub org_unit_id: i32,
    pub integration_id: Option<i32>,
    pub integration_filters: Json,
    pub dynamic_users_definition: Json,
    pub user_ids: Json,
    pub default_section: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::org_unit::Entity",
        from = "Column::OrgUnitId",
        to = "super::org_unit::Column::Id",
        on_delete = "Cascade"
    )]
    OrgUnit,
}

impl ActiveModelBehavior for ActiveModel {}
