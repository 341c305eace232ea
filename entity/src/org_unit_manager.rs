use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "org_unit_manager")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub org_unit_id: i32,
    pub org_user_id: i32,
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
    #[sea_orm(
        belongs_to = "super::org_user::Entity",
        from = "Column::OrgUserId",
        to = "super::org_user::Column::Id",
        on_delete = "Cascade"
    )]
    OrgUser,
}

impl ActiveModelBehavior for ActiveModel {}
