use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "xr_classroom_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub participant_id: String,
    pub classroom_id: String,
    pub user_id: String,
    pub joined_at: Option<String>,
    pub left_at: Option<String>,
    pub participation_score: Option<f64>,
    pub interaction_data: Json,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::xr_classroom::Entity",
        from = "Column::ClassroomId",
        to = "super::xr_classroom::Column::ClassroomId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Classroom,
}

impl Related<super::xr_classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
