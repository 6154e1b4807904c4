use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_SUBMITTED: &str = "submitted";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scholarship_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub application_id: String,
    pub scholarship_id: String,
    pub user_id: String,
    pub application_data: Json,
    pub status: String, // 'submitted', 'under_review', 'approved', 'rejected'
    pub applied_at: String,
    pub reviewed_at: Option<String>,
    pub reviewed_by: Option<String>,
    pub decision_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scholarship::Entity",
        from = "Column::ScholarshipId",
        to = "super::scholarship::Column::ScholarshipId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Scholarship,
}

impl Related<super::scholarship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scholarship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
