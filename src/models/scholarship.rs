use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "ScrollCoin";
pub const DEFAULT_TYPE: &str = "merit";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scholarships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scholarship_id: String,
    pub name: String,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub currency: String,
    pub scholarship_type: String, // 'merit', 'need', 'prophetic', 'workstudy'
    pub eligibility_criteria: Json,
    pub application_deadline: Option<String>,
    pub max_recipients: Option<i32>,
    pub current_recipients: i32,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scholarship_application::Entity")]
    Applications,
}

impl Related<super::scholarship_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
