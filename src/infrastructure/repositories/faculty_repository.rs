//! SeaORM implementation of FacultyRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{empty_document, encode_list, new_id, now};
use crate::domain::{
    DomainError, FacultyMemberUpdate, FacultyRepository, NewFacultyMember, require,
};
use crate::models::FacultyMember;
use crate::models::faculty_member::{ActiveModel, Column, Entity as MemberEntity};

/// SeaORM-based implementation of FacultyRepository
pub struct SeaOrmFacultyRepository {
    db: DatabaseConnection,
}

impl SeaOrmFacultyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FacultyRepository for SeaOrmFacultyRepository {
    async fn add_member(&self, input: NewFacultyMember) -> Result<FacultyMember, DomainError> {
        require("user_id", &input.user_id)?;
        require("faculty_id", &input.faculty_id)?;

        let now = now();
        let member = ActiveModel {
            member_id: Set(new_id()),
            user_id: Set(input.user_id),
            faculty_id: Set(input.faculty_id),
            title: Set(input.title),
            specializations: Set(encode_list(&input.specializations)?),
            bio: Set(input.bio),
            office_hours: Set(input.office_hours.unwrap_or_else(empty_document)),
            ai_dean_integration: Set(input.ai_dean_integration.unwrap_or(false)),
            is_active: Set(true),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        match member.insert(&self.db).await {
            Ok(saved) => {
                tracing::debug!(
                    member_id = %saved.member_id,
                    faculty_id = %saved.faculty_id,
                    "faculty member added"
                );
                Ok(saved.into())
            }
            Err(e) => {
                let err = DomainError::from(e);
                if err.is_conflict() {
                    tracing::warn!("duplicate faculty membership rejected");
                }
                Err(err)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FacultyMember>, DomainError> {
        let member = MemberEntity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(member.map(FacultyMember::from))
    }

    async fn list_for_faculty(
        &self,
        faculty_id: &str,
        active_only: bool,
    ) -> Result<Vec<FacultyMember>, DomainError> {
        let mut query = MemberEntity::find().filter(Column::FacultyId.eq(faculty_id));
        if active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        let members = query.order_by_asc(Column::CreatedAt).all(&self.db).await?;
        Ok(members.into_iter().map(FacultyMember::from).collect())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<FacultyMember>, DomainError> {
        let members = MemberEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(members.into_iter().map(FacultyMember::from).collect())
    }

    async fn update_member(
        &self,
        id: &str,
        input: FacultyMemberUpdate,
    ) -> Result<FacultyMember, DomainError> {
        let existing = MemberEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(specializations) = input.specializations {
            active.specializations = Set(encode_list(&specializations)?);
        }
        if let Some(bio) = input.bio {
            active.bio = Set(bio);
        }
        if let Some(office_hours) = input.office_hours {
            active.office_hours = Set(office_hours);
        }
        if let Some(enabled) = input.ai_dean_integration {
            active.ai_dean_integration = Set(enabled);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?.into())
    }
}
