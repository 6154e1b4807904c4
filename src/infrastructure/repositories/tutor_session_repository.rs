//! SeaORM implementation of TutorSessionRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;

use super::{empty_document, new_id, now};
use crate::domain::{DomainError, NewTutorSession, TutorSessionRepository, require};
use crate::models::ai_tutor_session::{
    ActiveModel, Column, Entity as SessionEntity, Model, STATUS_ACTIVE, STATUS_COMPLETED,
};

/// SeaORM-based implementation of TutorSessionRepository
pub struct SeaOrmTutorSessionRepository {
    db: DatabaseConnection,
}

impl SeaOrmTutorSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: &str) -> Result<Model, DomainError> {
        SessionEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)
    }
}

#[async_trait]
impl TutorSessionRepository for SeaOrmTutorSessionRepository {
    async fn create(&self, input: NewTutorSession) -> Result<Model, DomainError> {
        require("user_id", &input.user_id)?;
        require("tutor_type", &input.tutor_type)?;

        let now = now();
        let session = ActiveModel {
            session_id: Set(new_id()),
            user_id: Set(input.user_id),
            portal_course_id: Set(input.portal_course_id),
            tutor_type: Set(input.tutor_type),
            faculty_context: Set(input.faculty_context),
            session_data: Set(input.session_data.unwrap_or_else(empty_document)),
            conversation_history: Set(Value::Array(input.conversation_history)),
            started_at: Set(now.clone()),
            ended_at: Set(None),
            satisfaction_rating: Set(input.satisfaction_rating),
            status: Set(STATUS_ACTIVE.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = session.insert(&self.db).await?;
        tracing::debug!(
            session_id = %result.session_id,
            tutor_type = %result.tutor_type,
            "tutor session started"
        );
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DomainError> {
        Ok(SessionEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Model>, DomainError> {
        Ok(SessionEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::StartedAt)
            .all(&self.db)
            .await?)
    }

    async fn append_messages(&self, id: &str, messages: Vec<Value>) -> Result<Model, DomainError> {
        let existing = self.load(id).await?;

        let mut history = match existing.conversation_history.clone() {
            Value::Array(entries) => entries,
            Value::Null => Vec::new(),
            other => {
                return Err(DomainError::Internal(format!(
                    "conversation_history of session {} is not an array: {}",
                    id, other
                )));
            }
        };
        history.extend(messages);

        let mut active: ActiveModel = existing.into();
        active.conversation_history = Set(Value::Array(history));
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }

    async fn replace_session_data(
        &self,
        id: &str,
        session_data: Value,
    ) -> Result<Model, DomainError> {
        let mut active: ActiveModel = self.load(id).await?.into();
        active.session_data = Set(session_data);
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }

    async fn end_session(
        &self,
        id: &str,
        satisfaction_rating: Option<i32>,
    ) -> Result<Model, DomainError> {
        let mut active: ActiveModel = self.load(id).await?.into();

        let now = now();
        active.ended_at = Set(Some(now.clone()));
        active.status = Set(STATUS_COMPLETED.to_string());
        if let Some(rating) = satisfaction_rating {
            active.satisfaction_rating = Set(Some(rating));
        }
        active.updated_at = Set(now);

        Ok(active.update(&self.db).await?)
    }
}
