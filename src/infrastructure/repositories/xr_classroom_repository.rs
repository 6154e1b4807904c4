//! SeaORM implementation of XrClassroomRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{empty_document, format_time, new_id, now};
use crate::domain::{
    DomainError, NewParticipant, NewXrClassroom, ParticipantExit, XrClassroomRepository, require,
};
use crate::models::xr_classroom::{
    self, DEFAULT_DURATION_MINUTES, DEFAULT_MAX_PARTICIPANTS, Entity as ClassroomEntity,
    STATUS_SCHEDULED,
};
use crate::models::xr_classroom_participant::{self as participant, Entity as ParticipantEntity};

/// SeaORM-based implementation of XrClassroomRepository
pub struct SeaOrmXrClassroomRepository {
    db: DatabaseConnection,
}

impl SeaOrmXrClassroomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl XrClassroomRepository for SeaOrmXrClassroomRepository {
    async fn create(&self, input: NewXrClassroom) -> Result<xr_classroom::Model, DomainError> {
        require("portal_course_id", &input.portal_course_id)?;
        require("session_name", &input.session_name)?;

        let now = now();
        let classroom = xr_classroom::ActiveModel {
            classroom_id: Set(new_id()),
            portal_course_id: Set(input.portal_course_id),
            session_name: Set(input.session_name),
            description: Set(input.description),
            instructor_id: Set(input.instructor_id),
            scheduled_time: Set(format_time(input.scheduled_time)),
            duration_minutes: Set(input.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)),
            max_participants: Set(input.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS)),
            current_participants: Set(0),
            xr_environment_id: Set(input.xr_environment_id),
            recording_enabled: Set(input.recording_enabled.unwrap_or(true)),
            recording_url: Set(None),
            status: Set(STATUS_SCHEDULED.to_string()),
            access_requirements: Set(input.access_requirements.unwrap_or_else(empty_document)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = classroom.insert(&self.db).await?;
        tracing::debug!(
            classroom_id = %result.classroom_id,
            scheduled_time = %result.scheduled_time,
            "xr classroom scheduled"
        );
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<xr_classroom::Model>, DomainError> {
        Ok(ClassroomEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?)
    }

    async fn list_for_course(
        &self,
        portal_course_id: &str,
    ) -> Result<Vec<xr_classroom::Model>, DomainError> {
        Ok(ClassroomEntity::find()
            .filter(xr_classroom::Column::PortalCourseId.eq(portal_course_id))
            .order_by_asc(xr_classroom::Column::ScheduledTime)
            .all(&self.db)
            .await?)
    }

    async fn update_status(
        &self,
        id: &str,
        status: &str,
        recording_url: Option<String>,
    ) -> Result<xr_classroom::Model, DomainError> {
        require("status", status)?;

        let existing = ClassroomEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: xr_classroom::ActiveModel = existing.into();
        active.status = Set(status.to_string());
        if recording_url.is_some() {
            active.recording_url = Set(recording_url);
        }
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }

    async fn join(&self, input: NewParticipant) -> Result<participant::Model, DomainError> {
        require("classroom_id", &input.classroom_id)?;
        require("user_id", &input.user_id)?;

        let now = now();
        let classroom_id = input.classroom_id.clone();
        let record = participant::ActiveModel {
            participant_id: Set(new_id()),
            classroom_id: Set(input.classroom_id),
            user_id: Set(input.user_id),
            joined_at: Set(Some(input.joined_at.map(format_time).unwrap_or_else(|| now.clone()))),
            left_at: Set(None),
            participation_score: Set(None),
            interaction_data: Set(input.interaction_data.unwrap_or_else(empty_document)),
            created_at: Set(now),
        };

        let txn = self.db.begin().await?;

        let saved = match record.insert(&txn).await {
            Ok(saved) => saved,
            Err(e) => {
                let err = DomainError::from(e);
                if err.is_conflict() {
                    tracing::warn!(classroom_id = %classroom_id, "duplicate participant rejected");
                }
                return Err(err);
            }
        };

        ClassroomEntity::update_many()
            .col_expr(
                xr_classroom::Column::CurrentParticipants,
                Expr::col(xr_classroom::Column::CurrentParticipants).add(1),
            )
            .filter(xr_classroom::Column::ClassroomId.eq(classroom_id.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(participant_id = %saved.participant_id, "participant joined classroom");
        Ok(saved)
    }

    async fn leave(
        &self,
        classroom_id: &str,
        user_id: &str,
        exit: ParticipantExit,
    ) -> Result<participant::Model, DomainError> {
        let txn = self.db.begin().await?;

        let existing = ParticipantEntity::find()
            .filter(participant::Column::ClassroomId.eq(classroom_id))
            .filter(participant::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let first_exit = existing.left_at.is_none();

        let mut active: participant::ActiveModel = existing.into();
        active.left_at = Set(Some(
            exit.left_at.map(format_time).unwrap_or_else(now),
        ));
        if let Some(score) = exit.participation_score {
            active.participation_score = Set(Some(score));
        }
        if let Some(data) = exit.interaction_data {
            active.interaction_data = Set(data);
        }
        let updated = active.update(&txn).await?;

        if first_exit {
            ClassroomEntity::update_many()
                .col_expr(
                    xr_classroom::Column::CurrentParticipants,
                    Expr::col(xr_classroom::Column::CurrentParticipants).sub(1),
                )
                .filter(xr_classroom::Column::ClassroomId.eq(classroom_id))
                .filter(xr_classroom::Column::CurrentParticipants.gt(0))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    async fn list_participants(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<participant::Model>, DomainError> {
        Ok(ParticipantEntity::find()
            .filter(participant::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(participant::Column::JoinedAt)
            .all(&self.db)
            .await?)
    }
}
