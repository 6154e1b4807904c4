//! SeaORM implementation of EnrollmentRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{format_time, new_id, now};
use crate::domain::{DomainError, EnrollmentProgress, EnrollmentRepository, NewEnrollment, require};
use crate::models::portal_course::{self, Entity as CourseEntity};
use crate::models::portal_enrollment::{
    ActiveModel, Column, Entity as EnrollmentEntity, Model, STATUS_ACTIVE,
};

/// SeaORM-based implementation of EnrollmentRepository
pub struct SeaOrmEnrollmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn enroll(&self, input: NewEnrollment) -> Result<Model, DomainError> {
        require("user_id", &input.user_id)?;
        require("portal_course_id", &input.portal_course_id)?;

        let now = now();
        let course_id = input.portal_course_id.clone();

        let enrollment = ActiveModel {
            enrollment_id: Set(new_id()),
            user_id: Set(input.user_id),
            portal_course_id: Set(input.portal_course_id),
            enrollment_date: Set(now.clone()),
            completion_date: Set(None),
            progress_percentage: Set(input.progress_percentage.unwrap_or(0.0)),
            xp_earned: Set(input.xp_earned.unwrap_or(0)),
            scroll_coins_earned: Set(input.scroll_coins_earned.unwrap_or(0.0)),
            current_lesson_id: Set(input.current_lesson_id),
            status: Set(input.status.unwrap_or_else(|| STATUS_ACTIVE.to_string())),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        // Dropping the transaction on any error rolls both writes back
        let txn = self.db.begin().await?;

        let saved = match enrollment.insert(&txn).await {
            Ok(saved) => saved,
            Err(e) => {
                let err = DomainError::from(e);
                if err.is_conflict() {
                    tracing::warn!(course_id = %course_id, "duplicate enrollment rejected");
                }
                return Err(err);
            }
        };

        CourseEntity::update_many()
            .col_expr(
                portal_course::Column::EnrollmentCount,
                Expr::col(portal_course::Column::EnrollmentCount).add(1),
            )
            .filter(portal_course::Column::PortalCourseId.eq(course_id.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            enrollment_id = %saved.enrollment_id,
            course_id = %course_id,
            "user enrolled"
        );
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DomainError> {
        Ok(EnrollmentEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?)
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        portal_course_id: &str,
    ) -> Result<Option<Model>, DomainError> {
        Ok(EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::PortalCourseId.eq(portal_course_id))
            .one(&self.db)
            .await?)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Model>, DomainError> {
        Ok(EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::EnrollmentDate)
            .all(&self.db)
            .await?)
    }

    async fn list_for_course(&self, portal_course_id: &str) -> Result<Vec<Model>, DomainError> {
        Ok(EnrollmentEntity::find()
            .filter(Column::PortalCourseId.eq(portal_course_id))
            .order_by_asc(Column::EnrollmentDate)
            .all(&self.db)
            .await?)
    }

    async fn update_progress(
        &self,
        id: &str,
        input: EnrollmentProgress,
    ) -> Result<Model, DomainError> {
        let existing = EnrollmentEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(progress) = input.progress_percentage {
            active.progress_percentage = Set(progress);
        }
        if let Some(xp) = input.xp_earned {
            active.xp_earned = Set(xp);
        }
        if let Some(coins) = input.scroll_coins_earned {
            active.scroll_coins_earned = Set(coins);
        }
        if let Some(lesson) = input.current_lesson_id {
            active.current_lesson_id = Set(lesson);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(completed_at) = input.completion_date {
            active.completion_date = Set(Some(format_time(completed_at)));
        }
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }
}
