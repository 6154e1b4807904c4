//! SeaORM implementation of ScholarshipRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::{empty_document, format_time, new_id, now};
use crate::domain::{
    ApplicationReview, DomainError, NewScholarship, NewScholarshipApplication, ReviewDecision,
    ScholarshipRepository, require,
};
use crate::models::scholarship::{
    self, DEFAULT_CURRENCY, DEFAULT_TYPE, Entity as ScholarshipEntity,
};
use crate::models::scholarship_application::{
    self as application, Entity as ApplicationEntity, STATUS_SUBMITTED,
};

const STATUS_APPROVED: &str = "approved";

/// SeaORM-based implementation of ScholarshipRepository
pub struct SeaOrmScholarshipRepository {
    db: DatabaseConnection,
}

impl SeaOrmScholarshipRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScholarshipRepository for SeaOrmScholarshipRepository {
    async fn create(&self, input: NewScholarship) -> Result<scholarship::Model, DomainError> {
        require("name", &input.name)?;

        let now = now();
        let new_scholarship = scholarship::ActiveModel {
            scholarship_id: Set(new_id()),
            name: Set(input.name),
            description: Set(input.description),
            amount: Set(input.amount),
            currency: Set(input
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
            scholarship_type: Set(input
                .scholarship_type
                .unwrap_or_else(|| DEFAULT_TYPE.to_string())),
            eligibility_criteria: Set(input.eligibility_criteria.unwrap_or_else(empty_document)),
            application_deadline: Set(input.application_deadline.map(format_time)),
            max_recipients: Set(input.max_recipients),
            current_recipients: Set(0),
            is_active: Set(input.is_active.unwrap_or(true)),
            created_by: Set(input.created_by),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = new_scholarship.insert(&self.db).await?;
        tracing::debug!(scholarship_id = %result.scholarship_id, "scholarship created");
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<scholarship::Model>, DomainError> {
        Ok(ScholarshipEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?)
    }

    async fn find_all(&self, active_only: bool) -> Result<Vec<scholarship::Model>, DomainError> {
        let mut query = ScholarshipEntity::find();
        if active_only {
            query = query.filter(scholarship::Column::IsActive.eq(true));
        }

        Ok(query
            .order_by_asc(scholarship::Column::ApplicationDeadline)
            .order_by_asc(scholarship::Column::Name)
            .all(&self.db)
            .await?)
    }

    async fn apply(
        &self,
        input: NewScholarshipApplication,
    ) -> Result<application::Model, DomainError> {
        require("scholarship_id", &input.scholarship_id)?;
        require("user_id", &input.user_id)?;

        let now = now();
        let new_application = application::ActiveModel {
            application_id: Set(new_id()),
            scholarship_id: Set(input.scholarship_id),
            user_id: Set(input.user_id),
            application_data: Set(input.application_data.unwrap_or_else(empty_document)),
            status: Set(input.status.unwrap_or_else(|| STATUS_SUBMITTED.to_string())),
            applied_at: Set(now.clone()),
            reviewed_at: Set(None),
            reviewed_by: Set(None),
            decision_reason: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        match new_application.insert(&self.db).await {
            Ok(saved) => {
                tracing::debug!(
                    application_id = %saved.application_id,
                    scholarship_id = %saved.scholarship_id,
                    "scholarship application submitted"
                );
                Ok(saved)
            }
            Err(e) => {
                let err = DomainError::from(e);
                if err.is_conflict() {
                    tracing::warn!("duplicate scholarship application rejected");
                }
                Err(err)
            }
        }
    }

    async fn find_application(
        &self,
        id: &str,
    ) -> Result<Option<application::Model>, DomainError> {
        Ok(ApplicationEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?)
    }

    async fn list_applications(
        &self,
        scholarship_id: &str,
    ) -> Result<Vec<application::Model>, DomainError> {
        Ok(ApplicationEntity::find()
            .filter(application::Column::ScholarshipId.eq(scholarship_id))
            .order_by_asc(application::Column::AppliedAt)
            .all(&self.db)
            .await?)
    }

    async fn list_applications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<application::Model>, DomainError> {
        Ok(ApplicationEntity::find()
            .filter(application::Column::UserId.eq(user_id))
            .order_by_desc(application::Column::AppliedAt)
            .all(&self.db)
            .await?)
    }

    async fn review_application(
        &self,
        id: &str,
        review: ApplicationReview,
    ) -> Result<application::Model, DomainError> {
        require("reviewed_by", &review.reviewed_by)?;

        let txn = self.db.begin().await?;

        let existing = ApplicationEntity::find_by_id(id.to_owned())
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let was_approved = existing.status == STATUS_APPROVED;
        let now_approved = review.decision == ReviewDecision::Approved;
        let scholarship_id = existing.scholarship_id.clone();

        let now = now();
        let mut active: application::ActiveModel = existing.into();
        active.status = Set(review.decision.as_str().to_string());
        active.reviewed_at = Set(Some(now.clone()));
        active.reviewed_by = Set(Some(review.reviewed_by));
        active.decision_reason = Set(review.decision_reason);
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        // Keep the recipient count in step with approvals
        let delta = match (was_approved, now_approved) {
            (false, true) => 1,
            (true, false) => -1,
            _ => 0,
        };
        if delta != 0 {
            ScholarshipEntity::update_many()
                .col_expr(
                    scholarship::Column::CurrentRecipients,
                    Expr::col(scholarship::Column::CurrentRecipients).add(delta),
                )
                .filter(scholarship::Column::ScholarshipId.eq(scholarship_id.as_str()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(
            application_id = %updated.application_id,
            decision = review.decision.as_str(),
            "scholarship application reviewed"
        );
        Ok(updated)
    }
}
