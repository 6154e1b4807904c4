//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.
//!
//! Input structs carry the caller-supplied columns only. Every `Option` left as
//! `None` falls back to the column default on insert; on update `None` means
//! "leave unchanged", so defaults are never re-applied to existing rows.
//! Nullable columns on update structs are `Option<Option<_>>`: `Some(None)`
//! clears the column. Those structs are built in code, not deserialized.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::DomainError;
use crate::models::{
    FacultyMember, PortalCourse, ai_tutor_session, portal_analytics, portal_enrollment,
    scholarship, scholarship_application, scroll_node, user_preferences, xr_classroom,
    xr_classroom_participant,
};

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

/// Input for creating a portal course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCourse {
    pub course_spec_id: String,
    pub title: String,
    pub faculty_id: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub duration_weeks: Option<i32>,
    pub xp_reward: Option<i32>,
    pub scroll_coin_cost: Option<f64>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub featured: Option<bool>,
    pub enrollment_open: Option<bool>,
}

/// Input for updating a portal course
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub faculty_id: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub level: Option<String>,
    pub duration_weeks: Option<i32>,
    pub xp_reward: Option<i32>,
    pub scroll_coin_cost: Option<f64>,
    pub prerequisites: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub enrollment_open: Option<bool>,
    pub rating: Option<f64>,
}

/// Filter criteria for course queries
#[derive(Debug, Default, Clone)]
pub struct CourseFilter {
    pub course_spec_id: Option<String>,
    pub faculty_id: Option<String>,
    pub level: Option<String>,
    pub featured: Option<bool>,
    pub enrollment_open: Option<bool>,
}

/// Repository trait for PortalCourse entity
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, input: NewCourse) -> Result<PortalCourse, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<PortalCourse>, DomainError>;

    /// Courses matching the filter, newest first
    async fn find_all(&self, filter: CourseFilter) -> Result<Vec<PortalCourse>, DomainError>;

    async fn update(&self, id: &str, input: CourseUpdate) -> Result<PortalCourse, DomainError>;
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEnrollment {
    pub user_id: String,
    pub portal_course_id: String,
    pub progress_percentage: Option<f64>,
    pub xp_earned: Option<i32>,
    pub scroll_coins_earned: Option<f64>,
    pub current_lesson_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollmentProgress {
    pub progress_percentage: Option<f64>,
    pub xp_earned: Option<i32>,
    pub scroll_coins_earned: Option<f64>,
    pub current_lesson_id: Option<Option<String>>,
    pub status: Option<String>,
    pub completion_date: Option<DateTime<Utc>>,
}

/// Repository trait for PortalEnrollment entity
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Insert the enrollment and bump the course's `enrollment_count` atomically.
    /// A second enrollment for the same (user, course) fails with `Conflict`.
    async fn enroll(&self, input: NewEnrollment) -> Result<portal_enrollment::Model, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<portal_enrollment::Model>, DomainError>;

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        portal_course_id: &str,
    ) -> Result<Option<portal_enrollment::Model>, DomainError>;

    async fn list_for_user(&self, user_id: &str)
    -> Result<Vec<portal_enrollment::Model>, DomainError>;

    async fn list_for_course(
        &self,
        portal_course_id: &str,
    ) -> Result<Vec<portal_enrollment::Model>, DomainError>;

    async fn update_progress(
        &self,
        id: &str,
        input: EnrollmentProgress,
    ) -> Result<portal_enrollment::Model, DomainError>;
}

// ---------------------------------------------------------------------------
// AI tutor sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTutorSession {
    pub user_id: String,
    pub tutor_type: String,
    pub portal_course_id: Option<String>,
    pub faculty_context: Option<String>,
    pub session_data: Option<Value>,
    #[serde(default)]
    pub conversation_history: Vec<Value>,
    pub satisfaction_rating: Option<i32>,
}

/// Repository trait for AITutorSession entity.
///
/// Transcripts are opaque to this layer: entries are stored exactly as given.
#[async_trait]
pub trait TutorSessionRepository: Send + Sync {
    async fn create(&self, input: NewTutorSession)
    -> Result<ai_tutor_session::Model, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<ai_tutor_session::Model>, DomainError>;

    async fn list_for_user(&self, user_id: &str)
    -> Result<Vec<ai_tutor_session::Model>, DomainError>;

    /// Append entries to `conversation_history`, keeping the existing ones.
    async fn append_messages(
        &self,
        id: &str,
        messages: Vec<Value>,
    ) -> Result<ai_tutor_session::Model, DomainError>;

    /// Replace the `session_data` document.
    async fn replace_session_data(
        &self,
        id: &str,
        session_data: Value,
    ) -> Result<ai_tutor_session::Model, DomainError>;

    /// Stamp `ended_at`, mark the session completed and store the rating if any.
    async fn end_session(
        &self,
        id: &str,
        satisfaction_rating: Option<i32>,
    ) -> Result<ai_tutor_session::Model, DomainError>;
}

// ---------------------------------------------------------------------------
// Scroll nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNode {
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub coordinator_id: Option<String>,
    pub status: Option<String>,
    pub sync_enabled: Option<bool>,
    pub node_type: Option<String>,
    pub connectivity_level: Option<String>,
    pub configuration: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub name: Option<String>,
    pub location: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub coordinator_id: Option<Option<String>>,
    pub status: Option<String>,
    pub sync_enabled: Option<bool>,
    pub node_type: Option<String>,
    pub connectivity_level: Option<String>,
    pub configuration: Option<Value>,
}

#[derive(Debug, Default, Clone)]
pub struct NodeFilter {
    pub name: Option<String>,
    pub status: Option<String>,
    pub country: Option<String>,
    pub node_type: Option<String>,
    pub connectivity_level: Option<String>,
    pub coordinator_id: Option<String>,
}

/// Repository trait for ScrollNode entity
#[async_trait]
pub trait NodeRepository: Send + Sync {
    async fn create(&self, input: NewNode) -> Result<scroll_node::Model, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<scroll_node::Model>, DomainError>;

    async fn find_all(&self, filter: NodeFilter) -> Result<Vec<scroll_node::Model>, DomainError>;

    async fn update(&self, id: &str, input: NodeUpdate) -> Result<scroll_node::Model, DomainError>;

    /// Record a completed synchronisation (`last_sync_at = now`).
    async fn mark_synced(&self, id: &str) -> Result<scroll_node::Model, DomainError>;
}

// ---------------------------------------------------------------------------
// Scholarships
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewScholarship {
    pub name: String,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub scholarship_type: Option<String>,
    pub eligibility_criteria: Option<Value>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub max_recipients: Option<i32>,
    pub is_active: Option<bool>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewScholarshipApplication {
    pub scholarship_id: String,
    pub user_id: String,
    pub application_data: Option<Value>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    UnderReview,
    Approved,
    Rejected,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::UnderReview => "under_review",
            ReviewDecision::Approved => "approved",
            ReviewDecision::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationReview {
    pub decision: ReviewDecision,
    pub reviewed_by: String,
    pub decision_reason: Option<String>,
}

/// Repository trait for Scholarship and ScholarshipApplication entities
#[async_trait]
pub trait ScholarshipRepository: Send + Sync {
    async fn create(&self, input: NewScholarship) -> Result<scholarship::Model, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<scholarship::Model>, DomainError>;

    async fn find_all(&self, active_only: bool) -> Result<Vec<scholarship::Model>, DomainError>;

    /// Submit an application. One application per (scholarship, user).
    async fn apply(
        &self,
        input: NewScholarshipApplication,
    ) -> Result<scholarship_application::Model, DomainError>;

    async fn find_application(
        &self,
        id: &str,
    ) -> Result<Option<scholarship_application::Model>, DomainError>;

    async fn list_applications(
        &self,
        scholarship_id: &str,
    ) -> Result<Vec<scholarship_application::Model>, DomainError>;

    async fn list_applications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<scholarship_application::Model>, DomainError>;

    /// Record a review decision. Moving an application into `approved`
    /// increments the scholarship's `current_recipients` in the same transaction.
    async fn review_application(
        &self,
        id: &str,
        review: ApplicationReview,
    ) -> Result<scholarship_application::Model, DomainError>;
}

// ---------------------------------------------------------------------------
// XR classrooms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct NewXrClassroom {
    pub portal_course_id: String,
    pub session_name: String,
    pub scheduled_time: DateTime<Utc>,
    pub description: Option<String>,
    pub instructor_id: Option<String>,
    pub duration_minutes: Option<i32>,
    pub max_participants: Option<i32>,
    pub xr_environment_id: Option<String>,
    pub recording_enabled: Option<bool>,
    pub access_requirements: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewParticipant {
    pub classroom_id: String,
    pub user_id: String,
    pub joined_at: Option<DateTime<Utc>>,
    pub interaction_data: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticipantExit {
    pub left_at: Option<DateTime<Utc>>,
    pub participation_score: Option<f64>,
    pub interaction_data: Option<Value>,
}

/// Repository trait for XRClassroom and XRClassroomParticipant entities
#[async_trait]
pub trait XrClassroomRepository: Send + Sync {
    async fn create(&self, input: NewXrClassroom) -> Result<xr_classroom::Model, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<xr_classroom::Model>, DomainError>;

    /// Classrooms of a course ordered by scheduled time
    async fn list_for_course(
        &self,
        portal_course_id: &str,
    ) -> Result<Vec<xr_classroom::Model>, DomainError>;

    async fn update_status(
        &self,
        id: &str,
        status: &str,
        recording_url: Option<String>,
    ) -> Result<xr_classroom::Model, DomainError>;

    /// Insert a participant and bump `current_participants` atomically.
    /// One participation record per (classroom, user).
    async fn join(
        &self,
        input: NewParticipant,
    ) -> Result<xr_classroom_participant::Model, DomainError>;

    /// Stamp `left_at` and store the score. Decrements `current_participants`
    /// the first time a participant leaves.
    async fn leave(
        &self,
        classroom_id: &str,
        user_id: &str,
        exit: ParticipantExit,
    ) -> Result<xr_classroom_participant::Model, DomainError>;

    async fn list_participants(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<xr_classroom_participant::Model>, DomainError>;
}

// ---------------------------------------------------------------------------
// Faculty members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFacultyMember {
    pub user_id: String,
    pub faculty_id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub bio: Option<String>,
    pub office_hours: Option<Value>,
    pub ai_dean_integration: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct FacultyMemberUpdate {
    pub title: Option<Option<String>>,
    pub specializations: Option<Vec<String>>,
    pub bio: Option<Option<String>>,
    pub office_hours: Option<Value>,
    pub ai_dean_integration: Option<bool>,
    pub is_active: Option<bool>,
}

/// Repository trait for FacultyMember entity
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// One membership row per (user, faculty).
    async fn add_member(&self, input: NewFacultyMember) -> Result<FacultyMember, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<FacultyMember>, DomainError>;

    async fn list_for_faculty(
        &self,
        faculty_id: &str,
        active_only: bool,
    ) -> Result<Vec<FacultyMember>, DomainError>;

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<FacultyMember>, DomainError>;

    async fn update_member(
        &self,
        id: &str,
        input: FacultyMemberUpdate,
    ) -> Result<FacultyMember, DomainError>;
}

// ---------------------------------------------------------------------------
// User preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUserPreferences {
    pub user_id: String,
    pub theme: Option<String>,
    pub notifications: Option<Value>,
    pub privacy_settings: Option<Value>,
    pub learning_preferences: Option<Value>,
    pub accessibility_settings: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesUpdate {
    pub theme: Option<String>,
    pub notifications: Option<Value>,
    pub privacy_settings: Option<Value>,
    pub learning_preferences: Option<Value>,
    pub accessibility_settings: Option<Value>,
}

/// Repository trait for UserPreferences (one row per user)
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn create(
        &self,
        input: NewUserPreferences,
    ) -> Result<user_preferences::Model, DomainError>;

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<user_preferences::Model>, DomainError>;

    /// Existing preferences for the user, or a freshly created default row.
    async fn get_or_create(&self, user_id: &str) -> Result<user_preferences::Model, DomainError>;

    async fn update(
        &self,
        user_id: &str,
        input: PreferencesUpdate,
    ) -> Result<user_preferences::Model, DomainError>;
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAnalyticsEvent {
    pub user_id: String,
    pub event_type: String,
    pub event_data: Option<Value>,
    pub session_id: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Clone)]
pub struct AnalyticsFilter {
    pub user_id: Option<String>,
    pub event_type: Option<String>,
    pub session_id: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
}

/// Repository trait for the append-only PortalAnalytics log
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn record(&self, input: NewAnalyticsEvent)
    -> Result<portal_analytics::Model, DomainError>;

    /// Events matching the filter in chronological order
    async fn find_all(
        &self,
        filter: AnalyticsFilter,
    ) -> Result<Vec<portal_analytics::Model>, DomainError>;
}
