//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    AnalyticsRepository, CourseRepository, EnrollmentRepository, FacultyRepository,
    NodeRepository, PreferencesRepository, ScholarshipRepository, TutorSessionRepository,
    XrClassroomRepository,
};
use crate::infrastructure::{
    SeaOrmAnalyticsRepository, SeaOrmCourseRepository, SeaOrmEnrollmentRepository,
    SeaOrmFacultyRepository, SeaOrmNodeRepository, SeaOrmPreferencesRepository,
    SeaOrmScholarshipRepository, SeaOrmTutorSessionRepository, SeaOrmXrClassroomRepository,
};

/// Application state shared by every caller of the portal data layer
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Portal course catalogue
    pub course_repo: Arc<dyn CourseRepository>,
    pub enrollment_repo: Arc<dyn EnrollmentRepository>,
    /// AI tutor conversations
    pub tutor_repo: Arc<dyn TutorSessionRepository>,
    pub node_repo: Arc<dyn NodeRepository>,
    /// Scholarships and their applications
    pub scholarship_repo: Arc<dyn ScholarshipRepository>,
    /// XR classrooms and their participants
    pub xr_repo: Arc<dyn XrClassroomRepository>,
    pub faculty_repo: Arc<dyn FacultyRepository>,
    pub preferences_repo: Arc<dyn PreferencesRepository>,
    pub analytics_repo: Arc<dyn AnalyticsRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            course_repo: Arc::new(SeaOrmCourseRepository::new(db.clone())),
            enrollment_repo: Arc::new(SeaOrmEnrollmentRepository::new(db.clone())),
            tutor_repo: Arc::new(SeaOrmTutorSessionRepository::new(db.clone())),
            node_repo: Arc::new(SeaOrmNodeRepository::new(db.clone())),
            scholarship_repo: Arc::new(SeaOrmScholarshipRepository::new(db.clone())),
            xr_repo: Arc::new(SeaOrmXrClassroomRepository::new(db.clone())),
            faculty_repo: Arc::new(SeaOrmFacultyRepository::new(db.clone())),
            preferences_repo: Arc::new(SeaOrmPreferencesRepository::new(db.clone())),
            analytics_repo: Arc::new(SeaOrmAnalyticsRepository::new(db.clone())),
            db,
        }
    }

    /// Raw connection, for queries no repository covers
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
