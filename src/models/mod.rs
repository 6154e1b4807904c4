pub mod ai_tutor_session;
pub mod faculty_member;
pub mod portal_analytics;
pub mod portal_course;
pub mod portal_enrollment;
pub mod scholarship;
pub mod scholarship_application;
pub mod scroll_node;
pub mod user_preferences;
pub mod xr_classroom;
pub mod xr_classroom_participant;

pub use faculty_member::FacultyMember;
pub use portal_course::PortalCourse;
