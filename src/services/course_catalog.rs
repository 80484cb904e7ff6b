use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::structs::course::{Course, Lesson};
use crate::traits::backend::Backend;

/// A course with the lessons that belong to it.
#[derive(Debug, Clone)]
pub struct CourseDetail {
    pub course: Course,
    pub lessons: Vec<Lesson>,
}

impl CourseDetail {
    /// Lessons that carry a video.
    pub fn video_count(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.videos.len()).sum()
    }
}

/// Read-only view of the public catalog.
pub struct CourseCatalog;

impl CourseCatalog {
    /// Public course list.
    pub async fn list(backend: &dyn Backend) -> ArcdeskResult<Vec<Course>> {
        backend
            .list_courses()
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to fetch courses", e.without_message()))
    }

    /// One course with its lessons; a failed lesson lookup yields no lessons.
    pub async fn show(backend: &dyn Backend, course_id: &str) -> ArcdeskResult<CourseDetail> {
        let course = backend
            .get_course(course_id)
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to fetch course", e))?;

        // A course without reachable lessons is still worth showing.
        let lessons = match backend.list_lessons(course_id).await {
            Ok(lessons) => lessons,
            Err(e) => {
                log::warn!("Could not load lessons for course {}: {}", course_id, e);
                Vec::new()
            }
        };

        Ok(CourseDetail { course, lessons })
    }
}
