//! Course, batch, and enrollment operations.

use std::sync::Arc;

use tracing::info;

use coursehub_core::error::AppError;
use coursehub_database::repositories::batch::BatchRepository;
use coursehub_database::repositories::course::CourseRepository;
use coursehub_database::repositories::student::StudentRepository;
use coursehub_entity::catalog::{Batch, Course, Student};

/// Request to create a new course.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateCourseRequest {
    /// Course title.
    pub title: String,
    /// Display name of the tutor.
    pub tutor_name: String,
    /// External tutor identifier.
    pub tutor_id: String,
    /// Cover image reference.
    pub image: Option<String>,
}

/// Manages the course catalog and batch enrollment.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Course repository.
    course_repo: Arc<CourseRepository>,
    /// Batch repository.
    batch_repo: Arc<BatchRepository>,
    /// Student repository.
    student_repo: Arc<StudentRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        course_repo: Arc<CourseRepository>,
        batch_repo: Arc<BatchRepository>,
        student_repo: Arc<StudentRepository>,
    ) -> Self {
        Self {
            course_repo,
            batch_repo,
            student_repo,
        }
    }

    /// Creates a new course.
    pub async fn create_course(&self, req: CreateCourseRequest) -> Result<Course, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Course title cannot be empty"));
        }

        let course = self
            .course_repo
            .create(
                req.title.trim(),
                &req.tutor_name,
                &req.tutor_id,
                req.image.as_deref(),
            )
            .await?;

        info!(course_id = course.id, title = %course.title, "Course created");
        Ok(course)
    }

    /// Returns a course by id.
    pub async fn get_course(&self, course_id: i64) -> Result<Course, AppError> {
        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {course_id} not found")))
    }

    /// Lists every course, newest first.
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.course_repo.find_all().await
    }

    /// Lists the courses run by a tutor.
    pub async fn list_courses_by_tutor(&self, tutor_id: &str) -> Result<Vec<Course>, AppError> {
        self.course_repo.find_by_tutor(tutor_id).await
    }

    /// Creates a batch under an existing course.
    pub async fn create_batch(&self, course_id: i64, name: &str) -> Result<Batch, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Batch name cannot be empty"));
        }

        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {course_id} not found")))?;

        let batch = self.batch_repo.create(course_id, name.trim()).await?;

        info!(course_id = course_id, batch_id = batch.id, "Batch created");
        Ok(batch)
    }

    /// Lists the batches of a course.
    pub async fn list_batches(&self, course_id: i64) -> Result<Vec<Batch>, AppError> {
        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {course_id} not found")))?;

        self.batch_repo.find_by_course(course_id).await
    }

    /// Enrolls a student (by email) into a batch of a course.
    ///
    /// The student record is created on first enrollment anywhere;
    /// enrolling twice in the same batch is a no-op.
    pub async fn add_student(
        &self,
        course_id: i64,
        batch_id: i64,
        email: &str,
    ) -> Result<Student, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Student email cannot be empty"));
        }

        let batch = self
            .batch_repo
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Batch {batch_id} not found")))?;

        if batch.course_id != course_id {
            return Err(AppError::validation(
                "Batch does not belong to the given course",
            ));
        }

        let student = self.student_repo.get_or_create(email).await?;
        self.student_repo.add_to_batch(batch_id, student.id).await?;

        info!(
            batch_id = batch_id,
            student_id = student.id,
            "Student enrolled in batch"
        );

        Ok(student)
    }

    /// Lists students enrolled in a batch.
    pub async fn list_students(&self, batch_id: i64) -> Result<Vec<Student>, AppError> {
        self.batch_repo
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Batch {batch_id} not found")))?;

        self.student_repo.find_by_batch(batch_id).await
    }

    /// Removes a student's enrollment from a batch by email.
    pub async fn remove_student(&self, batch_id: i64, email: &str) -> Result<(), AppError> {
        let removed = self.student_repo.remove_from_batch(batch_id, email).await?;
        if removed == 0 {
            return Err(AppError::not_found(format!(
                "Student {email} is not enrolled in batch {batch_id}"
            )));
        }

        info!(batch_id = batch_id, "Student removed from batch");
        Ok(())
    }
}
