//! Course catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use coursehub_core::error::AppError;
use coursehub_service::catalog::service::CreateCourseRequest as SvcCreateCourse;

use crate::dto::request::{AddStudentRequest, CreateBatchRequest, CreateCourseRequest};
use crate::dto::response::{
    ApiResponse, BatchResponse, CourseResponse, MessageResponse, StudentResponse,
};
use crate::extractors::AuthAdmin;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), AppError> {
    let req = validated(req)?;

    let course = state
        .catalog_service
        .create_course(SvcCreateCourse {
            title: req.title,
            tutor_name: req.tutor_name,
            tutor_id: req.tutor_id,
            image: req.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(course.into()))))
}

/// GET /api/v1/courses
pub async fn list_courses(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, AppError> {
    let courses = state.catalog_service.list_courses().await?;
    Ok(Json(ApiResponse::ok(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// GET /api/v1/courses/tutor/{tutor_id}
pub async fn list_courses_by_tutor(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(tutor_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, AppError> {
    let courses = state.catalog_service.list_courses_by_tutor(&tutor_id).await?;
    Ok(Json(ApiResponse::ok(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// POST /api/v1/courses/{course_id}/batches
pub async fn create_batch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(course_id): Path<i64>,
    Json(req): Json<CreateBatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BatchResponse>>), AppError> {
    let req = validated(req)?;

    let batch = state.catalog_service.create_batch(course_id, &req.name).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(batch.into()))))
}

/// GET /api/v1/courses/{course_id}/batches
pub async fn list_batches(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(course_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<BatchResponse>>>, AppError> {
    let batches = state.catalog_service.list_batches(course_id).await?;
    Ok(Json(ApiResponse::ok(
        batches.into_iter().map(BatchResponse::from).collect(),
    )))
}

/// POST /api/v1/courses/{course_id}/batches/{batch_id}/students
pub async fn add_student(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path((course_id, batch_id)): Path<(i64, i64)>,
    Json(req): Json<AddStudentRequest>,
) -> Result<Json<ApiResponse<StudentResponse>>, AppError> {
    let req = validated(req)?;

    let student = state
        .catalog_service
        .add_student(course_id, batch_id, &req.email)
        .await?;

    Ok(Json(ApiResponse::ok(student.into())))
}

/// GET /api/v1/courses/{course_id}/batches/{batch_id}/students
pub async fn list_students(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path((_course_id, batch_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<Vec<StudentResponse>>>, AppError> {
    let students = state.catalog_service.list_students(batch_id).await?;
    Ok(Json(ApiResponse::ok(
        students.into_iter().map(StudentResponse::from).collect(),
    )))
}

/// DELETE /api/v1/courses/{course_id}/batches/{batch_id}/students/{email}
pub async fn remove_student(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path((_course_id, batch_id, email)): Path<(i64, i64, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog_service.remove_student(batch_id, &email).await?;
    Ok(Json(MessageResponse::ok("Student removed from batch")))
}
