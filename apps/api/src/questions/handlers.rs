//! Axum route handler for the question generation endpoint.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::question::QuestionRecord;
use crate::questions::pipeline::generate_questions;
use crate::resume::pdf::extract_resume_text;
use crate::resume::validation::{
    validate_file_size, validate_job_description, validate_pdf_filename, validate_resume_text,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionRecord>,
}

/// Multipart fields of a generation request. Unknown parts are ignored.
#[derive(Default)]
struct UploadForm {
    filename: Option<String>,
    resume: Option<Bytes>,
    job_description: Option<String>,
}

/// POST /generate-questions
///
/// Multipart form with a `resume` PDF file and a `job_description` text field.
/// Validates input, extracts resume text, and runs the question pipeline.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<QuestionsResponse>, AppError> {
    let span = info_span!("generate_questions", request_id = %Uuid::new_v4());
    process_upload(state, multipart).instrument(span).await
}

async fn process_upload(
    state: AppState,
    multipart: Multipart,
) -> Result<Json<QuestionsResponse>, AppError> {
    let form = read_form(multipart).await?;
    let limits = &state.config.limits;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let job_description = form
        .job_description
        .ok_or_else(|| AppError::Validation("Missing 'job_description' field".to_string()))?;

    info!(
        "Received request: resume={}, job_desc_length={}",
        form.filename.as_deref().unwrap_or("<none>"),
        job_description.chars().count()
    );

    validate_pdf_filename(form.filename.as_deref())?;
    validate_file_size(resume.len(), limits)?;
    let job_description = validate_job_description(&job_description, limits)?;

    let resume_text = extract_resume_text(resume.to_vec()).await?;
    validate_resume_text(&resume_text, limits)?;

    let questions = generate_questions(
        &resume_text,
        job_description,
        state.llm.as_ref(),
        state.config.top_k_chunks,
    )
    .await?;

    Ok(Json(QuestionsResponse { questions }))
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                form.filename = field.file_name().map(str::to_owned);
                form.resume = Some(field.bytes().await?);
            }
            Some("job_description") => {
                form.job_description = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_response_wraps_records_unchanged() {
        let response = QuestionsResponse {
            questions: vec![
                QuestionRecord::from(json!({"category": "Technical", "question": "Why Rust?"})),
                QuestionRecord::from(json!({"question": "No category", "difficulty": 3})),
            ],
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "questions": [
                    {"category": "Technical", "question": "Why Rust?"},
                    {"question": "No category", "difficulty": 3}
                ]
            })
        );
    }
}
