//! Upload and input validation. Every check here runs before any extraction or LLM work.

use crate::config::RequestLimits;
use crate::errors::AppError;

/// Rejects anything whose filename does not end in `.pdf`.
pub fn validate_pdf_filename(filename: Option<&str>) -> Result<(), AppError> {
    match filename {
        Some(name) if name.to_ascii_lowercase().ends_with(".pdf") => Ok(()),
        _ => Err(AppError::Validation(
            "Invalid file type. Only PDF files are allowed.".to_string(),
        )),
    }
}

pub fn validate_file_size(size_bytes: usize, limits: &RequestLimits) -> Result<(), AppError> {
    if size_bytes > limits.max_file_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File size ({:.2}MB) exceeds maximum allowed size ({:.2}MB)",
            to_megabytes(size_bytes),
            to_megabytes(limits.max_file_size_bytes)
        )));
    }
    Ok(())
}

/// Returns the trimmed job description when it is within bounds.
pub fn validate_job_description<'a>(
    job_description: &'a str,
    limits: &RequestLimits,
) -> Result<&'a str, AppError> {
    let trimmed = job_description.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty.".to_string(),
        ));
    }

    let length = trimmed.chars().count();
    if length < limits.min_job_description_chars {
        return Err(AppError::Validation(format!(
            "Job description is too short. Minimum {} characters required.",
            limits.min_job_description_chars
        )));
    }
    if length > limits.max_job_description_chars {
        return Err(AppError::Validation(format!(
            "Job description is too long. Maximum {} characters allowed.",
            limits.max_job_description_chars
        )));
    }

    Ok(trimmed)
}

pub fn validate_resume_text(resume_text: &str, limits: &RequestLimits) -> Result<(), AppError> {
    let length = resume_text.trim().chars().count();
    if length < limits.min_resume_text_chars {
        return Err(AppError::Validation(
            "Resume PDF contains insufficient text. Please ensure the PDF has extractable text content."
                .to_string(),
        ));
    }
    if length > limits.max_resume_text_chars {
        return Err(AppError::Validation(format!(
            "Resume text is too long ({length} chars). Maximum {} characters allowed.",
            limits.max_resume_text_chars
        )));
    }
    Ok(())
}

fn to_megabytes(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
