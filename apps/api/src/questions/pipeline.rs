//! Question pipeline: orchestrates one generation request.
//!
//! Flow: chunk_text → select_relevant_chunks → build prompt → LLM →
//!       extract_questions.
//!
//! Every step is stateless; nothing here outlives the request.

use anyhow::anyhow;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::matching::selector::select_relevant_chunks;
use crate::models::question::QuestionRecord;
use crate::questions::extractor::extract_questions;
use crate::questions::prompts::{build_question_prompt, QUESTION_SYSTEM};
use crate::resume::chunker::chunk_text;

/// Number of questions the prompt asks for.
pub const QUESTION_COUNT: usize = 5;
/// Chunks sent when relevance selection comes back empty.
const FALLBACK_CHUNKS: usize = 3;
/// How much of an unparseable reply to log.
const REPLY_PREVIEW_CHARS: usize = 1000;
/// Returned to the client when the reply holds no question list.
const UNPARSEABLE_REPLY: &str = "Failed to extract questions from LLM response. \
     The response may not be in the expected JSON format.";

/// Runs chunking, selection, the LLM call and reply extraction for one request.
///
/// An empty question list is treated as a failed generation.
pub async fn generate_questions(
    resume_text: &str,
    job_description: &str,
    model: &dyn ChatModel,
    top_k: usize,
) -> Result<Vec<QuestionRecord>, AppError> {
    let chunks = chunk_text(resume_text);
    if chunks.is_empty() {
        return Err(AppError::Internal(anyhow!("Failed to chunk resume text")));
    }

    let mut selected = select_relevant_chunks(&chunks, job_description, top_k);
    if selected.is_empty() {
        warn!("No chunks selected, using first few chunks");
        selected = chunks.iter().take(FALLBACK_CHUNKS).cloned().collect();
    }
    info!(
        "Selected {} of {} chunks for the prompt",
        selected.len(),
        chunks.len()
    );

    let prompt = build_question_prompt(job_description, &selected, QUESTION_COUNT);

    info!("Calling LLM to generate questions...");
    let reply = model.complete(QUESTION_SYSTEM, &prompt).await?;
    info!("Received LLM response (length: {} chars)", reply.chars().count());

    let questions = extract_questions(&reply);
    if questions.is_empty() {
        warn!(
            "Failed to extract questions. Raw response: {}",
            preview(&reply, REPLY_PREVIEW_CHARS)
        );
        return Err(AppError::Generation(UNPARSEABLE_REPLY.to_string()));
    }

    let off_contract = questions.iter().filter(|q| !q.is_well_formed()).count();
    if off_contract > 0 {
        warn!(
            "{off_contract} of {} questions do not match the category/question format",
            questions.len()
        );
    }

    info!("Successfully generated {} questions", questions.len());
    Ok(questions)
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
