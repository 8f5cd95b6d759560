// Prompt constants for interview question generation.

/// System prompt: a hiring manager probing whether the candidate can defend their resume.
pub const QUESTION_SYSTEM: &str = "You are a hiring manager conducting a real interview.\n\
Your task is to generate interview questions that test whether the candidate truly \
understands and can defend the experience listed on their resume, in relation to the job description.\n\
\n\
Rules:\n\
- Questions must reference the candidate's experience implicitly or explicitly\n\
- Avoid generic questions\n\
- Prefer follow-up and depth-probing questions\n\
- Output must be realistic and role-specific\n\
- Return ONLY valid JSON - no markdown, no explanations";

/// Question prompt template.
/// Replace: {job_description}, {resume_context}, {question_count}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Job description:
{job_description}

Relevant resume sections:
{resume_context}

Generate {question_count} interview questions that a real interviewer would ask.

Return ONLY valid JSON (no markdown code blocks, no explanations):
[
  {
    "category": "Technical | Behavioral | Role-Specific",
    "question": "string"
  }
]"#;

/// Fills the question template. Chunks are separated by a blank line.
pub fn build_question_prompt(
    job_description: &str,
    resume_chunks: &[String],
    question_count: usize,
) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_context}", &resume_chunks.join("\n\n"))
        .replace("{question_count}", &question_count.to_string())
}
