// Prompt constants for candidate narratives.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Resume text beyond this many characters is cut before prompting.
pub const MAX_RESUME_CHARS: usize = 12_000;

/// System prompt for candidate narratives.
pub const SUMMARY_SYSTEM: &str = "You are an experienced technical recruiter. \
    Given a job description and a candidate's resume, write a short assessment \
    of how well the candidate fits the role.";

/// Narrative prompt template. Replace: {grounding_instruction}, {jd_text}, {resume_text}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Write 3-4 sentences covering the candidate's strongest matches, the most important gaps,
and an overall recommendation (advance, consider, or decline).

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}"#;
