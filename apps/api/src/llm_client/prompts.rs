// Shared prompt fragments. Each service that calls the LLM keeps its own prompts.rs.

/// Appended to system prompts that expect prose rather than structured output.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Respond in plain prose. \
    Do NOT use markdown headings, bullet lists, or code fences. \
    Do NOT include apologies or meta commentary.";

/// Keeps narratives tied to the supplied documents.
pub const GROUNDING_INSTRUCTION: &str = "\
    Base every statement on the job description and resume provided. \
    Do NOT infer skills, employers, or credentials that are not written in the resume. \
    If the resume lacks evidence for a requirement, say so.";
