// All LLM prompt constants for the cover letter pipeline.

/// System prompt for letter generation — plain text out, no invention.
pub const COVER_LETTER_SYSTEM: &str =
    "You are an expert career coach writing tailored, professional cover letters. \
    Write plain text only. \
    Do NOT use markdown formatting. \
    Do NOT invent experience that is not present in the resume.";

/// Letter generation prompt template.
/// Replace `{resume_text}` and `{job_text}` before sending.
///
/// The forbidden stock openings are described by category, never quoted, so
/// the composed prompt itself stays free of them.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"RESUME:
{resume_text}

JOB POSTING:
{job_text}

Write the best cover letter you can for this candidate and this job.

Rules:
- Open with a compelling first sentence about the subject matter of the role, showing current knowledge of the field. The opening must NOT be about the candidate.
- Never open with a stock phrase expressing generic enthusiasm, and avoid cliche phrasing throughout.
- Use concrete, personal details from both the resume and the job posting.
- If a contact name appears in the job posting, address the letter to that person; otherwise use the salutation "Dear Hiring Team".
"#;
