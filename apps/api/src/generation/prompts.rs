// Prompt constants for resume generation.

/// System prompt. Enforces JSON-only output and forbids invention.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer. \
    Turn the candidate's notes into a concise, professional, single-page resume. \
    Use only facts present in the notes; never invent employers, dates, degrees or metrics. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Generation prompt template. Replace `{career_text}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Write a resume from the candidate notes below.

Return a JSON object with this EXACT schema (omit nothing, use "" or [] when unknown):
{
  "name": "Full Name",
  "title": "Target job title",
  "contact": {"phone": "", "email": "", "address": "", "linkedin": ""},
  "summary": "Two to three sentence professional summary",
  "experience": [
    {"role": "", "company": "", "duration": "2019 - Present", "description": ["Achievement-oriented bullet"]}
  ],
  "education": [{"degree": "", "school": "", "year": ""}],
  "certifications": [{"name": "", "year": ""}],
  "achievements": ["Award or notable result"],
  "volunteer": [{"role": "", "org": "", "duration": "", "description": [""]}],
  "skills": ["Technical skill"],
  "softSkills": ["Interpersonal skill"],
  "languages": ["English (native)"]
}

Rules:
1. List experience most recent first.
2. Start every description bullet with an action verb; keep bullets under 200 characters.
3. Prefer quantified outcomes that appear in the notes. Do NOT invent numbers.
4. Skills, softSkills and languages must not repeat entries.
5. Write every value as a JSON string; years too.

CANDIDATE NOTES:
{career_text}"#;
