// LLM prompt constants for the re-rank stage.

/// System prompt for per-pair fit scoring — enforces JSON-only output.
pub const FIT_SYSTEM: &str =
    "You are a career advisor AI assessing how well one opportunity fits one \
    candidate. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Per-pair fit prompt. Replace `{profile_context}`, `{title}`, `{org}`,
/// `{description}` and `{requirements}` before sending.
pub const FIT_PROMPT_TEMPLATE: &str = r#"Given this user profile:
{profile_context}

And this opportunity:
Title: {title}
Organisation: {org}
Description: {description}
Requirements: {requirements}

Return ONLY valid JSON:
{
  "fit_score": number (0-100),
  "fit_explanation": string (2-3 sentences why this is a good fit),
  "gaps": string (1-2 sentences on potential gaps),
  "actions": string[] (2-3 concrete steps to improve candidacy)
}"#;
