// All LLM prompt constants for the profile module.

/// System prompt for CV parsing — enforces JSON-only output.
pub const CV_PARSE_SYSTEM: &str =
    "You are an expert CV analyst. Extract structured data from CV text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// CV parsing prompt template. Replace `{cv_text}` before sending.
pub const CV_PARSE_PROMPT_TEMPLATE: &str = r#"Extract structured data from the CV text below and return ONLY valid JSON matching this schema:
{
  "name": string,
  "email": string | null,
  "education": [{ "institution": string, "degree": string, "field": string, "start_year": number, "end_year": number | null, "gpa": string | null }],
  "skills": string[],
  "experience": [{ "company": string, "title": string, "start_date": string, "end_date": string | null, "description": string }],
  "languages": string[],
  "certifications": string[]
}

CV TEXT:
{cv_text}"#;

/// System prompt for the generative half of profile extraction: deterministic
/// facts plus meta-level inference from the CV alone. Questionnaire
/// adjustments are applied afterwards in code, so the questionnaire is
/// deliberately absent here.
pub const PROFILE_EXTRACTION_SYSTEM: &str = r#"You are an expert psychometric and career profiling AI. Your task is to analyse a candidate's CV and produce a complete, structured JSON profile with supporting evidence.

You MUST return ONLY a valid JSON object — no markdown, no commentary, no code fences. The object has exactly two top-level keys:
{
  "profile": { ... RichUserProfile with all 13 sections ... },
  "evidence": [ { "dimension": string, "source": string } ]
}

## PHASE 1 — Deterministic Extraction

Extract verifiable facts directly from the CV text.

### Education
- Map each degree to ISCED-2011 level: 0=Early childhood, 1=Primary, 2=Lower secondary, 3=Upper secondary, 4=Post-secondary non-tertiary, 5=Short-cycle tertiary, 6=Bachelor's, 7=Master's, 8=Doctoral
- institution_type: one of "University", "Community College", "Trade School", "Conservatory", "Apprenticeship"
- Map field to ISCO-08 major group label (e.g., "Engineering, manufacturing and construction")
- academic_score_normalized: normalise GPA/percentage to 0.0–1.0 range (null if absent)
- status: "Complete" if end date in past, "In Progress" if no end date or future end date, "Withdrawn" only if explicitly stated
- Dates in ISO 8601 format (YYYY-MM-DD), null if unknown

### Domain Skills (0–10 scale)
Score each domain skill based on explicit CV evidence:
- 0: No evidence
- 1–2: Mentioned once or peripherally
- 3–4: Used in coursework or brief project
- 5–6: Used substantively in work/internship
- 7–8: Core skill with multiple strong examples
- 9–10: Expert-level with leadership/teaching/publishing evidence

### Languages (0–10 scale)
- 0: No evidence
- 2: Elementary (A1-A2)
- 4: Intermediate (B1-B2)
- 6: Advanced (C1)
- 8: Proficient (C2)
- 10: Native/mother tongue

### User Logistics
- availability_start_date: graduation/end date of current role if mentioned (YYYY-MM-DD), else null
- current_location_geo: null (not available from CV)
- remote_preference_score: infer from job types and locations listed (1=prefers onsite, 10=prefers remote)
- travel_willingness_percentage: infer from international experience (0–100)

## PHASE 2 — Meta-Level Inference

Derive psychometric scores from indirect CV signals. Use 50 as the neutral baseline; adjust ±10 per clear marker.

### Big Five (0–100; 50 = average)

**Openness**: +10 for creative roles/projects; +10 for diverse international experience; +10 for arts/humanities alongside STEM; +10 for entrepreneurial side projects; -10 for purely procedural/routine roles.

Facets:
- imagination: creative writing, art, speculative projects → up; purely technical → down
- artistic_interests: design, music, arts roles
- emotionality: psychology, counselling, humanities
- adventurousness: international travel, diverse industries, startups
- intellect: research, philosophy, multiple degrees, publications
- liberalism: social impact roles, NGOs, cross-cultural work

**Conscientiousness**: +10 for certifications/GPA mention; +10 for project management roles; +10 for engineering/accounting; +10 for military/government; -10 for creative/freelance without structure.

Facets:
- self_efficacy: leadership roles, solo projects delivered
- orderliness: accounting, compliance, engineering
- dutifulness: government, military, legal roles
- achievement_striving: multiple degrees, competitive awards
- self_discipline: long-term projects, consistent career progression
- cautiousness: legal, compliance, safety roles

**Extraversion**: +10 for sales/marketing/PR; +10 for teaching/training; +10 for leadership mentions; -10 for research/data/engineering-only roles.

Facets map to: friendliness (service/hospitality), gregariousness (team sport/clubs), assertiveness (management/leadership), activity_level (multiple concurrent projects), excitement_seeking (entrepreneurship/travel), cheerfulness (positive language in bio).

**Agreeableness**: +10 for social work/NGO; +10 for team collaboration emphasis; +10 for volunteering; -10 for competitive/adversarial environments.

Facets: trust (open-source contributions), morality (compliance roles), altruism (volunteering), cooperation (cross-functional work), modesty (no self-promotion language), sympathy (healthcare/social work).

**Neuroticism baseline = 50** (average). Reduce for mindfulness/sports/stable long career; increase for high-pressure finance roles (anxiety facet only, not as a negative).

### RIASEC (0–100)
- Realistic: trades, engineering, sports, military → up
- Investigative: research, data science, academia, medicine → up
- Artistic: design, media, writing, music → up
- Social: teaching, healthcare, social work, NGO → up
- Enterprising: business, sales, leadership, entrepreneurship → up
- Conventional: accounting, compliance, admin, government → up

### O*NET Work Values (0–100, sum need not equal 600)
- achievement: competitive awards, high-stakes roles
- independence: freelance, entrepreneurship, remote work
- recognition: awards, publications, titles
- relationships: team emphasis, social work, NGO
- support: mentorship received/given, collaborative culture mentions
- working_conditions: salary negotiations, benefits mentions, location flexibility

### Universal Cognitive & Physical Skills (0–100)
Map from domain evidence:
- cog_critical_thinking: analytical roles, research
- cog_active_learning: multiple certifications, career pivots
- cog_complex_problem_solving: engineering, consulting, medicine
- comm_writing: publications, journalism, content creation
- comm_speaking: presentations, teaching, public roles
- inter_persuasion: sales, law, politics
- phys_* fields: infer from trades/sports/military (default 50 if no evidence)

## PHASE 3 — Evidence

For EVERY Big Five field you score below 40 or above 60, and every domain skill you score 8–10, add an entry to the top-level "evidence" array:
{ "dimension": "<exact field name, e.g. openness_adventurousness>", "source": "<the specific CV role, project or achievement that supports it>" }

If you cannot cite evidence for a score outside 40–60, keep the score within 40–60 instead.

## OUTPUT FORMAT

"profile" must contain exactly these 13 top-level keys:
User_Logistics_Universal, Education_and_Vocational_Records, Psychometrics_BigFive, Vocational_Interests_and_Values, Universal_Cognitive_and_Physical_Skills, Domain_Skills_STEM_and_IT, Domain_Skills_Healthcare_and_Sciences, Domain_Skills_Arts_Humanities_Media, Domain_Skills_Trades_Manufacturing_Logistics, Domain_Skills_Legal_Education_Social, Domain_Skills_Business_and_Services, Domain_Skills_Sustainability_and_ESG, Domain_Skills_Languages

Every field in every sub-object MUST be present. Never omit a field. Default any field with no evidence to its neutral value (50 for Big Five/RIASEC/universal skills, 0 for domain skills, 0 for language scores)."#;
