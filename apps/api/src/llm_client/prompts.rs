// The fixed counselor prompt. Prompt construction is pure string
// substitution — no conversation state, no history, one turn per call.

/// Builds the single-turn career-counselor prompt from an opaque profile
/// string and a study-level label. Deterministic: identical inputs always
/// produce the identical prompt.
pub fn build_guidance_prompt(profile: &str, study_level: &str) -> String {
    format!(
        "As an expert career counselor for Pakistani students who have completed {study_level} or equivalent, \
         provide personalized guidance based on the following profile:\n\n\
         {profile}\n\n\
         Please suggest suitable Bachelor's degrees commonly offered in Pakistani universities, \
         potential career paths associated with those degrees within the Pakistani job market context, \
         and highlight key skills (both technical and soft) required. \
         Provide a comprehensive, encouraging, and clear response. \
         Focus on practical advice relevant to Pakistan's educational and employment landscape."
    )
}
