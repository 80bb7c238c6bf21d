//! Structured form input and its rendering into the opaque profile string
//! the client sends to the model.

use serde::Deserialize;

/// The student profile as submitted by the form UI. Field names mirror the
/// form sections: academic track, subjects/grades free text, interest and
/// strength checklists with free-text extras, career goals, work setting.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentProfile {
    pub academic_stream: String,
    pub subjects_and_grades: String,
    pub interests: Vec<String>,
    #[serde(default)]
    pub other_interests: Option<String>,
    pub strengths: Vec<String>,
    #[serde(default)]
    pub other_strengths: Option<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub other_career_goals: Option<String>,
    pub preferred_work_environment: String,
}

impl StudentProfile {
    /// Flattens the structured fields into the line-per-field text the
    /// prompt embeds. Downstream treats the result as an opaque string.
    pub fn assemble(&self) -> String {
        format!(
            "Academic Stream: {}\n\
             Subjects & Grades: {}\n\
             Interests: {}\n\
             Strengths: {}\n\
             Career Goals: {}\n\
             Preferred Work Environment: {}",
            self.academic_stream,
            self.subjects_and_grades,
            join_with_extra(&self.interests, self.other_interests.as_deref()),
            join_with_extra(&self.strengths, self.other_strengths.as_deref()),
            join_with_extra(&self.career_goals, self.other_career_goals.as_deref()),
            self.preferred_work_environment,
        )
    }
}

/// Joins a checklist with an optional free-text extra, skipping the extra
/// when it is blank.
fn join_with_extra(listed: &[String], extra: Option<&str>) -> String {
    let mut line = listed.join(", ");
    if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
        if line.is_empty() {
            line.push_str(extra);
        } else {
            line.push_str(", ");
            line.push_str(extra);
        }
    }
    line
}
