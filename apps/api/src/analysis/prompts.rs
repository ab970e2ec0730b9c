// Prompt templates for the three analysis sections.
// Replace `{job_role}` and `{content}` before sending.

use crate::analysis::models::{AnalysisRequest, Section};

pub const SKILLS_PROMPT_TEMPLATE: &str = r#"
Analyze the skills in this CV for a {job_role} position. Include:
1. Key skills aligned with job requirements
2. Candidate's strengths
3. Critical missing skills
4. Actionable suggestions for improvement

Format the response in markdown with clear sections.

CV Content: {content}"#;

pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"
Analyze the professional experience for a {job_role} position. Include:
1. Relevance of past roles
2. Key achievements
3. Areas for improvement
4. Suggestions to better present experience

Format the response in markdown with clear sections.

CV Content: {content}"#;

pub const EDUCATION_PROMPT_TEMPLATE: &str = r#"
Analyze the education section for a {job_role} position. Include:
1. Relevance of qualifications
2. Notable achievements
3. Recommended additional certifications

Format the response in markdown with clear sections.

CV Content: {content}"#;

fn template_for(section: Section) -> &'static str {
    match section {
        Section::Skills => SKILLS_PROMPT_TEMPLATE,
        Section::Experience => EXPERIENCE_PROMPT_TEMPLATE,
        Section::Education => EDUCATION_PROMPT_TEMPLATE,
    }
}

/// Builds the prompt for one section.
///
/// `{job_role}` is substituted first so placeholder-like text inside the CV
/// content is never expanded.
pub fn build_prompt(section: Section, request: &AnalysisRequest) -> String {
    template_for(section)
        .replace("{job_role}", &request.job_role)
        .replace("{content}", &request.content)
}
