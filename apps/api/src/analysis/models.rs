use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the three analysis dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Skills,
    Experience,
    Education,
}

impl Section {
    #[cfg(test)]
    pub const ALL: [Section; 3] = [Section::Skills, Section::Experience, Section::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to a single analysis. `content` is expected to be sanitized already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub content: String,
    pub job_role: String,
}

/// Scored feedback for one section, built from one model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub summary_text: String,
    pub recommendation_text: String,
    pub score: u8, // 0 – 100
}

/// The complete analysis. `overall_score` is always derived from the section scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub skills: SectionResult,
    pub experience: SectionResult,
    pub education: SectionResult,
    pub overall_score: u8,
}

/// The only value `Analyzer::analyze` returns. No error escapes the orchestrator.
///
/// Serialized as `{"success": true, "analysis": ...}` or
/// `{"success": false, "message": ..., "cause": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success { analysis: AnalysisResult },
    Failure { message: String, cause: String },
}

impl Serialize for AnalysisOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        match self {
            AnalysisOutcome::Success { analysis } => {
                let mut s = serializer.serialize_struct("AnalysisOutcome", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("analysis", analysis)?;
                s.end()
            }
            AnalysisOutcome::Failure { message, cause } => {
                let mut s = serializer.serialize_struct("AnalysisOutcome", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("message", message)?;
                s.serialize_field("cause", cause)?;
                s.end()
            }
        }
    }
}

/// What the result store keeps in the "latest analysis" slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub job_role: String,
    pub location: String,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(score: u8) -> SectionResult {
        SectionResult {
            summary_text: "summary".to_string(),
            recommendation_text: "rec".to_string(),
            score,
        }
    }

    #[test]
    fn test_section_names_are_lowercase() {
        let names: Vec<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["skills", "experience", "education"]);
        assert_eq!(
            serde_json::to_value(Section::Experience).unwrap(),
            json!("experience")
        );
    }

    #[test]
    fn test_success_outcome_wire_shape() {
        let outcome = AnalysisOutcome::Success {
            analysis: AnalysisResult {
                skills: section(55),
                experience: section(60),
                education: section(50),
                overall_score: 56,
            },
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["analysis"]["overallScore"], json!(56));
        assert_eq!(value["analysis"]["skills"]["summaryText"], json!("summary"));
        assert_eq!(
            value["analysis"]["experience"]["recommendationText"],
            json!("rec")
        );
    }

    #[test]
    fn test_failure_outcome_wire_shape() {
        let outcome = AnalysisOutcome::Failure {
            message: "try again".to_string(),
            cause: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"success": false, "message": "try again", "cause": "boom"})
        );
    }
}
