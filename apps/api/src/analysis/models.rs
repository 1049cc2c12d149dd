//! Analysis result types. Field names match the declared output schema
//! (camelCase on the wire).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInfo {
    pub role_category: String,
    pub experience_level: String,
    /// 0 – 100
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Technical, Self::Soft, Self::Domain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Soft => "Soft",
            Self::Domain => "Domain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// 0 – 100
    pub relevance: f64,
}

/// Terminal hiring recommendation.
///
/// Values outside the declared enum are kept verbatim in `Other` so the
/// result passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortlistStatus {
    Shortlisted,
    Waitlisted,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

impl ShortlistStatus {
    pub const DECLARED: [&'static str; 3] = ["Shortlisted", "Waitlisted", "Rejected"];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Shortlisted => "Shortlisted",
            Self::Waitlisted => "Waitlisted",
            Self::Rejected => "Rejected",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ShortlistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistDecision {
    /// 0 – 100 match score
    pub score: f64,
    pub status: ShortlistStatus,
    pub reasoning: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalFit {
    pub score: f64,
    pub analysis: String,
}

/// Full structured output of one analysis call.
///
/// Built wholesale from one response and never mutated afterwards.
/// `skills` and `keyword_recommendations` keep the order the service returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub candidate_name: String,
    pub classification: ClassificationInfo,
    pub skills: Vec<Skill>,
    pub shortlist: ShortlistDecision,
    pub cultural_fit: CulturalFit,
    pub recommended_profile: String,
    pub keyword_recommendations: Vec<String>,
}
