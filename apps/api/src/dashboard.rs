//! Dashboard view model: a pure function of an `AnalysisResult`.
//!
//! The browser front-end paints these structures directly: no scoring or
//! sorting happens here, only selection, ordering and style mapping.

use serde::Serialize;

use crate::analysis::models::{AnalysisResult, ShortlistStatus, SkillCategory};

/// Only the leading skills are plotted on the radar.
pub const RADAR_SKILL_LIMIT: usize = 6;
/// Every score on the dashboard is out of 100.
pub const SCORE_MAX: f64 = 100.0;

pub const ROLE_MATCH_COLOR: &str = "#4f46e5";
pub const CULTURE_COLOR: &str = "#0ea5e9";
pub const EXPERIENCE_COLOR: &str = "#8b5cf6";

// ────────────────────────────────────────────────────────────────────────────
// View types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
    Neutral,
}

/// Three-tier emphasis for skill chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    /// relevance > 80
    Emphasized,
    /// 50 < relevance ≤ 80
    Mid,
    /// relevance ≤ 50
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Purple,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub candidate_name: String,
    pub status: String,
    pub badge: BadgeColor,
    pub role_category: String,
    pub experience_level: String,
    pub ideal_profile: String,
    pub match_score: f64,
    pub match_score_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub subject: String,
    pub value: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitMetric {
    pub name: &'static str,
    pub score: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillChip {
    pub name: String,
    pub category: SkillCategory,
    /// First letter of the category, shown as a small tag.
    pub category_tag: String,
    pub category_color: CategoryColor,
    pub tier: SkillTier,
    pub width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionAnalysis {
    pub reasoning: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalFitBar {
    pub analysis: String,
    pub score: f64,
    pub width_percent: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub header: Header,
    pub skill_radar: Vec<RadarPoint>,
    pub fit_metrics: Vec<FitMetric>,
    pub keyword_chips: Vec<String>,
    pub decision: DecisionAnalysis,
    pub skill_chips: Vec<SkillChip>,
    pub cultural_fit: CulturalFitBar,
}

// ────────────────────────────────────────────────────────────────────────────
// Derivations
// ────────────────────────────────────────────────────────────────────────────

impl DashboardView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            header: Header {
                candidate_name: result.candidate_name.clone(),
                status: result.shortlist.status.to_string(),
                badge: status_badge(&result.shortlist.status),
                role_category: result.classification.role_category.clone(),
                experience_level: result.classification.experience_level.clone(),
                ideal_profile: result.recommended_profile.clone(),
                match_score: result.shortlist.score,
                match_score_max: SCORE_MAX,
            },
            skill_radar: skill_radar(result),
            fit_metrics: fit_metrics(result),
            keyword_chips: result.keyword_recommendations.clone(),
            decision: DecisionAnalysis {
                reasoning: result.shortlist.reasoning.clone(),
                strengths: result.shortlist.pros.clone(),
                concerns: result.shortlist.cons.clone(),
            },
            skill_chips: skill_chips(result),
            cultural_fit: cultural_fit_bar(result),
        }
    }
}

/// First `RADAR_SKILL_LIMIT` skills, in the order received.
pub fn skill_radar(result: &AnalysisResult) -> Vec<RadarPoint> {
    result
        .skills
        .iter()
        .take(RADAR_SKILL_LIMIT)
        .map(|s| RadarPoint {
            subject: s.name.clone(),
            value: s.relevance,
            max: SCORE_MAX,
        })
        .collect()
}

/// Role Match, Culture, Experience: always three bars in this order.
pub fn fit_metrics(result: &AnalysisResult) -> Vec<FitMetric> {
    vec![
        FitMetric {
            name: "Role Match",
            score: result.shortlist.score,
            color: ROLE_MATCH_COLOR,
        },
        FitMetric {
            name: "Culture",
            score: result.cultural_fit.score,
            color: CULTURE_COLOR,
        },
        FitMetric {
            name: "Experience",
            score: result.classification.confidence,
            color: EXPERIENCE_COLOR,
        },
    ]
}

pub fn status_badge(status: &ShortlistStatus) -> BadgeColor {
    match status {
        ShortlistStatus::Shortlisted => BadgeColor::Green,
        ShortlistStatus::Waitlisted => BadgeColor::Yellow,
        ShortlistStatus::Rejected => BadgeColor::Red,
        ShortlistStatus::Other(_) => BadgeColor::Neutral,
    }
}

pub fn skill_tier(relevance: f64) -> SkillTier {
    if relevance > 80.0 {
        SkillTier::Emphasized
    } else if relevance > 50.0 {
        SkillTier::Mid
    } else {
        SkillTier::Muted
    }
}

pub fn category_color(category: SkillCategory) -> CategoryColor {
    match category {
        SkillCategory::Technical => CategoryColor::Blue,
        SkillCategory::Soft => CategoryColor::Purple,
        SkillCategory::Domain => CategoryColor::Gray,
    }
}

fn skill_chips(result: &AnalysisResult) -> Vec<SkillChip> {
    result
        .skills
        .iter()
        .map(|s| SkillChip {
            name: s.name.clone(),
            category: s.category,
            category_tag: s.category.as_str().chars().take(1).collect(),
            category_color: category_color(s.category),
            tier: skill_tier(s.relevance),
            width_percent: s.relevance,
        })
        .collect()
}

fn cultural_fit_bar(result: &AnalysisResult) -> CulturalFitBar {
    let score = result.cultural_fit.score;
    CulturalFitBar {
        analysis: result.cultural_fit.analysis.clone(),
        score,
        width_percent: score,
        label: format!("{score}%"),
    }
}
