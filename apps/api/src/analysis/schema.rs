//! Output schema declared to the completion service.
//!
//! Uses the service's OpenAPI-subset dialect (uppercase type names). Enum
//! values come from the model types so the two cannot drift apart.

use serde_json::{json, Value};

use crate::analysis::models::{ShortlistStatus, SkillCategory};

/// Top-level keys every response must carry.
pub const REQUIRED_KEYS: [&str; 7] = [
    "candidateName",
    "classification",
    "skills",
    "shortlist",
    "culturalFit",
    "recommendedProfile",
    "keywordRecommendations",
];

pub fn response_schema() -> Value {
    let categories: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "candidateName": {
                "type": "STRING",
                "description": "Inferred name from resume or 'Candidate'"
            },
            "classification": {
                "type": "OBJECT",
                "properties": {
                    "roleCategory": { "type": "STRING" },
                    "experienceLevel": { "type": "STRING" },
                    "confidence": { "type": "NUMBER", "description": "0-100 confidence level" }
                },
                "required": ["roleCategory", "experienceLevel", "confidence"]
            },
            "skills": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "category": { "type": "STRING", "enum": categories },
                        "relevance": { "type": "NUMBER" }
                    },
                    "required": ["name", "category", "relevance"]
                }
            },
            "shortlist": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "status": { "type": "STRING", "enum": ShortlistStatus::DECLARED },
                    "reasoning": { "type": "STRING" },
                    "pros": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "cons": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["score", "status", "reasoning", "pros", "cons"]
            },
            "culturalFit": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "analysis": { "type": "STRING" }
                },
                "required": ["score", "analysis"]
            },
            "recommendedProfile": {
                "type": "STRING",
                "description": "The ideal job profile name for this candidate based on their resume."
            },
            "keywordRecommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of missing keywords to add to reach a match score of 80."
            }
        },
        "required": REQUIRED_KEYS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(v: &Value) -> Vec<&str> {
        v["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_top_level_required_keys() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(required(&schema), REQUIRED_KEYS.to_vec());
        for key in REQUIRED_KEYS {
            assert!(schema["properties"].get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_nested_required_keys() {
        let props = &response_schema()["properties"];
        assert_eq!(
            required(&props["classification"]),
            vec!["roleCategory", "experienceLevel", "confidence"]
        );
        assert_eq!(
            required(&props["skills"]["items"]),
            vec!["name", "category", "relevance"]
        );
        assert_eq!(
            required(&props["shortlist"]),
            vec!["score", "status", "reasoning", "pros", "cons"]
        );
        assert_eq!(required(&props["culturalFit"]), vec!["score", "analysis"]);
    }

    #[test]
    fn test_enums_match_declared_values() {
        let props = &response_schema()["properties"];
        assert_eq!(
            props["skills"]["items"]["properties"]["category"]["enum"],
            json!(["Technical", "Soft", "Domain"])
        );
        assert_eq!(
            props["shortlist"]["properties"]["status"]["enum"],
            json!(["Shortlisted", "Waitlisted", "Rejected"])
        );
    }

    #[test]
    fn test_array_fields_have_string_items() {
        let props = &response_schema()["properties"];
        assert_eq!(props["keywordRecommendations"]["items"]["type"], "STRING");
        assert_eq!(props["shortlist"]["properties"]["pros"]["items"]["type"], "STRING");
        assert_eq!(props["shortlist"]["properties"]["cons"]["items"]["type"], "STRING");
    }
}
