//! Turning model replies into claims and risk assessments.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use causal_core::models::{Claim, RiskAssessment};

static CODE_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*```[A-Za-z]*\s*\n?(.*?)\s*```\s*$").ok());

/// Keys under which an object reply may carry the claim array.
const CLAIM_KEYS: [&str; 2] = ["claims", "causal_claims"];

/// Body of a fenced code block, or the trimmed input when there is no fence.
pub fn strip_code_fence(raw: &str) -> &str {
    CODE_FENCE
        .as_ref()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| raw.trim(), |body| body.as_str().trim())
}

/// Claims from an extraction reply.
///
/// Accepts a top-level array, an object holding the array under `claims` or
/// `causal_claims`, or a single claim object. Items without a non-blank
/// `cause` and `effect` are skipped.
pub fn parse_claims(raw: &str) -> Result<Vec<Claim>, String> {
    let value: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| format!("invalid JSON: {e}"))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            match CLAIM_KEYS.iter().find_map(|key| map.remove(*key)) {
                Some(Value::Array(items)) => items,
                Some(other) => return Err(format!("claims field is not an array: {other}")),
                None if map.contains_key("cause") => vec![Value::Object(map)],
                None => Vec::new(),
            }
        }
        other => return Err(format!("expected an array or object, got {other}")),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Claim>(item) {
            Ok(claim) => normalize(claim),
            Err(e) => {
                debug!(error = %e, "skipping malformed claim item");
                None
            }
        })
        .collect())
}

fn normalize(mut claim: Claim) -> Option<Claim> {
    claim.cause = claim.cause.trim().to_string();
    claim.effect = claim.effect.trim().to_string();
    (!claim.cause.is_empty() && !claim.effect.is_empty()).then_some(claim)
}

#[derive(Deserialize)]
struct RiskReply {
    risk_score: f64,
    #[serde(default)]
    side_effects: SideEffects,
}

/// Models return the narrative as a string or as a list of strings.
#[derive(Deserialize, Default)]
#[serde(untagged)]
enum SideEffects {
    Text(String),
    List(Vec<String>),
    #[default]
    Missing,
}

impl SideEffects {
    fn into_narrative(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items.join("; "),
            Self::Missing => String::new(),
        }
    }
}

/// Risk assessment from a reply of the form `{"risk_score": .., "side_effects": ..}`.
///
/// The score is returned as given; range checks belong to the caller.
pub fn parse_risk(raw: &str) -> Result<RiskAssessment, String> {
    let reply: RiskReply =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| format!("invalid risk reply: {e}"))?;
    Ok(RiskAssessment::new(
        reply.risk_score,
        reply.side_effects.into_narrative(),
    ))
}

#[cfg(test)]
mod tests {
    use causal_core::models::ClaimType;

    use super::*;

    #[test]
    fn fence_is_unwrapped() {
        assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fence("  [3] "), "[3]");
    }

    #[test]
    fn top_level_array() {
        let claims =
            parse_claims(r#"[{"cause": "Memory_Leak", "effect": "High_CPU"}]"#).unwrap();
        assert_eq!(claims, vec![Claim::new("Memory_Leak", "High_CPU")]);
        assert_eq!(claims[0].claim_type, ClaimType::Causes);
    }

    #[test]
    fn wrapped_under_either_key() {
        for key in ["claims", "causal_claims"] {
            let raw = format!(
                r#"{{"{key}": [{{"cause": "A", "effect": "B", "claim_type": "prevents"}}]}}"#
            );
            let claims = parse_claims(&raw).unwrap();
            assert_eq!(claims.len(), 1);
            assert_eq!(claims[0].claim_type, ClaimType::Prevents);
        }
    }

    #[test]
    fn single_claim_object() {
        let claims = parse_claims(r#"{"cause": "A", "effect": "B"}"#).unwrap();
        assert_eq!(claims, vec![Claim::new("A", "B")]);
    }

    #[test]
    fn object_without_claims_is_empty() {
        assert!(parse_claims(r#"{"note": "nothing causal here"}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_items_are_skipped_in_order() {
        let raw = r#"```json
        {"claims": [
            {"cause": "A", "effect": "B"},
            {"cause": "C"},
            {"cause": "  ", "effect": "D"},
            {"cause": " E ", "effect": "F"}
        ]}
        ```"#;
        let claims = parse_claims(raw).unwrap();
        assert_eq!(claims, vec![Claim::new("A", "B"), Claim::new("E", "F")]);
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(parse_claims("A causes B").is_err());
        assert!(parse_claims("42").is_err());
        assert!(parse_claims(r#"{"claims": "A causes B"}"#).is_err());
    }

    #[test]
    fn risk_reply_forms() {
        let risk = parse_risk(r#"{"risk_score": 0.3, "side_effects": "skips review"}"#).unwrap();
        assert_eq!(risk, RiskAssessment::new(0.3, "skips review"));

        let risk = parse_risk("```json\n{\"risk_score\": 0.8, \"side_effects\": [\"a\", \"b\"]}\n```")
            .unwrap();
        assert_eq!(risk.side_effects, "a; b");

        let risk = parse_risk(r#"{"risk_score": 1.4}"#).unwrap();
        assert_eq!(risk.risk_score, 1.4);
        assert!(risk.side_effects.is_empty());
    }

    #[test]
    fn risk_without_score_is_an_error() {
        assert!(parse_risk(r#"{"side_effects": "unknown"}"#).is_err());
        assert!(parse_risk("high").is_err());
    }
}
