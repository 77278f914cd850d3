//! Prompt text for the three collaborators.

use causal_core::models::CausalEdge;

pub const EXTRACTION_SYSTEM: &str = "You are a causal analyst. Extract every causal claim \
(cause and effect) stated in the text. Reply with a JSON object of the form \
{\"claims\": [{\"cause\": \"...\", \"effect\": \"...\", \"claim_type\": \"CAUSES\"}]}. \
claim_type is one of CAUSES, PREVENTS, ENABLES. Use short entity names with underscores \
instead of spaces. Reply with {\"claims\": []} when there are none.";

pub const QUESTION_SYSTEM: &str = "You are an investigator specialised in causal reasoning. \
Formulate one precise question for the user that asks for the specific information closing \
the gap between the cause and the effect. Focus on the missing step or protocol that \
connects them. Reply with the question only.";

pub const RISK_SYSTEM: &str = "You are a risk assessor. A plan skips some usual safeguards. \
Estimate the probability that following the plan causes harm, and describe the side effects. \
Reply with a JSON object {\"risk_score\": <number between 0.0 and 1.0>, \
\"side_effects\": \"...\"}.";

/// Prefix put in front of every generated question.
pub const QUESTION_PREFIX: &str = "We need help closing the knowledge gap: ";

pub fn extraction_user(text: &str) -> String {
    format!("Text to analyse: '{text}'")
}

pub fn question_user(cause: &str, effect: &str, threshold: f64) -> String {
    format!(
        "Problem: I cannot establish that '{cause}' leads to '{effect}' because the known \
         links are weaker than the trust threshold {threshold:.2}. What missing step should I ask about?"
    )
}

/// The path as `A -[0.90]-> B -[0.80]-> C`.
pub fn render_path(path: &[CausalEdge]) -> String {
    let Some(first) = path.first() else {
        return String::new();
    };
    path.iter().fold(first.source.clone(), |mut rendered, edge| {
        rendered.push_str(&format!(" -[{:.2}]-> {}", edge.weight, edge.target));
        rendered
    })
}

pub fn risk_user(path: &[CausalEdge]) -> String {
    format!("Proposed plan: {}", render_path(path))
}
