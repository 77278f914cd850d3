//! Command execution. Each command returns the text to print.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use causal_core::models::{DecisionOutcome, InnovationOutcome, VerifiedClaim};
use causal_core::traits::ICausalGraphStore;
use causal_core::CausalMemoryConfig;
use causal_learning::WeightUpdateEngine;
use causal_llm::{ChatClient, LlmClaimExtractor, LlmQuestionGenerator, LlmRiskAssessor};
use causal_policy::{Collaborators, DecisionPolicy};
use causal_storage::SqliteGraph;

use crate::cli::Commands;

pub fn execute(command: Commands, config: &CausalMemoryConfig, json: bool) -> Result<String> {
    debug!(db_path = ?config.storage.db_path, "opening causal memory");
    let store = Arc::new(
        SqliteGraph::from_config(&config.storage).context("failed to open the causal memory")?,
    );

    match command {
        Commands::Link {
            cause,
            cause_type,
            effect,
            effect_type,
            weight,
        } => link(
            store.as_ref(),
            &cause,
            &cause_type,
            &effect,
            &effect_type,
            weight,
            json,
        ),
        Commands::Confidence => confidence(store.as_ref(), config, json),
        Commands::Process {
            text,
            feedback,
            threshold,
        } => {
            let policy = DecisionPolicy::new(store, llm_collaborators(config)?, config);
            let outcome = policy.process_with_threshold(&text, feedback, threshold)?;
            render(&outcome, json, render_decision)
        }
        Commands::Verify { text } => {
            let policy = DecisionPolicy::new(store, llm_collaborators(config)?, config);
            let verified = policy.verify_claims(&text)?;
            render(&verified, json, |claims| render_verified(claims))
        }
        Commands::Innovate {
            start,
            target,
            forbid,
        } => {
            let mut config = config.clone();
            config.policy.blocking_constraints.extend(forbid);
            let policy = DecisionPolicy::new(store, llm_collaborators(&config)?, &config);
            let outcome = policy.attempt_innovation(&start, &target)?;
            render(&outcome, json, |o| render_innovation(o, &start, &target))
        }
    }
}

fn llm_collaborators(config: &CausalMemoryConfig) -> Result<Collaborators> {
    let client = Arc::new(
        ChatClient::from_config(&config.llm).context("chat-completion client unavailable")?,
    );
    Ok(Collaborators::new(
        Arc::new(LlmClaimExtractor::new(client.clone())),
        Arc::new(LlmQuestionGenerator::new(client.clone())),
        Arc::new(LlmRiskAssessor::new(client)),
    ))
}

fn render<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

pub fn link(
    store: &dyn ICausalGraphStore,
    cause: &str,
    cause_type: &str,
    effect: &str,
    effect_type: &str,
    weight: f64,
    json: bool,
) -> Result<String> {
    store.add_causal_link(cause, Some(cause_type), effect, Some(effect_type), weight)?;
    let edges = store.edge_count()?;
    if json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "cause": cause,
            "effect": effect,
            "weight": weight,
            "edge_count": edges,
        }))?);
    }
    Ok(format!(
        "linked {cause} ({cause_type}) -[{weight:.4}]-> {effect} ({effect_type}); {edges} edges"
    ))
}

pub fn confidence(
    store: &dyn ICausalGraphStore,
    config: &CausalMemoryConfig,
    json: bool,
) -> Result<String> {
    let level = WeightUpdateEngine::new(config.learning.clone()).confidence(store)?;
    if json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "system_confidence": level,
        }))?);
    }
    Ok(format!("system confidence: {level:.4}"))
}

pub fn render_decision(outcome: &DecisionOutcome) -> String {
    match outcome {
        DecisionOutcome::Learned {
            claim,
            path,
            path_weight,
            updated_edges,
            new_confidence,
        } => format!(
            "verified: {claim}\npath: {path} (weight {path_weight:.4})\nupdated edges: {}\nsystem confidence: {new_confidence:.4}",
            updated_edges.len()
        ),
        DecisionOutcome::Questioned {
            claim,
            question,
            new_confidence,
        } => format!(
            "knowledge gap: {claim}\n{question}\nsystem confidence: {new_confidence:.4}"
        ),
        DecisionOutcome::NoClaims => "no causal claims found".to_string(),
    }
}

pub fn render_verified(claims: &[VerifiedClaim]) -> String {
    if claims.is_empty() {
        return "no causal claims found".to_string();
    }
    claims
        .iter()
        .map(|verified| match verified.path_weight {
            Some(weight) => format!("[verified {weight:.4}] {}", verified.claim),
            None => format!("[unverified] {}", verified.claim),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_innovation(outcome: &InnovationOutcome, start: &str, target: &str) -> String {
    match outcome {
        InnovationOutcome::Found { path, risk } => format!(
            "route: {path}\nrisk {:.2}: {}",
            risk.risk_score, risk.side_effects
        ),
        InnovationOutcome::Rejected { message, .. } => message.clone(),
        InnovationOutcome::Failed => {
            format!("no route from {start} to {target} avoids the blocking constraints")
        }
    }
}
