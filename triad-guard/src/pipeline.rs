//! Máquina de decisão — PROPOSE → ACCEPT | REPAIR | FALLBACK

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use triad_core::task::Task;
use triad_predict::PredictionMap;
use triad_predict::features::CandidateFeatures;

use crate::error::{GuardError, GuardResult};
use crate::fallback::{FallbackConfig, fallback_action};
use crate::feasibility::{FeasibilityConfig, feasible_set, is_feasible};
use crate::repair::repair_action;

/// Caminho tomado pela decisão
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMode {
    /// Proposta aceita como está
    Accept,
    /// Re-seleção dentro do conjunto viável
    Repair,
    /// Política secundária sobre todos os candidatos
    Fallback,
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionMode::Accept => write!(f, "accept"),
            DecisionMode::Repair => write!(f, "repair"),
            DecisionMode::Fallback => write!(f, "fallback"),
        }
    }
}

/// Guardião completo: valida a proposta e garante uma decisão viável
///
/// Cada tarefa recebe exatamente uma decisão por chegada; não há laço de
/// retry. Com conjunto viável não-vazio o repair sempre sucede; o fallback
/// só é alcançado com conjunto viável vazio e nunca falha enquanto houver
/// candidato.
#[derive(Debug, Clone, Copy)]
pub struct GuardPipeline {
    feasibility: FeasibilityConfig,
    fallback: FallbackConfig,
}

impl GuardPipeline {
    /// Cria guardião com as configurações dadas
    pub fn new(feasibility: FeasibilityConfig, fallback: FallbackConfig) -> Self {
        Self {
            feasibility,
            fallback,
        }
    }

    /// Configuração de viabilidade ativa
    pub fn feasibility(&self) -> &FeasibilityConfig {
        &self.feasibility
    }

    /// Decide o nó final para a proposta dada
    ///
    /// Falha com not-found se a proposta não pertence ao conjunto de
    /// candidatos corrente, e com invalid-input se o conjunto é vazio.
    #[allow(clippy::too_many_arguments)]
    pub fn decide(
        &self,
        task: &Task,
        proposed: &str,
        candidates: &BTreeMap<String, CandidateFeatures>,
        latency: &PredictionMap,
        energy: &PredictionMap,
        risk: &PredictionMap,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> GuardResult<(String, DecisionMode)> {
        if candidates.is_empty() {
            return Err(GuardError::NoCandidates);
        }
        let x = candidates
            .get(proposed)
            .ok_or_else(|| GuardError::UnknownNode(proposed.to_string()))?;

        let l = latency.get(proposed).copied().unwrap_or(f64::INFINITY);
        let e = energy.get(proposed).copied().unwrap_or(f64::INFINITY);
        let r = risk.get(proposed).copied().unwrap_or(1.0);
        if is_feasible(
            &self.feasibility,
            task,
            x.node.capacity_mi_step,
            x.node.energy_budget(),
            l,
            e,
            r,
        ) {
            return Ok((proposed.to_string(), DecisionMode::Accept));
        }

        let nf = feasible_set(&self.feasibility, task, candidates, latency, energy, risk);
        if !nf.is_empty() {
            let chosen = repair_action(&nf, latency, energy, risk, alpha, beta, gamma)?;
            return Ok((chosen, DecisionMode::Repair));
        }

        let all_ids: Vec<String> = latency.keys().cloned().collect();
        let chosen = fallback_action(&self.fallback, &all_ids, latency, energy, risk)?;
        Ok((chosen, DecisionMode::Fallback))
    }
}
