//! Fallback — política secundária quando nenhum nó é viável

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use triad_predict::PredictionMap;

use crate::error::{GuardError, GuardResult};

/// Modo de fallback — variante fechada, rejeitada na construção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Minimiza a latência prevista (earliest finish time)
    Eft,
    /// Minimiza a energia prevista
    LeastEnergy,
    /// Mesmo score ponderado do repair, sobre todos os candidatos
    Weighted,
}

impl FromStr for FallbackMode {
    type Err = GuardError;

    fn from_str(s: &str) -> GuardResult<Self> {
        match s {
            "eft" => Ok(FallbackMode::Eft),
            "least_energy" => Ok(FallbackMode::LeastEnergy),
            "weighted" => Ok(FallbackMode::Weighted),
            other => Err(GuardError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuração do fallback
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Modo de seleção
    pub mode: FallbackMode,
    /// Peso do risco (modo weighted)
    pub alpha: f64,
    /// Peso da latência (modo weighted)
    pub beta: f64,
    /// Peso da energia (modo weighted)
    pub gamma: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            mode: FallbackMode::Eft,
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
        }
    }
}

// Empates, inclusive com todas as chaves infinitas, ficam com o primeiro
// candidato — o fallback nunca deixa de produzir um nó com lista não-vazia
fn argmin_by<F: Fn(&str) -> f64>(node_ids: &[String], key: F) -> GuardResult<String> {
    node_ids
        .iter()
        .min_by(|a, b| key(a.as_str()).total_cmp(&key(b.as_str())))
        .cloned()
        .ok_or(GuardError::NoCandidates)
}

/// Seleciona um nó entre TODOS os candidatos, sem filtro de viabilidade
///
/// Invocado apenas quando o conjunto viável é vazio; nunca deixa de
/// produzir um nó enquanto houver ao menos um candidato. Falha com lista
/// vazia — isso sinaliza violação de invariante de quem chamou (nenhum nó
/// registrado), não uma condição esperada de runtime.
pub fn fallback_action(
    cfg: &FallbackConfig,
    node_ids: &[String],
    latency: &PredictionMap,
    energy: &PredictionMap,
    risk: &PredictionMap,
) -> GuardResult<String> {
    if node_ids.is_empty() {
        return Err(GuardError::NoCandidates);
    }
    let inf = f64::INFINITY;
    match cfg.mode {
        FallbackMode::Eft => argmin_by(node_ids, |nid| latency.get(nid).copied().unwrap_or(inf)),
        FallbackMode::LeastEnergy => {
            argmin_by(node_ids, |nid| energy.get(nid).copied().unwrap_or(inf))
        }
        FallbackMode::Weighted => argmin_by(node_ids, |nid| {
            let l = latency.get(nid).copied().unwrap_or(inf);
            let e = energy.get(nid).copied().unwrap_or(inf);
            let r = risk.get(nid).copied().unwrap_or(1.0);
            cfg.alpha * r + cfg.beta * l + cfg.gamma * e
        }),
    }
}
