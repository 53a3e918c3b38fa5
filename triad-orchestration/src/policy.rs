//! Políticas de decisão — fronteira de capacidade e baselines clássicas

use triad_core::env::StateSnapshot;
use triad_core::task::Task;
use triad_predict::PredictionMap;

use crate::error::{OrchestrationError, OrchestrationResult};

/// Contexto somente leitura oferecido à política a cada decisão: o snapshot
/// de estado, o vetor agregado κ e os mapas de predição correntes
#[derive(Debug, Clone, Copy)]
pub struct ProposalContext<'a> {
    /// Tarefa sendo colocada
    pub task: &'a Task,
    /// Snapshot do estado observável
    pub state: &'a StateSnapshot,
    /// Vetor agregado de predições (tamanho fixo)
    pub kappa: &'a [f64],
    /// Latências previstas por nó
    pub latency: &'a PredictionMap,
    /// Energias previstas por nó
    pub energy: &'a PredictionMap,
    /// Riscos previstos por nó
    pub risk: &'a PredictionMap,
}

/// Capacidade opaca de decisão: dado o contexto, propõe um nó candidato
///
/// O núcleo não valida o raciocínio interno da política, apenas sua saída —
/// a proposta precisa pertencer ao conjunto de candidatos corrente, senão o
/// guardião falha com not-found. Qualquer implementação (regra fixa, tabela
/// ou modelo treinado) satisfaz a fronteira; o treinamento fica inteiramente
/// fora do núcleo.
pub trait DecisionPolicy {
    /// Propõe a identidade de um nó do conjunto de candidatos
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String>;
}

fn argmin(map: &PredictionMap) -> OrchestrationResult<String> {
    map.iter()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(nid, _)| nid.clone())
        .ok_or(OrchestrationError::EmptyCandidateSet)
}

fn argmax(map: &PredictionMap) -> OrchestrationResult<String> {
    map.iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(nid, _)| nid.clone())
        .ok_or(OrchestrationError::EmptyCandidateSet)
}

/// Baseline: menor latência prevista (earliest finish time)
#[derive(Debug, Clone, Copy, Default)]
pub struct EftPolicy;

impl DecisionPolicy for EftPolicy {
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String> {
        argmin(ctx.latency)
    }
}

/// Baseline: menor energia prevista
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastEnergyPolicy;

impl DecisionPolicy for LeastEnergyPolicy {
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String> {
        argmin(ctx.energy)
    }
}

/// Baseline: soma ponderada fixa `α·R + β·L + γ·E`
#[derive(Debug, Clone, Copy)]
pub struct FixedWeightPolicy {
    /// Peso do risco
    pub alpha: f64,
    /// Peso da latência
    pub beta: f64,
    /// Peso da energia
    pub gamma: f64,
}

impl Default for FixedWeightPolicy {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 0.5,
        }
    }
}

impl DecisionPolicy for FixedWeightPolicy {
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String> {
        let mut best: Option<(&String, f64)> = None;
        for (nid, l) in ctx.latency {
            let e = ctx.energy.get(nid).copied().unwrap_or(f64::INFINITY);
            let r = ctx.risk.get(nid).copied().unwrap_or(1.0);
            let score = self.alpha * r + self.beta * l + self.gamma * e;
            match best {
                Some((_, s)) if s <= score => {}
                _ => best = Some((nid, score)),
            }
        }
        best.map(|(nid, _)| nid.clone())
            .ok_or(OrchestrationError::EmptyCandidateSet)
    }
}

/// Baseline min-min: o nó de menor tempo de conclusão previsto
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMinPolicy;

impl DecisionPolicy for MinMinPolicy {
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String> {
        argmin(ctx.latency)
    }
}

/// Baseline max-min: o nó de maior tempo de conclusão previsto
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxMinPolicy;

impl DecisionPolicy for MaxMinPolicy {
    fn choose(&mut self, ctx: &ProposalContext<'_>) -> OrchestrationResult<String> {
        argmax(ctx.latency)
    }
}
