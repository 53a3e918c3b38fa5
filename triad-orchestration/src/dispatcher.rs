//! Laço de dispatch por tarefa e registro de episódios

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use triad_core::constants::DEFAULT_OVERHEAD_MS;
use triad_core::env::{EdgeCloudEnv, StepResult};
use triad_core::task::Task;
use triad_guard::fallback::FallbackConfig;
use triad_guard::feasibility::FeasibilityConfig;
use triad_guard::pipeline::{DecisionMode, GuardPipeline};
use triad_meta::controller::{MetaConfig, MetaController, Weights};
use triad_meta::signals::{SignalConfig, SignalTracker};
use triad_predict::aggregator::{AggregationConfig, PredictionAggregator};
use triad_predict::energy::EnergyPredictor;
use triad_predict::features::FeatureBuilder;
use triad_predict::latency::LatencyPredictor;
use triad_predict::risk::SlaRiskPredictor;

use crate::error::OrchestrationResult;
use crate::evaluation::EpisodeStats;
use crate::policy::{DecisionPolicy, ProposalContext};

/// Configuração do laço de dispatch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Overhead fixo assumido pelos preditores (ms)
    pub overhead_ms: f64,
    /// Escala da margem de risco (s)
    pub tau_s: f64,
    /// Agregação de predições em κ
    pub aggregation: AggregationConfig,
    /// Cláusulas de viabilidade
    pub feasibility: FeasibilityConfig,
    /// Seleção degradada quando nada é viável
    pub fallback: FallbackConfig,
    /// Janelas dos sinais de desempenho
    pub signals: SignalConfig,
    /// Meta-controlador de pesos
    pub meta: MetaConfig,
    /// Período de reponderação (decisões); 0 desativa
    pub meta_period: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            overhead_ms: DEFAULT_OVERHEAD_MS,
            tau_s: 0.25,
            aggregation: AggregationConfig::default(),
            feasibility: FeasibilityConfig::default(),
            fallback: FallbackConfig::default(),
            signals: SignalConfig::default(),
            meta: MetaConfig::default(),
            meta_period: 10,
        }
    }
}

/// Registro imutável de uma decisão concluída
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Identidade da tarefa
    pub task_id: String,
    /// Nó final escolhido
    pub node_id: String,
    /// Caminho de decisão percorrido
    pub mode: DecisionMode,
    /// Resultado físico do commit
    pub result: StepResult,
}

/// Registro sequencial de um episódio completo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeLog {
    /// Decisões na ordem de chegada
    pub records: Vec<DecisionRecord>,
}

impl EpisodeLog {
    /// Estatísticas com a recompensa padrão `-penalidade SLA`
    pub fn stats(&self) -> EpisodeStats {
        self.stats_with(|r| -r.sla_penalty)
    }

    /// Estatísticas com função de recompensa fornecida pelo chamador
    pub fn stats_with(&self, reward_fn: impl Fn(&StepResult) -> f64) -> EpisodeStats {
        let latencies: Vec<f64> = self.records.iter().map(|r| r.result.latency_s).collect();
        let energies: Vec<f64> = self.records.iter().map(|r| r.result.energy_j).collect();
        let violations: Vec<u8> = self.records.iter().map(|r| r.result.violation).collect();
        let rewards: Vec<f64> = self.records.iter().map(|r| reward_fn(&r.result)).collect();
        crate::evaluation::summarize(&latencies, &energies, &violations, &rewards)
    }

    /// Serializa o episódio completo em JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Coordenador do fluxo por tarefa
///
/// Possui instâncias exclusivas de motor, preditores, guardião, rastreador
/// de sinais e meta-controlador; uma decisão por vez, na ordem de chegada.
#[derive(Debug)]
pub struct OffloadDispatcher {
    cfg: DispatcherConfig,
    env: EdgeCloudEnv,
    builder: FeatureBuilder,
    latency: LatencyPredictor,
    energy: EnergyPredictor,
    risk: SlaRiskPredictor,
    aggregator: PredictionAggregator,
    guard: GuardPipeline,
    tracker: SignalTracker,
    meta: MetaController,
    steps: usize,
}

impl OffloadDispatcher {
    /// Cria o dispatcher sobre um motor já montado
    pub fn new(env: EdgeCloudEnv, cfg: DispatcherConfig) -> Self {
        Self {
            cfg,
            env,
            builder: FeatureBuilder::new(),
            latency: LatencyPredictor::new(cfg.overhead_ms),
            energy: EnergyPredictor::new(),
            risk: SlaRiskPredictor::new(cfg.tau_s),
            aggregator: PredictionAggregator::new(cfg.aggregation),
            guard: GuardPipeline::new(cfg.feasibility, cfg.fallback),
            tracker: SignalTracker::new(cfg.signals),
            meta: MetaController::new(cfg.meta),
            steps: 0,
        }
    }

    /// Motor subjacente (somente leitura)
    pub fn env(&self) -> &EdgeCloudEnv {
        &self.env
    }

    /// Pesos correntes (α, β, γ)
    pub fn weights(&self) -> Weights {
        self.meta.weights()
    }

    /// Dimensão do vetor κ entregue à política
    pub fn kappa_dim(&self) -> usize {
        self.aggregator.output_dim()
    }

    /// Restaura filas, sinais e pesos ao estado inicial
    pub fn reset(&mut self) -> OrchestrationResult<()> {
        self.env.reset()?;
        self.tracker = SignalTracker::new(self.cfg.signals);
        self.meta = MetaController::new(self.cfg.meta);
        self.steps = 0;
        Ok(())
    }

    /// Executa o fluxo completo para uma tarefa
    pub fn dispatch(
        &mut self,
        task: &Task,
        policy: &mut dyn DecisionPolicy,
    ) -> OrchestrationResult<DecisionRecord> {
        let state = self.env.observe_state()?;
        let candidates = self.builder.build_candidates(&state, task);

        let latency = self.latency.predict(&candidates);
        let energy = self.energy.predict(&candidates);
        let risk = self.risk.predict_from_latency(&candidates, &latency);

        let w = self.meta.weights();
        let kappa = self
            .aggregator
            .aggregate(&latency, &energy, &risk, w.alpha, w.beta, w.gamma);

        let ctx = ProposalContext {
            task,
            state: &state,
            kappa: &kappa,
            latency: &latency,
            energy: &energy,
            risk: &risk,
        };
        let proposed = policy.choose(&ctx)?;

        let (node_id, mode) = self.guard.decide(
            task, &proposed, &candidates, &latency, &energy, &risk, w.alpha, w.beta, w.gamma,
        )?;
        match mode {
            DecisionMode::Fallback => {
                warn!(task_id = %task.id, proposed = %proposed, chosen = %node_id,
                    "no feasible node, degraded selection");
            }
            _ => {
                debug!(task_id = %task.id, proposed = %proposed, chosen = %node_id,
                    mode = %mode, "decision committed");
            }
        }

        let (next_state, result) = self.env.step(task, &node_id)?;
        self.tracker
            .update_from_step(result.latency_s, result.energy_j, result.violation);
        self.tracker.update_from_state(&next_state);

        self.steps += 1;
        if self.cfg.meta_period > 0 && self.steps % self.cfg.meta_period == 0 {
            let phi = self.tracker.phi();
            let w = self.meta.update(&phi);
            debug!(
                alpha = w.alpha,
                beta = w.beta,
                gamma = w.gamma,
                "weights reponderated"
            );
        }

        Ok(DecisionRecord {
            task_id: task.id.clone(),
            node_id,
            mode,
            result,
        })
    }

    /// Processa um episódio inteiro a partir de chegadas ordenadas
    ///
    /// Restaura o estado antes de começar; os instantes de chegada definem
    /// apenas a ordem, o motor avança em ticks fixos por decisão.
    pub fn run_episode(
        &mut self,
        arrivals: &[(f64, Task)],
        policy: &mut dyn DecisionPolicy,
    ) -> OrchestrationResult<EpisodeLog> {
        self.reset()?;
        let mut log = EpisodeLog::default();
        for (_, task) in arrivals {
            log.records.push(self.dispatch(task, policy)?);
        }
        Ok(log)
    }
}
