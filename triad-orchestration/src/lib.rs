//! # 🎛️ triad-orchestration — Laço de Dispatch e Avaliação
//!
//! Coordena o fluxo completo por tarefa: snapshot → features → predições
//! L/E/R → agregação → proposta da política → guardião → commit no motor →
//! atualização de sinais e pesos. Cada episódio possui instâncias exclusivas
//! de pool, rede, rastreador e controlador; o processamento é estritamente
//! sequencial na ordem de chegada.
//!
//! ## Fluxo por tarefa
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     OffloadDispatcher                         │
//! │                                                               │
//! │  observe_state ─▶ FeatureBuilder ─▶ L/E/R ─▶ Aggregator       │
//! │        │                                        │             │
//! │        ▼                                        ▼             │
//! │  DecisionPolicy::choose ◀── ProposalContext (estado + κ)      │
//! │        │                                                      │
//! │        ▼                                                      │
//! │  GuardPipeline::decide ─▶ accept | repair | fallback          │
//! │        │                                                      │
//! │        ▼                                                      │
//! │  EdgeCloudEnv::step ─▶ SignalTracker ─▶ MetaController        │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod dispatcher;
pub mod error;
pub mod evaluation;
pub mod policy;

// Re-exports
pub use dispatcher::{DecisionRecord, DispatcherConfig, EpisodeLog, OffloadDispatcher};
pub use error::{OrchestrationError, OrchestrationResult};
pub use evaluation::EpisodeStats;
pub use policy::{
    DecisionPolicy, EftPolicy, FixedWeightPolicy, LeastEnergyPolicy, MaxMinPolicy, MinMinPolicy,
    ProposalContext,
};
