//! # 🔮 triad-predict — Estimadores Preditivos L/E/R
//!
//! Espelha as fórmulas físicas do motor de simulação (`triad-core`) como
//! funções puras sobre snapshots de candidatos, sem jamais mutar estado.
//! As predições alimentam o guardião de viabilidade e o agregador que
//! comprime o mapa de candidatos em um vetor de tamanho fixo.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateSnapshot + Task                                        │
//! │        │                                                     │
//! │        ▼                                                     │
//! │  ┌───────────────┐   mapa nó → CandidateFeatures             │
//! │  │ FeatureBuilder│──────────────┬──────────────┬──────────┐  │
//! │  └───────────────┘              │              │          │  │
//! │        ▼                        ▼              ▼          │  │
//! │  ┌──────────┐            ┌──────────┐   ┌──────────┐      │  │
//! │  │ Latency  │── L_hat ──▶│   Risk   │   │  Energy  │      │  │
//! │  └──────────┘            └──────────┘   └──────────┘      │  │
//! │        │                        │              │          │  │
//! │        └────────────┬───────────┴──────────────┘          │  │
//! │                     ▼                                     │  │
//! │          ┌─────────────────────┐                          │  │
//! │          │ PredictionAggregator│ → vetor fixo 3k (+1)     │  │
//! │          └─────────────────────┘                          │  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod aggregator;
pub mod energy;
pub mod error;
pub mod features;
pub mod latency;
pub mod risk;
pub mod vectorizer;

// Re-exports
pub use aggregator::{AggregationConfig, AggregationMode, PredictionAggregator};
pub use energy::EnergyPredictor;
pub use error::{PredictError, PredictResult};
pub use features::{CandidateFeatures, FeatureBuilder, LinkFeatures, NodeFeatures, TaskFeatures};
pub use latency::LatencyPredictor;
pub use risk::SlaRiskPredictor;
pub use vectorizer::{StateVectorizer, VectorizerConfig};

use std::collections::BTreeMap;

/// Mapa de predições nó → estimativa, com domínio de iteração estável
/// compartilhado entre L, E e R para uma mesma tarefa
pub type PredictionMap = BTreeMap<String, f64>;
