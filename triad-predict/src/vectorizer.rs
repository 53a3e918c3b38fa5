//! Vetorizador de estado — achata o snapshot para consumidores vetoriais

use serde::{Deserialize, Serialize};
use triad_core::env::{NodeSnapshot, StateSnapshot};

use crate::error::{PredictError, PredictResult};

/// Configuração do vetorizador
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Inclui o indicador cloud/edge por nó
    pub use_node_kind: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            use_node_kind: true,
        }
    }
}

/// Achata um snapshot em vetor denso, nó a nó, e concatena o vetor kappa
/// (o resumo agregado de predições) ao final
#[derive(Debug, Clone)]
pub struct StateVectorizer {
    node_ids: Vec<String>,
    kappa_dim: usize,
    cfg: VectorizerConfig,
}

impl StateVectorizer {
    /// Cria vetorizador para uma lista fixa de nós e dimensão de kappa
    pub fn new(node_ids: Vec<String>, kappa_dim: usize, cfg: VectorizerConfig) -> Self {
        Self {
            node_ids,
            kappa_dim,
            cfg,
        }
    }

    /// Dimensão por nó (8 features + indicador opcional de classe)
    pub fn per_node_dim(&self) -> usize {
        8 + usize::from(self.cfg.use_node_kind)
    }

    /// Dimensão total do vetor de estado
    pub fn state_dim(&self) -> usize {
        self.per_node_dim() * self.node_ids.len() + self.kappa_dim
    }

    fn node_to_vec(&self, n: &NodeSnapshot, out: &mut Vec<f64>) {
        let energy_present = if n.energy_budget_j_step.is_some() {
            1.0
        } else {
            0.0
        };
        out.push(n.util);
        out.push(n.queue_work_mi);
        out.push(n.f_mi_s);
        out.push(n.capacity_mi_step);
        out.push(n.bandwidth_mbps);
        out.push(n.rtt_ms);
        out.push(n.loss);
        out.push(energy_present);
        if self.cfg.use_node_kind {
            out.push(if n.kind.is_cloud() { 1.0 } else { 0.0 });
        }
    }

    /// Vetoriza o snapshot e concatena kappa; falha se a dimensão de kappa
    /// não confere ou se um nó esperado está ausente do snapshot
    pub fn vectorize(&self, state: &StateSnapshot, kappa: &[f64]) -> PredictResult<Vec<f64>> {
        if kappa.len() != self.kappa_dim {
            return Err(PredictError::KappaDimMismatch {
                expected: self.kappa_dim,
                got: kappa.len(),
            });
        }
        let mut out = Vec::with_capacity(self.state_dim());
        for nid in &self.node_ids {
            let n = state
                .nodes
                .iter()
                .find(|n| &n.node_id == nid)
                .ok_or_else(|| PredictError::NodeNotFound(nid.clone()))?;
            self.node_to_vec(n, &mut out);
        }
        out.extend_from_slice(kappa);
        Ok(out)
    }
}
