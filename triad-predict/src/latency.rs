//! Preditor de latência — espelha as fórmulas do motor sem mutar estado

use serde::{Deserialize, Serialize};
use triad_core::network::transfer_time_s;

use crate::PredictionMap;
use crate::features::CandidateFeatures;

/// Estimador de latência (execução + fila + comunicação)
///
/// Taxa de processamento não-positiva satura em infinito em vez de falhar:
/// a viabilidade e o repair rejeitam o nó naturalmente.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyPredictor {
    /// Overhead fixo assumido para o enlace (ms)
    pub overhead_ms: f64,
}

impl Default for LatencyPredictor {
    fn default() -> Self {
        Self {
            overhead_ms: triad_core::constants::DEFAULT_OVERHEAD_MS,
        }
    }
}

impl LatencyPredictor {
    /// Cria preditor com overhead configurado
    pub fn new(overhead_ms: f64) -> Self {
        Self { overhead_ms }
    }

    fn t_exec(c_mi: f64, f_mi_s: f64) -> f64 {
        if f_mi_s <= 0.0 {
            f64::INFINITY
        } else {
            c_mi / f_mi_s
        }
    }

    fn t_queue(queue_work_mi: f64, f_mi_s: f64) -> f64 {
        if f_mi_s <= 0.0 {
            f64::INFINITY
        } else {
            queue_work_mi.max(0.0) / f_mi_s
        }
    }

    /// Latência estimada para um candidato (s)
    pub fn predict_one(&self, x: &CandidateFeatures) -> f64 {
        let t_exec = Self::t_exec(x.task.c_mi, x.node.f_mi_s);
        let t_queue = Self::t_queue(x.node.queue_work_mi, x.node.f_mi_s);
        let t_comm = transfer_time_s(
            x.task.s_mb,
            x.link.bandwidth_mbps,
            x.link.rtt_ms,
            x.link.loss,
            self.overhead_ms,
        );
        t_exec + t_queue + t_comm
    }

    /// Latência estimada para todos os candidatos
    pub fn predict(
        &self,
        candidates: &std::collections::BTreeMap<String, CandidateFeatures>,
    ) -> PredictionMap {
        candidates
            .iter()
            .map(|(nid, x)| (nid.clone(), self.predict_one(x)))
            .collect()
    }
}
