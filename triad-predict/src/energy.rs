//! Preditor de energia — perfis de potência assumidos por classe de nó

use serde::{Deserialize, Serialize};
use triad_core::network::transfer_time_s;

use crate::PredictionMap;
use crate::features::CandidateFeatures;

/// Estimador de energia por tarefa
///
/// Seleciona as constantes de potência pela classe do nó (edge vs cloud) em
/// vez de lê-las do nó verdadeiro, permitindo avaliar a predição com perfis
/// assumidos distintos do ground truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyPredictor {
    /// Potência idle assumida para edge (W)
    pub power_idle_edge_w: f64,
    /// Potência dinâmica assumida para edge (W)
    pub power_dyn_edge_w: f64,
    /// Potência idle assumida para cloud (W)
    pub power_idle_cloud_w: f64,
    /// Potência dinâmica assumida para cloud (W)
    pub power_dyn_cloud_w: f64,
    /// Potência da interface de rede (W)
    pub nic_power_w: f64,
    /// Overhead fixo assumido para o enlace (ms)
    pub comm_overhead_ms: f64,
}

impl Default for EnergyPredictor {
    fn default() -> Self {
        Self {
            power_idle_edge_w: 4.0,
            power_dyn_edge_w: 12.0,
            power_idle_cloud_w: 20.0,
            power_dyn_cloud_w: 60.0,
            nic_power_w: triad_core::constants::NIC_POWER_W,
            comm_overhead_ms: triad_core::constants::DEFAULT_OVERHEAD_MS,
        }
    }
}

impl EnergyPredictor {
    /// Cria preditor com os perfis padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitui o perfil de potência edge
    pub fn with_edge_profile(mut self, idle_w: f64, dyn_w: f64) -> Self {
        self.power_idle_edge_w = idle_w;
        self.power_dyn_edge_w = dyn_w;
        self
    }

    /// Substitui o perfil de potência cloud
    pub fn with_cloud_profile(mut self, idle_w: f64, dyn_w: f64) -> Self {
        self.power_idle_cloud_w = idle_w;
        self.power_dyn_cloud_w = dyn_w;
        self
    }

    fn t_exec(c_mi: f64, f_mi_s: f64) -> f64 {
        if f_mi_s <= 0.0 {
            f64::INFINITY
        } else {
            c_mi / f_mi_s
        }
    }

    /// Energia estimada para um candidato (J)
    pub fn predict_one(&self, x: &CandidateFeatures) -> f64 {
        let t_exec = Self::t_exec(x.task.c_mi, x.node.f_mi_s);
        let t_comm = transfer_time_s(
            x.task.s_mb,
            x.link.bandwidth_mbps,
            x.link.rtt_ms,
            x.link.loss,
            self.comm_overhead_ms,
        );
        let (p_idle, p_dyn) = if x.node.is_cloud() {
            (self.power_idle_cloud_w, self.power_dyn_cloud_w)
        } else {
            (self.power_idle_edge_w, self.power_dyn_edge_w)
        };
        let p_w = p_idle + x.node.util * p_dyn;
        p_w * t_exec + self.nic_power_w * t_comm
    }

    /// Energia estimada para todos os candidatos
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
