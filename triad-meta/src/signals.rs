//! Rastreador de sinais — janelas deslizantes de observações recentes

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use triad_core::env::StateSnapshot;

/// Configuração do rastreador
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Capacidade de cada janela (observações)
    pub window: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self { window: 50 }
    }
}

/// Redução escalar das cinco janelas
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceSignals {
    /// Taxa de violação de SLA (média)
    pub viol_rate: f64,
    /// Cauda de latência (percentil 90)
    pub lat_p90: f64,
    /// Cauda de energia (percentil 90)
    pub eng_p90: f64,
    /// Proxy de congestão (média)
    pub congestion: f64,
    /// Proxy de pressão de energia (média)
    pub energy_pressure: f64,
}

/// Cinco buffers circulares de capacidade fixa; o mais antigo é expulso
/// no transbordo
#[derive(Debug, Clone)]
pub struct SignalTracker {
    window: usize,
    lat_q: VecDeque<f64>,
    eng_q: VecDeque<f64>,
    viol_q: VecDeque<f64>,
    cong_q: VecDeque<f64>,
    energy_pressure_q: VecDeque<f64>,
}

fn push_bounded(q: &mut VecDeque<f64>, window: usize, v: f64) {
    if q.len() == window {
        q.pop_front();
    }
    q.push_back(v);
}

fn mean(q: &VecDeque<f64>) -> f64 {
    if q.is_empty() {
        0.0
    } else {
        q.iter().sum::<f64>() / q.len() as f64
    }
}

/// Percentil com interpolação linear entre vizinhos (convenção numpy)
fn percentile(q: &VecDeque<f64>, p: f64) -> f64 {
    if q.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = q.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}

impl SignalTracker {
    /// Cria rastreador com janelas vazias
    pub fn new(cfg: SignalConfig) -> Self {
        let w = cfg.window.max(1);
        Self {
            window: w,
            lat_q: VecDeque::with_capacity(w),
            eng_q: VecDeque::with_capacity(w),
            viol_q: VecDeque::with_capacity(w),
            cong_q: VecDeque::with_capacity(w),
            energy_pressure_q: VecDeque::with_capacity(w),
        }
    }

    /// Registra o resultado realizado de um commit
    pub fn update_from_step(&mut self, latency_s: f64, energy_j: f64, violation: u8) {
        push_bounded(&mut self.lat_q, self.window, latency_s);
        push_bounded(&mut self.eng_q, self.window, energy_j);
        push_bounded(&mut self.viol_q, self.window, f64::from(violation));
    }

    /// Deriva e registra os proxies de congestão e pressão de energia
    ///
    /// Congestão: `mean(rtt_ms)/1000 / mean(bw_mbps)`. Pressão de energia:
    /// utilização média restrita aos nós com orçamento de energia; zero se
    /// nenhum existe.
    pub fn update_from_state(&mut self, state: &StateSnapshot) {
        if state.nodes.is_empty() {
            return;
        }
        let n = state.nodes.len() as f64;
        let mean_rtt = state.nodes.iter().map(|x| x.rtt_ms).sum::<f64>() / n;
        let mean_bw = state
            .nodes
            .iter()
            .map(|x| x.bandwidth_mbps.max(triad_core::constants::EPS_BANDWIDTH))
            .sum::<f64>()
            / n;
        push_bounded(&mut self.cong_q, self.window, (mean_rtt / 1000.0) / mean_bw);

        let budgeted: Vec<f64> = state
            .nodes
            .iter()
            .filter(|x| x.energy_budget_j_step.is_some())
            .map(|x| x.util)
            .collect();
        let ep = if budgeted.is_empty() {
            0.0
        } else {
            budgeted.iter().sum::<f64>() / budgeted.len() as f64
        };
        push_bounded(&mut self.energy_pressure_q, self.window, ep);
    }

    /// Reduz as cinco janelas a escalares; janelas vazias reduzem a zero
    pub fn phi(&self) -> PerformanceSignals {
        PerformanceSignals {
            viol_rate: mean(&self.viol_q),
            lat_p90: percentile(&self.lat_q, 0.90),
            eng_p90: percentile(&self.eng_q, 0.90),
            congestion: mean(&self.cong_q),
            energy_pressure: mean(&self.energy_pressure_q),
        }
    }

    /// Número de observações de passo registradas (saturado na janela)
    pub fn len(&self) -> usize {
        self.lat_q.len()
    }

    /// Verifica se nenhuma observação de passo foi registrada
    pub fn is_empty(&self) -> bool {
        self.lat_q.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triad_core::env::NodeSnapshot;
    use triad_core::node::NodeKind;

    fn snapshot(utils: &[(f64, bool)]) -> StateSnapshot {
        StateSnapshot {
            nodes: utils
                .iter()
                .enumerate()
                .map(|(i, (util, budgeted))| NodeSnapshot {
                    node_id: format!("n{i}"),
                    kind: NodeKind::Edge,
                    f_mi_s: 500.0,
                    capacity_mi_step: 1000.0,
                    queue_work_mi: 0.0,
                    util: *util,
                    energy_budget_j_step: if *budgeted { Some(30.0) } else { None },
                    bandwidth_mbps: 50.0,
                    rtt_ms: 10.0,
                    loss: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_phi_is_zero() {
        let tracker = SignalTracker::new(SignalConfig::default());
        let phi = tracker.phi();
        assert_eq!(phi.viol_rate, 0.0);
        assert_eq!(phi.lat_p90, 0.0);
        assert_eq!(phi.congestion, 0.0);
    }

    #[test]
    fn test_ring_eviction() {
        let mut tracker = SignalTracker::new(SignalConfig { window: 3 });
        for i in 0..10 {
            tracker.update_from_step(i as f64, 0.0, 1);
        }
        assert_eq!(tracker.len(), 3);
        // restaram 7, 8, 9
        let phi = tracker.phi();
        assert!(phi.lat_p90 > 7.0);
        assert_eq!(phi.viol_rate, 1.0);
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let mut tracker = SignalTracker::new(SignalConfig { window: 10 });
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            tracker.update_from_step(v, v, 0);
        }
        // p90 de [1..5]: pos = 0.9*4 = 3.6 ⇒ 4 + 0.6*(5-4) = 4.6
        assert!((tracker.phi().lat_p90 - 4.6).abs() < 1e-12);
    }

    #[test]
    fn test_congestion_proxy() {
        let mut tracker = SignalTracker::new(SignalConfig::default());
        tracker.update_from_state(&snapshot(&[(0.5, true), (0.1, false)]));
        let phi = tracker.phi();
        // (10/1000) / 50
        assert!((phi.congestion - 0.0002).abs() < 1e-12);
        // pressão de energia restrita aos nós com orçamento
        assert!((phi.energy_pressure - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_energy_pressure_zero_without_budgeted_nodes() {
        let mut tracker = SignalTracker::new(SignalConfig::default());
        tracker.update_from_state(&snapshot(&[(0.9, false)]));
        assert_eq!(tracker.phi().energy_pressure, 0.0);
    }
}
