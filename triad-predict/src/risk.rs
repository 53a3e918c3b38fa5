//! Preditor de risco de SLA — logística da margem de latência

use serde::{Deserialize, Serialize};

use crate::PredictionMap;
use crate::features::CandidateFeatures;

/// Estimador da probabilidade de violação de prazo
///
/// `risco = sigmoid((L_hat - prazo) / tau)`; tau menor ⇒ limiar mais
/// abrupto. A sigmoide é avaliada em dois ramos para não estourar com
/// argumentos de grande magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlaRiskPredictor {
    /// Parâmetro de nitidez do limiar (s), sempre > 0
    pub tau_s: f64,
}

impl Default for SlaRiskPredictor {
    fn default() -> Self {
        Self { tau_s: 0.25 }
    }
}

impl SlaRiskPredictor {
    /// Cria preditor com nitidez configurada (saturada em 1e-6)
    pub fn new(tau_s: f64) -> Self {
        Self {
            tau_s: tau_s.max(1e-6),
        }
    }

    /// Sigmoide numericamente estável (ramo pelo sinal do expoente)
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            let ez = (-z).exp();
            1.0 / (1.0 + ez)
        } else {
            let ez = z.exp();
            ez / (1.0 + ez)
        }
    }

    /// Risco para um candidato dado sua latência estimada
    pub fn predict_one(&self, x: &CandidateFeatures, latency_hat_s: f64) -> f64 {
        let z = (latency_hat_s - x.task.d_s) / self.tau_s;
        Self::sigmoid(z)
    }

    /// Risco para todos os candidatos a partir do mapa de latências
    ///
    /// O domínio de iteração é o dos candidatos; latência ausente é tratada
    /// como infinita (risco certo), preservando a totalidade do preditor.
    pub fn predict_from_latency(
        &self,
        candidates: &std::collections::BTreeMap<String, CandidateFeatures>,
        latency_hat: &PredictionMap,
    ) -> PredictionMap {
        candidates
            .iter()
            .map(|(nid, x)| {
                let l = latency_hat.get(nid).copied().unwrap_or(f64::INFINITY);
                (nid.clone(), self.predict_one(x, l))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{LinkFeatures, NodeFeatures, TaskFeatures};

    fn candidate(deadline: f64) -> CandidateFeatures {
        CandidateFeatures {
            task: TaskFeatures {
                c_mi: 100.0,
                d_s: deadline,
                s_mb: 1.0,
                p: 0.0,
            },
            node: NodeFeatures {
                f_mi_s: 500.0,
                capacity_mi_step: 1000.0,
                queue_work_mi: 0.0,
                util: 0.0,
                energy_budget_j_step: -1.0,
                kind_is_cloud: 0.0,
            },
            link: LinkFeatures {
                bandwidth_mbps: 50.0,
                rtt_ms: 10.0,
                loss: 0.0,
            },
        }
    }

    #[test]
    fn test_risk_half_at_deadline() {
        let rp = SlaRiskPredictor::default();
        let r = rp.predict_one(&candidate(1.0), 1.0);
        assert!((r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_risk_monotone_in_latency() {
        let rp = SlaRiskPredictor::default();
        let low = rp.predict_one(&candidate(1.0), 0.5);
        let high = rp.predict_one(&candidate(1.0), 1.5);
        assert!(low < 0.5 && high > 0.5);
    }

    #[test]
    fn test_sigmoid_stable_at_extremes() {
        let rp = SlaRiskPredictor::new(0.25);
        let r_hi = rp.predict_one(&candidate(1.0), 1e6);
        let r_lo = rp.predict_one(&candidate(1.0), -1e6);
        assert!(r_hi.is_finite() && (r_hi - 1.0).abs() < 1e-12);
        assert!(r_lo.is_finite() && r_lo.abs() < 1e-12);
    }

    #[test]
    fn test_sharper_tau() {
        let soft = SlaRiskPredictor::new(0.5);
        let sharp = SlaRiskPredictor::new(0.05);
        let margin = 0.1;
        let r_soft = soft.predict_one(&candidate(1.0), 1.0 + margin);
        let r_sharp = sharp.predict_one(&candidate(1.0), 1.0 + margin);
        assert!(r_sharp > r_soft);
    }

    #[test]
    fn test_tau_floor() {
        let rp = SlaRiskPredictor::new(0.0);
        assert!(rp.tau_s >= 1e-6);
    }
}
