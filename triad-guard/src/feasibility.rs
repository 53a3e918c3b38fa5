//! Predicado de viabilidade — conjunção curto-circuitada de restrições duras

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_core::task::Task;
use triad_predict::PredictionMap;
use triad_predict::features::CandidateFeatures;

/// Configuração das restrições duras
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeasibilityConfig {
    /// Exige latência prevista dentro do prazo
    pub enforce_deadline: bool,
    /// Exige energia prevista dentro do orçamento do nó
    pub enforce_energy_budget: bool,
    /// Exige risco abaixo do teto para tarefas de alta prioridade
    pub use_risk_threshold: bool,
    /// Teto de risco para alta prioridade
    pub risk_threshold_high_priority: f64,
    /// Piso de prioridade que ativa o teto de risco
    pub high_priority_min_p: i32,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            enforce_deadline: true,
            enforce_energy_budget: true,
            use_risk_threshold: true,
            risk_threshold_high_priority: 0.7,
            high_priority_min_p: 2,
        }
    }
}

/// Classifica um nó proposto como viável ou não
///
/// Cláusulas avaliadas nesta ordem exata (curto-circuito):
/// 1. demanda ≤ capacidade por passo do nó;
/// 2. latência prevista ≤ prazo (se habilitado);
/// 3. energia prevista ≤ orçamento presente e não-negativo (se habilitado;
///    orçamento negativo = sem restrição, espelhando o sentinela das features);
/// 4. risco previsto ≤ teto, apenas para prioridade ≥ piso (se habilitado).
///
/// Predicado puro, sem efeitos colaterais.
pub fn is_feasible(
    cfg: &FeasibilityConfig,
    task: &Task,
    node_capacity_mi_step: f64,
    energy_budget_j_step: Option<f64>,
    l_hat_s: f64,
    e_hat_j: f64,
    r_hat: f64,
) -> bool {
    if task.c_mi > node_capacity_mi_step {
        return false;
    }
    if cfg.enforce_deadline && l_hat_s > task.d_s {
        return false;
    }
    if cfg.enforce_energy_budget
        && let Some(budget) = energy_budget_j_step
        && budget >= 0.0
        && e_hat_j > budget
    {
        return false;
    }
    if cfg.use_risk_threshold
        && task.p >= cfg.high_priority_min_p
        && r_hat > cfg.risk_threshold_high_priority
    {
        return false;
    }
    true
}

/// Subconjunto viável dos candidatos, na ordem de iteração do mapa de
/// latências
pub fn feasible_set(
    cfg: &FeasibilityConfig,
    task: &Task,
    candidates: &BTreeMap<String, CandidateFeatures>,
    latency: &PredictionMap,
    energy: &PredictionMap,
    risk: &PredictionMap,
) -> Vec<String> {
    let mut nf = Vec::new();
    for (nid, l_hat) in latency {
        let Some(x) = candidates.get(nid) else {
            continue;
        };
        let e_hat = energy.get(nid).copied().unwrap_or(f64::INFINITY);
        let r_hat = risk.get(nid).copied().unwrap_or(1.0);
        if is_feasible(
            cfg,
            task,
            x.node.capacity_mi_step,
            x.node.energy_budget(),
            *l_hat,
            e_hat,
            r_hat,
        ) {
            nf.push(nid.clone());
        }
    }
    nf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(c_mi: f64, d_s: f64, p: i32) -> Task {
        Task::new("t1", c_mi, d_s, 1.0, p)
    }

    #[test]
    fn test_feasible_basic() {
        let cfg = FeasibilityConfig {
            use_risk_threshold: false,
            ..Default::default()
        };
        assert!(is_feasible(
            &cfg,
            &task(100.0, 2.0, 0),
            200.0,
            Some(50.0),
            1.0,
            10.0,
            0.2
        ));
    }

    #[test]
    fn test_capacity_clause_dominates() {
        let cfg = FeasibilityConfig::default();
        // demanda acima da capacidade: inviável mesmo com predições perfeitas
        assert!(!is_feasible(
            &cfg,
            &task(300.0, 2.0, 0),
            200.0,
            None,
            0.0,
            0.0,
            0.0
        ));
    }

    #[test]
    fn test_deadline_clause() {
        let cfg = FeasibilityConfig::default();
        assert!(!is_feasible(
            &cfg,
            &task(100.0, 1.0, 0),
            200.0,
            None,
            1.5,
            0.0,
            0.0
        ));
        // com enforcement desligado, passa
        let off = FeasibilityConfig {
            enforce_deadline: false,
            ..Default::default()
        };
        assert!(is_feasible(
            &off,
            &task(100.0, 1.0, 0),
            200.0,
            None,
            1.5,
            0.0,
            0.0
        ));
    }

    #[test]
    fn test_negative_budget_unconstrained() {
        let cfg = FeasibilityConfig::default();
        // orçamento presente mas negativo = sem restrição de energia
        assert!(is_feasible(
            &cfg,
            &task(100.0, 2.0, 0),
            200.0,
            Some(-1.0),
            1.0,
            1e9,
            0.0
        ));
        // orçamento não-negativo excedido = inviável
        assert!(!is_feasible(
            &cfg,
            &task(100.0, 2.0, 0),
            200.0,
            Some(10.0),
            1.0,
            11.0,
            0.0
        ));
    }

    #[test]
    fn test_feasible_set_subset_in_latency_order() {
        use triad_predict::features::{LinkFeatures, NodeFeatures, TaskFeatures};

        fn candidate(capacity: f64) -> CandidateFeatures {
            CandidateFeatures {
                task: TaskFeatures {
                    c_mi: 100.0,
                    d_s: 1.0,
                    s_mb: 1.0,
                    p: 0.0,
                },
                node: NodeFeatures {
                    f_mi_s: 500.0,
                    capacity_mi_step: capacity,
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

        let cfg = FeasibilityConfig::default();
        let t = task(100.0, 1.0, 0);

        // população mista: "b" estoura o prazo, "d" estoura a capacidade
        let mut cand = BTreeMap::new();
        let mut l = PredictionMap::new();
        let mut e = PredictionMap::new();
        let mut r = PredictionMap::new();
        for (nid, capacity, lat) in [
            ("c", 200.0, 0.5),
            ("a", 200.0, 0.3),
            ("b", 200.0, 5.0),
            ("d", 50.0, 0.2),
        ] {
            cand.insert(nid.to_string(), candidate(capacity));
            l.insert(nid.to_string(), lat);
            e.insert(nid.to_string(), 1.0);
            r.insert(nid.to_string(), 0.1);
        }

        let nf = feasible_set(&cfg, &t, &cand, &l, &e, &r);

        // subconjunto estrito dos candidatos, na ordem de iteração do mapa
        // de latências (lexicográfica), não na ordem de inserção
        assert_eq!(nf, vec!["a".to_string(), "c".to_string()]);
        assert!(nf.iter().all(|nid| cand.contains_key(nid)));
    }

    #[test]
    fn test_risk_only_for_high_priority() {
        let cfg = FeasibilityConfig::default();
        // prioridade baixa ignora o teto de risco
        assert!(is_feasible(
            &cfg,
            &task(100.0, 2.0, 0),
            200.0,
            None,
            1.0,
            0.0,
            0.99
        ));
        // prioridade alta respeita o teto
        assert!(!is_feasible(
            &cfg,
            &task(100.0, 2.0, 2),
            200.0,
            None,
            1.0,
            0.0,
            0.99
        ));
    }
}
