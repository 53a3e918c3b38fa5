//! Repair — re-seleção por score ponderado dentro do conjunto viável

use triad_predict::PredictionMap;

use crate::error::{GuardError, GuardResult};

/// Seleciona, no conjunto viável, o nó de menor score `α·R + β·L + γ·E`
///
/// Empates ficam com o primeiro encontrado na ordem do conjunto (estável,
/// nunca aleatorizado). Falha com conjunto viável vazio — quem chama deve
/// verificar a não-vacuidade antes.
pub fn repair_action(
    feasible: &[String],
    latency: &PredictionMap,
    energy: &PredictionMap,
    risk: &PredictionMap,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> GuardResult<String> {
    let mut best: Option<&String> = None;
    let mut best_score = f64::INFINITY;
    for nid in feasible {
        let l = latency.get(nid).copied().unwrap_or(f64::INFINITY);
        let e = energy.get(nid).copied().unwrap_or(f64::INFINITY);
        let r = risk.get(nid).copied().unwrap_or(1.0);
        let score = alpha * r + beta * l + gamma * e;
        if score < best_score {
            best_score = score;
            best = Some(nid);
        }
    }
    best.cloned().ok_or(GuardError::EmptyFeasibleSet)
}
