//! Métricas agregadas de episódio

use serde::{Deserialize, Serialize};

/// Resumo estatístico de um episódio
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Número de tarefas processadas
    pub n_tasks: usize,
    /// Fração de decisões com violação de SLA
    pub sla_viol_rate: f64,
    /// Latência média (s)
    pub lat_mean: f64,
    /// Percentil 95 da latência (s)
    pub lat_p95: f64,
    /// Energia média (J)
    pub eng_mean: f64,
    /// Percentil 95 da energia (J)
    pub eng_p95: f64,
    /// Recompensa média por decisão
    pub avg_reward: f64,
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Percentil com interpolação linear entre as duas ordens vizinhas
fn percentile(xs: &[f64], q: f64) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = (q / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Reduz as séries de um episódio a um [`EpisodeStats`]
///
/// Séries vazias produzem estatísticas zeradas, nunca NaN.
pub fn summarize(
    latencies: &[f64],
    energies: &[f64],
    violations: &[u8],
    rewards: &[f64],
) -> EpisodeStats {
    let n = latencies.len();
    let viol_rate = if violations.is_empty() {
        0.0
    } else {
        violations.iter().map(|&v| f64::from(v)).sum::<f64>() / violations.len() as f64
    };
    EpisodeStats {
        n_tasks: n,
        sla_viol_rate: viol_rate,
        lat_mean: mean(latencies),
        lat_p95: percentile(latencies, 95.0),
        eng_mean: mean(energies),
        eng_p95: percentile(energies, 95.0),
        avg_reward: mean(rewards),
    }
}
